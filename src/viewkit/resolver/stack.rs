use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::{ResolveError, Resolver};
use crate::config::{ResolverConfig, DEFAULT_SUFFIX};
use crate::context::RenderContext;

/// Names containing `../` or `..\` escape the configured directories
static TRAVERSAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\.[/\\]").unwrap());

/// Archive/stream-style directory prefixes such as `tar://` or `zip://`,
/// where canonical path expansion is unreliable
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://").unwrap());

/// Resolves template names by searching an ordered list of base directories.
///
/// Directories are normalized on insertion (trailing separators stripped, a
/// single platform separator appended) and searched in insertion order; the
/// first readable match wins. Duplicate entries are legal and are simply
/// searched redundantly.
///
/// A name without an extension gets `.` plus the configured default suffix
/// appended before the search. Names attempting parent-directory traversal
/// are rejected outright while LFI protection is on (the default).
#[derive(Debug, Clone)]
pub struct TemplatePathStack {
    paths: Vec<String>,
    default_suffix: String,
    lfi_protection: bool,
}

impl Default for TemplatePathStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplatePathStack {
    /// Empty search path, suffix `"phtml"`, LFI protection on
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
            lfi_protection: true,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        let mut stack = Self::new();
        stack.lfi_protection = config.lfi_protection;
        stack.set_default_suffix(&config.default_suffix);
        stack.add_paths(&config.script_paths);
        stack
    }

    /// Append a directory to the end of the search order
    pub fn add_path(&mut self, path: impl AsRef<str>) {
        self.paths.push(normalize(path.as_ref()));
    }

    /// Append several directories, preserving their relative order
    pub fn add_paths<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            self.add_path(path);
        }
    }

    /// Replace the entire search path
    pub fn set_paths<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear_paths();
        self.add_paths(paths);
    }

    /// Adopt another stack's search path wholesale
    pub fn set_paths_from(&mut self, other: &TemplatePathStack) {
        self.paths = other.paths.clone();
    }

    pub fn clear_paths(&mut self) {
        self.paths.clear();
    }

    /// The normalized search path, in search order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Set the suffix appended to names lacking an extension.
    /// Leading dots are stripped: `".xml"` becomes `"xml"`.
    pub fn set_default_suffix(&mut self, suffix: &str) {
        self.default_suffix = suffix.trim_start_matches('.').to_string();
    }

    pub fn default_suffix(&self) -> &str {
        &self.default_suffix
    }

    pub fn set_lfi_protection(&mut self, flag: bool) {
        self.lfi_protection = flag;
    }

    pub fn is_lfi_protection_on(&self) -> bool {
        self.lfi_protection
    }

    /// Append the default suffix when the name carries no extension.
    /// Extension presence is judged syntactically; no disk access here.
    fn apply_suffix(&self, name: &str) -> String {
        if Path::new(name).extension().is_some() {
            name.to_string()
        } else {
            format!("{}.{}", name, self.default_suffix)
        }
    }
}

impl Resolver for TemplatePathStack {
    fn resolve(
        &self,
        name: &str,
        _context: Option<&RenderContext>,
    ) -> Result<PathBuf, ResolveError> {
        // Guard runs before suffix handling so a traversal attempt cannot be
        // disguised by suffix normalization, and before any disk access.
        if self.lfi_protection && TRAVERSAL.is_match(name) {
            return Err(ResolveError::ParentTraversal);
        }

        if self.paths.is_empty() {
            return Err(ResolveError::NoPaths);
        }

        let name = self.apply_suffix(name);

        for dir in &self.paths {
            let candidate = PathBuf::from(format!("{dir}{name}"));
            if !is_readable_file(&candidate) {
                continue;
            }

            match fs::canonicalize(&candidate) {
                Ok(resolved) => return Ok(resolved),
                Err(_) => {
                    // Canonicalization and archive-style streams do not mix;
                    // trust the concatenated path if it at least exists.
                    // Either way the scan stops here rather than moving on
                    // to the next directory.
                    if SCHEME_PREFIX.is_match(dir) && candidate.exists() {
                        return Ok(candidate);
                    }
                    break;
                }
            }
        }

        Err(ResolveError::NotFound { name })
    }
}

/// Strip trailing separators, then append exactly one platform separator
fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches(['/', '\\']);
    format!("{}{}", trimmed, MAIN_SEPARATOR)
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && fs::File::open(path).is_ok()
}
