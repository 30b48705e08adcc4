use std::fmt;

const DEFAULT_TYPE: &str = "text/javascript";

/// A single script entry: an external file reference or an inline block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
    File {
        src: String,
        script_type: String,
        /// Extra attributes rendered verbatim (e.g. `defer`, `id`)
        attrs: Vec<(String, String)>,
    },
    Inline {
        contents: String,
        script_type: String,
    },
}

impl Script {
    pub fn file(src: impl Into<String>) -> Self {
        Script::File {
            src: src.into(),
            script_type: DEFAULT_TYPE.to_string(),
            attrs: Vec::new(),
        }
    }

    pub fn inline(contents: impl Into<String>) -> Self {
        Script::Inline {
            contents: contents.into(),
            script_type: DEFAULT_TYPE.to_string(),
        }
    }

    pub fn with_type(mut self, t: impl Into<String>) -> Self {
        match &mut self {
            Script::File { script_type, .. } | Script::Inline { script_type, .. } => {
                *script_type = t.into();
            }
        }
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Script::File { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    fn render(&self) -> String {
        match self {
            Script::File {
                src,
                script_type,
                attrs,
            } => {
                let mut extra = String::new();
                for (name, value) in attrs {
                    if value.is_empty() {
                        extra.push_str(&format!(" {}", name));
                    } else {
                        extra.push_str(&format!(" {}=\"{}\"", name, value));
                    }
                }
                format!(
                    "<script type=\"{}\" src=\"{}\"{}></script>",
                    script_type, src, extra
                )
            }
            Script::Inline {
                contents,
                script_type,
            } => format!(
                "<script type=\"{}\">\n{}\n</script>",
                script_type, contents
            ),
        }
    }

    fn src(&self) -> Option<&str> {
        match self {
            Script::File { src, .. } => Some(src),
            Script::Inline { .. } => None,
        }
    }
}

/// Ordered collection of script tags for a page head or footer.
///
/// File entries with a `src` already present in the list are dropped on
/// append/prepend, so the same library referenced by several partials is
/// emitted once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptList {
    scripts: Vec<Script>,
}

impl ScriptList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, script: Script) {
        if self.is_duplicate(&script) {
            return;
        }
        self.scripts.push(script);
    }

    pub fn prepend(&mut self, script: Script) {
        if self.is_duplicate(&script) {
            return;
        }
        self.scripts.insert(0, script);
    }

    pub fn append_file(&mut self, src: impl Into<String>) {
        self.append(Script::file(src));
    }

    pub fn prepend_file(&mut self, src: impl Into<String>) {
        self.prepend(Script::file(src));
    }

    pub fn append_inline(&mut self, contents: impl Into<String>) {
        self.append(Script::inline(contents));
    }

    pub fn contains_file(&self, src: &str) -> bool {
        self.scripts.iter().any(|s| s.src() == Some(src))
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn clear(&mut self) {
        self.scripts.clear();
    }

    /// One tag per line, in list order
    pub fn render(&self) -> String {
        self.scripts
            .iter()
            .map(Script::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn is_duplicate(&self, script: &Script) -> bool {
        match script.src() {
            Some(src) => self.contains_file(src),
            None => false,
        }
    }
}

impl fmt::Display for ScriptList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
