use std::path::PathBuf;

use crate::context::RenderContext;
use crate::resolver::{ResolveError, Resolver};

/// Default context variable the inner view's output is captured under.
pub const CONTENT_KEY: &str = "content";

/// Accessor for the enclosing layout template.
///
/// Holds the logical name of the layout script and whether layout rendering
/// is enabled for the current response. Locating the actual file is
/// delegated to whatever [`Resolver`] the render pass is using.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    template: String,
    enabled: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("layout")
    }
}

impl Layout {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            enabled: true,
        }
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Skip layout rendering for this response (e.g. partial/AJAX output)
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Locate the layout script through `resolver`
    pub fn resolve(
        &self,
        resolver: &dyn Resolver,
        context: Option<&RenderContext>,
    ) -> Result<PathBuf, ResolveError> {
        resolver.resolve(&self.template, context)
    }

    /// Store the inner view's rendered output on the context, under the
    /// conventional content key, for the layout script to pick up
    pub fn capture(&self, context: &mut RenderContext, rendered: impl Into<String>) {
        context.set(CONTENT_KEY, rendered.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::TemplateMapResolver;
    use serde_json::json;

    #[test]
    fn test_default_template_name() {
        let layout = Layout::default();
        assert_eq!(layout.template(), "layout");
        assert!(layout.is_enabled());
    }

    #[test]
    fn test_enable_disable() {
        let mut layout = Layout::default();
        layout.disable();
        assert!(!layout.is_enabled());
        layout.enable();
        assert!(layout.is_enabled());
    }

    #[test]
    fn test_resolves_through_resolver() {
        let resolver = TemplateMapResolver::from_iter([("two-col", "/layouts/two-col.phtml")]);
        let layout = Layout::new("two-col");

        let path = layout.resolve(&resolver, None).unwrap();
        assert_eq!(path, PathBuf::from("/layouts/two-col.phtml"));
    }

    #[test]
    fn test_missing_layout_is_soft_failure() {
        let resolver = TemplateMapResolver::from_iter([("layout", "/layouts/layout.phtml")]);
        let layout = Layout::new("missing");

        let err = layout.resolve(&resolver, None).unwrap_err();
        assert!(err.is_soft());
    }

    #[test]
    fn test_capture_stores_content_on_context() {
        let mut ctx = RenderContext::new();
        let layout = Layout::default();
        layout.capture(&mut ctx, "<p>inner</p>");

        assert_eq!(ctx.get(CONTENT_KEY), Some(&json!("<p>inner</p>")));
    }
}
