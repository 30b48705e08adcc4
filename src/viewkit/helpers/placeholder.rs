use std::fmt;

/// Ordered container of captured content fragments.
///
/// Items are joined with the separator, wrapped in prefix/postfix, and the
/// whole output indented line by line. An empty container renders as the
/// empty string with no prefix or postfix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderContainer {
    items: Vec<String>,
    prefix: String,
    postfix: String,
    separator: String,
    indent: String,
}

impl PlaceholderContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all captured content with a single item
    pub fn set(&mut self, item: impl Into<String>) {
        self.items.clear();
        self.items.push(item.into());
    }

    pub fn append(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn prepend(&mut self, item: impl Into<String>) {
        self.items.insert(0, item.into());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_postfix(&mut self, postfix: impl Into<String>) -> &mut Self {
        self.postfix = postfix.into();
        self
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Indent prepended to every rendered output line
    pub fn set_indent(&mut self, indent: impl Into<String>) -> &mut Self {
        self.indent = indent.into();
        self
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let joined = self.items.join(&self.separator);
        let output = format!("{}{}{}", self.prefix, joined, self.postfix);

        if self.indent.is_empty() {
            return output;
        }

        output
            .lines()
            .map(|line| format!("{}{}", self.indent, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for PlaceholderContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        let mut container = PlaceholderContainer::new();
        container.set_prefix("<ul>").set_postfix("</ul>");
        assert_eq!(container.render(), "");
    }

    #[test]
    fn test_append_and_separator() {
        let mut container = PlaceholderContainer::new();
        container.set_separator(", ");
        container.append("one");
        container.append("two");
        container.append("three");
        assert_eq!(container.render(), "one, two, three");
    }

    #[test]
    fn test_prepend_goes_first() {
        let mut container = PlaceholderContainer::new();
        container.set_separator(" ");
        container.append("world");
        container.prepend("hello");
        assert_eq!(container.render(), "hello world");
    }

    #[test]
    fn test_set_replaces_all_items() {
        let mut container = PlaceholderContainer::new();
        container.append("a");
        container.append("b");
        container.set("only");
        assert_eq!(container.render(), "only");
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_prefix_postfix_wrap_joined_items() {
        let mut container = PlaceholderContainer::new();
        container
            .set_prefix("<ul><li>")
            .set_postfix("</li></ul>")
            .set_separator("</li><li>");
        container.append("a");
        container.append("b");
        assert_eq!(container.render(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_indent_applies_to_every_line() {
        let mut container = PlaceholderContainer::new();
        container.set_separator("\n").set_indent("  ");
        container.append("line one");
        container.append("line two");
        assert_eq!(container.render(), "  line one\n  line two");
    }

    #[test]
    fn test_display_matches_render() {
        let mut container = PlaceholderContainer::new();
        container.append("x");
        assert_eq!(container.to_string(), container.render());
    }

    #[test]
    fn test_clear() {
        let mut container = PlaceholderContainer::new();
        container.append("x");
        container.clear();
        assert!(container.is_empty());
        assert_eq!(container.render(), "");
    }
}
