use std::fmt;

/// Builds an HTML `<object>` embed with attributes and `<param>` children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEmbed {
    data: String,
    mime_type: String,
    attribs: Vec<(String, String)>,
    params: Vec<(String, String)>,
}

impl ObjectEmbed {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
            attribs: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn attrib(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attribs.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn render(&self) -> String {
        let mut attribs = String::new();
        for (name, value) in &self.attribs {
            attribs.push_str(&format!(" {}=\"{}\"", name, value));
        }

        if self.params.is_empty() {
            return format!(
                "<object data=\"{}\" type=\"{}\"{}></object>",
                self.data, self.mime_type, attribs
            );
        }

        let params = self
            .params
            .iter()
            .map(|(name, value)| format!("  <param name=\"{}\" value=\"{}\" />", name, value))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "<object data=\"{}\" type=\"{}\"{}>\n{}\n</object>",
            self.data, self.mime_type, attribs, params
        )
    }
}

impl fmt::Display for ObjectEmbed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_object() {
        let embed = ObjectEmbed::new("/media/chart.svg", "image/svg+xml");
        assert_eq!(
            embed.render(),
            "<object data=\"/media/chart.svg\" type=\"image/svg+xml\"></object>"
        );
    }

    #[test]
    fn test_attribs_and_params() {
        let embed = ObjectEmbed::new("/media/movie.swf", "application/x-shockwave-flash")
            .attrib("width", "640")
            .attrib("height", "480")
            .param("quality", "high");

        assert_eq!(
            embed.render(),
            "<object data=\"/media/movie.swf\" type=\"application/x-shockwave-flash\" \
             width=\"640\" height=\"480\">\n  \
             <param name=\"quality\" value=\"high\" />\n</object>"
        );
    }

    #[test]
    fn test_param_order_preserved() {
        let embed = ObjectEmbed::new("d", "t").param("a", "1").param("b", "2");
        let rendered = embed.render();
        assert!(rendered.find("name=\"a\"").unwrap() < rendered.find("name=\"b\"").unwrap());
    }
}
