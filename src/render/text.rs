use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text { text: String },
    Link { label: String, href: String },
}

/// Translated text with embedded links, kept as segments so the HTML
/// output can escape the text and still emit anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub segments: Vec<Segment>,
}

impl RichText {
    /// Splits `template` on `{name}` placeholders, replacing each one found
    /// in `links` with a link segment. Unknown placeholders stay literal.
    pub fn from_template(template: &str, links: &[(&str, Link)]) -> Self {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            let name = &rest[open + 1..close];
            match links.iter().find(|(key, _)| *key == name) {
                Some((_, link)) => {
                    text.push_str(&rest[..open]);
                    if !text.is_empty() {
                        segments.push(Segment::Text {
                            text: std::mem::take(&mut text),
                        });
                    }
                    segments.push(Segment::Link {
                        label: link.label.clone(),
                        href: link.href.clone(),
                    });
                }
                None => text.push_str(&rest[..=close]),
            }
            rest = &rest[close + 1..];
        }

        text.push_str(rest);
        if !text.is_empty() {
            segments.push(Segment::Text { text });
        }
        Self { segments }
    }

    /// The text with link labels inlined.
    pub fn plain(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text { text } => text.as_str(),
                Segment::Link { label, .. } => label.as_str(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_around_links() {
        let gt = Link::new("General Translation", "https://generaltranslation.com");
        let text = RichText::from_template("Built with {gt}.", &[("gt", gt)]);
        assert_eq!(text.segments.len(), 3);
        assert_eq!(
            text.segments[1],
            Segment::Link {
                label: "General Translation".into(),
                href: "https://generaltranslation.com".into()
            }
        );
        assert_eq!(text.plain(), "Built with General Translation.");
    }

    #[test]
    fn test_link_at_start_and_unknown_placeholder() {
        let seo = Link::new("SEO", "/seo");
        let text = RichText::from_template("{seo} for {n} pages", &[("seo", seo)]);
        assert!(matches!(text.segments[0], Segment::Link { .. }));
        assert_eq!(text.plain(), "SEO for {n} pages");
    }

    #[test]
    fn test_unbalanced_brace_is_literal() {
        let text = RichText::from_template("a { b", &[]);
        assert_eq!(text.plain(), "a { b");
    }
}
