//! `card` block.

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, classes, lines, render_content, text, wrap};

/// Bordered card with optional title and footer.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardBlock;

impl BlockRenderer for CardBlock {
    fn name(&self) -> &str {
        "card"
    }

    fn optional_attributes(&self) -> &[&str] {
        &["title", "footer", "class"]
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        _ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let header = attrs
            .get("title")
            .filter(|t| !t.is_empty())
            .map(|title| {
                format!(
                    "<div class=\"sb-card-header\"><h3 class=\"sb-card-title\">{}</h3></div>",
                    text(title)
                )
            })
            .unwrap_or_default();
        let footer = attrs
            .get("footer")
            .filter(|f| !f.is_empty())
            .map(|footer| format!("<div class=\"sb-card-footer\">{}</div>", text(footer)))
            .unwrap_or_default();
        let body = wrap(
            "<div class=\"sb-card-body\">",
            &render_content(content),
            "</div>",
        );

        let class = classes(["sb-card", attrs.get_or("class", "")]);
        Ok(wrap(
            &format!("<div{}>", attr("class", &class)),
            &lines([header.as_str(), body.as_str(), footer.as_str()]),
            "</div>",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(raw: &str, content: Option<&str>) -> String {
        CardBlock
            .render(&Attributes::parse(raw), content, &mut RenderContext::new())
            .unwrap()
    }

    #[test]
    fn test_full_card() {
        let html = render(r#"title="A & B" footer='Updated today' .shadow"#, Some("Body"));
        assert_eq!(
            html,
            "<div class=\"sb-card shadow\">\n\
             <div class=\"sb-card-header\"><h3 class=\"sb-card-title\">A &amp; B</h3></div>\n\
             <div class=\"sb-card-body\">\n<p>Body</p>\n</div>\n\
             <div class=\"sb-card-footer\">Updated today</div>\n\
             </div>"
        );
    }

    #[test]
    fn test_minimal_card() {
        assert_eq!(
            render("", None),
            "<div class=\"sb-card\">\n<div class=\"sb-card-body\"></div>\n</div>"
        );
    }
}
