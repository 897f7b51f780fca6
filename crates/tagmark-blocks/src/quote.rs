//! `quote` block.

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, classes, lines, render_content, text, wrap};

/// Pull quote with attribution.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteBlock;

impl BlockRenderer for QuoteBlock {
    fn name(&self) -> &str {
        "quote"
    }

    fn optional_attributes(&self) -> &[&str] {
        &["author", "source", "image", "class"]
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        _ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let author = attrs.get_or("author", "");
        let source = attrs.get_or("source", "");
        let image = attrs.get_or("image", "");

        let image_html = if image.is_empty() {
            String::new()
        } else {
            format!(
                "<img class=\"sb-quote-image\"{}{}>",
                attr("src", image),
                attr("alt", author)
            )
        };
        let cite = match (author.is_empty(), source.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!("<cite>{}</cite>", text(author)),
            (true, false) => format!("<span class=\"sb-quote-source\">{}</span>", text(source)),
            (false, false) => format!(
                "<cite>{}</cite>, <span class=\"sb-quote-source\">{}</span>",
                text(author),
                text(source)
            ),
        };
        let attribution = lines([image_html.as_str(), cite.as_str()]);
        let footer = if attribution.is_empty() {
            String::new()
        } else {
            wrap("<footer class=\"sb-quote-footer\">", &attribution, "</footer>")
        };

        let body = wrap(
            "<div class=\"sb-quote-content\">",
            &render_content(content),
            "</div>",
        );
        let class = classes(["sb-quote", attrs.get_or("class", "")]);
        Ok(wrap(
            &format!("<blockquote{}>", attr("class", &class)),
            &lines([body.as_str(), footer.as_str()]),
            "</blockquote>",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(raw: &str, content: &str) -> String {
        QuoteBlock
            .render(&Attributes::parse(raw), Some(content), &mut RenderContext::new())
            .unwrap()
    }

    #[test]
    fn test_with_attribution() {
        let html = render(
            r#"author="Ada Lovelace" source="Notes" image=ada.png"#,
            "Imagination is the discovering faculty.",
        );
        assert_eq!(
            html,
            "<blockquote class=\"sb-quote\">\n\
             <div class=\"sb-quote-content\">\n<p>Imagination is the discovering faculty.</p>\n</div>\n\
             <footer class=\"sb-quote-footer\">\n\
             <img class=\"sb-quote-image\" src=\"ada.png\" alt=\"Ada Lovelace\">\n\
             <cite>Ada Lovelace</cite>, <span class=\"sb-quote-source\">Notes</span>\n\
             </footer>\n\
             </blockquote>"
        );
    }

    #[test]
    fn test_without_attribution() {
        let html = render("", "Anonymous");
        assert!(!html.contains("<footer"));
        assert!(html.contains("<p>Anonymous</p>"));
    }

    #[test]
    fn test_author_only() {
        let html = render("author=Plato", "x");
        assert!(html.contains("<footer class=\"sb-quote-footer\">\n<cite>Plato</cite>\n</footer>"));
    }
}
