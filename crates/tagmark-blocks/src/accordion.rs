//! `accordion` block.

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, classes, render_content, text, wrap};

/// Collapsible section built on `<details>`.
///
/// ```text
/// {~ accordion title="Show answer" open ~}
/// 42
/// {~~}
/// ```
///
/// `open` is a switch read with [`Attributes::flag`]: `open`, `open=yes` and
/// `open=true` expand the section, while `open=false` or `open=no` keep it
/// collapsed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccordionBlock;

impl BlockRenderer for AccordionBlock {
    fn name(&self) -> &str {
        "accordion"
    }

    fn optional_attributes(&self) -> &[&str] {
        &["title", "open", "class"]
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        _ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let class = classes(["sb-accordion", attrs.get_or("class", "")]);
        let open = if attrs.flag("open", false) { " open" } else { "" };
        let summary = format!(
            "<summary class=\"sb-accordion-title\">{}</summary>",
            text(attrs.get_or("title", ""))
        );
        let body = wrap(
            "<div class=\"sb-accordion-body\">",
            &render_content(content),
            "</div>",
        );

        Ok(format!(
            "<details{}{open}>\n{summary}\n{body}\n</details>",
            attr("class", &class)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(raw: &str) -> String {
        AccordionBlock
            .render(&Attributes::parse(raw), Some("42"), &mut RenderContext::new())
            .unwrap()
    }

    #[test]
    fn test_closed_by_default() {
        assert_eq!(
            render("title=Answer"),
            "<details class=\"sb-accordion\">\n\
             <summary class=\"sb-accordion-title\">Answer</summary>\n\
             <div class=\"sb-accordion-body\">\n<p>42</p>\n</div>\n\
             </details>"
        );
    }

    #[test]
    fn test_open_flag() {
        assert!(render("open").starts_with("<details class=\"sb-accordion\" open>"));
        assert!(render("open=yes").starts_with("<details class=\"sb-accordion\" open>"));
        assert!(render("open=false").starts_with("<details class=\"sb-accordion\">"));
        assert!(render("open=no").starts_with("<details class=\"sb-accordion\">"));
        assert!(render("").starts_with("<details class=\"sb-accordion\">"));
    }
}
