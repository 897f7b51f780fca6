//! `practice` block.

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, classes, lines, render_content, text, wrap};

/// Metadata fields with their labels and defaults.
const FIELDS: [(&str, &str, &str); 4] = [
    ("difficulty", "Difficulty", "Moderate"),
    ("timeframe", "Timeframe", "Varies"),
    ("impact", "Impact", "Medium"),
    ("focus", "Focus", "General"),
];

/// Exercise or practice card with difficulty, timeframe, impact and focus.
#[derive(Debug, Default, Clone, Copy)]
pub struct PracticeBlock;

impl BlockRenderer for PracticeBlock {
    fn name(&self) -> &str {
        "practice"
    }

    fn optional_attributes(&self) -> &[&str] {
        &["difficulty", "timeframe", "impact", "focus", "class"]
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        _ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let meta: Vec<String> = FIELDS
            .iter()
            .map(|(key, label, default)| {
                format!(
                    "<div class=\"sb-practice-{key}\"><dt>{label}</dt><dd>{}</dd></div>",
                    text(attrs.get_or(key, default))
                )
            })
            .collect();
        let meta = wrap(
            "<dl class=\"sb-practice-meta\">",
            &meta.join("\n"),
            "</dl>",
        );
        let body = wrap(
            "<div class=\"sb-practice-body\">",
            &render_content(content),
            "</div>",
        );

        let class = classes(["sb-practice", attrs.get_or("class", "")]);
        Ok(wrap(
            &format!("<div{}>", attr("class", &class)),
            &lines([meta.as_str(), body.as_str()]),
            "</div>",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let html = PracticeBlock
            .render(&Attributes::new(), Some("Do it."), &mut RenderContext::new())
            .unwrap();
        assert_eq!(
            html,
            "<div class=\"sb-practice\">\n\
             <dl class=\"sb-practice-meta\">\n\
             <div class=\"sb-practice-difficulty\"><dt>Difficulty</dt><dd>Moderate</dd></div>\n\
             <div class=\"sb-practice-timeframe\"><dt>Timeframe</dt><dd>Varies</dd></div>\n\
             <div class=\"sb-practice-impact\"><dt>Impact</dt><dd>Medium</dd></div>\n\
             <div class=\"sb-practice-focus\"><dt>Focus</dt><dd>General</dd></div>\n\
             </dl>\n\
             <div class=\"sb-practice-body\">\n<p>Do it.</p>\n</div>\n\
             </div>"
        );
    }

    #[test]
    fn test_overrides() {
        let attrs = Attributes::parse(r#"difficulty=Hard timeframe="2 weeks" focus='<Core>'"#);
        let html = PracticeBlock
            .render(&attrs, None, &mut RenderContext::new())
            .unwrap();
        assert!(html.contains("<dd>Hard</dd>"));
        assert!(html.contains("<dd>2 weeks</dd>"));
        assert!(html.contains("<dd>Medium</dd>"));
        assert!(html.contains("<dd>&lt;Core&gt;</dd>"));
    }
}
