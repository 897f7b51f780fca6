//! `alert` block.

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, classes, render_content, wrap};

const ALERT_TYPES: [&str; 6] = ["info", "warning", "success", "danger", "primary", "secondary"];
const DEFAULT_TYPE: &str = "info";

/// Highlighted message box.
///
/// ```text
/// {~ alert type="warning" ~}
/// Back up your data first.
/// {~~}
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertBlock;

impl BlockRenderer for AlertBlock {
    fn name(&self) -> &str {
        "alert"
    }

    fn optional_attributes(&self) -> &[&str] {
        &["type", "class"]
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let requested = attrs.get_or("type", DEFAULT_TYPE).to_lowercase();
        let kind = if ALERT_TYPES.contains(&requested.as_str()) {
            requested.as_str()
        } else {
            ctx.warn(format!(
                "invalid alert type '{requested}', using '{DEFAULT_TYPE}' (valid: {})",
                ALERT_TYPES.join(", ")
            ));
            DEFAULT_TYPE
        };

        let class = classes([
            "sb-alert",
            format!("sb-alert-{kind}").as_str(),
            attrs.get_or("class", ""),
        ]);
        Ok(wrap(
            &format!("<div{} role=\"alert\">", attr("class", &class)),
            &render_content(content),
            "</div>",
        ))
    }
}
