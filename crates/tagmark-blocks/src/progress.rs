//! `progress` block.

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, classes, lines, render_content, text, wrap};

const DEFAULT_MAX: f64 = 100.0;

/// Horizontal progress bar.
///
/// ```text
/// {~ progress value=30 max_value=40 label="{{value}} of {{max_value}} done" /~}
/// ```
///
/// `value` is clamped into `[0, max_value]` and the percentage rounded to
/// two decimals. Label placeholders `{{value}}`, `{{max_value}}` and
/// `{{percentage}}` are substituted. Without a label the percentage is shown
/// unless `show_percentage=false`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressBlock;

impl BlockRenderer for ProgressBlock {
    fn name(&self) -> &str {
        "progress"
    }

    fn optional_attributes(&self) -> &[&str] {
        &[
            "value",
            "max_value",
            "label",
            "show_percentage",
            "striped",
            "animated",
            "rounded",
            "color",
            "bg_color",
            "height",
            "class",
            "id",
        ]
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let value = match attrs.get("value").map(parse_number) {
            None => 0.0,
            Some(Some(v)) => v,
            Some(None) => {
                ctx.warn(format!(
                    "invalid value '{}', using 0",
                    attrs.get_or("value", "")
                ));
                0.0
            }
        };
        let max = match attrs.get("max_value").map(parse_number) {
            None => DEFAULT_MAX,
            Some(Some(m)) if m > 0.0 => m,
            Some(_) => {
                ctx.warn(format!(
                    "invalid max_value '{}', must be a positive number; using 100",
                    attrs.get_or("max_value", "")
                ));
                DEFAULT_MAX
            }
        };

        let percentage = round2(value.clamp(0.0, max) / max * 100.0);
        let label = attrs.get("label").filter(|l| !l.is_empty()).map(|l| {
            l.replace("{{value}}", &value.to_string())
                .replace("{{max_value}}", &max.to_string())
                .replace("{{percentage}}", &percentage.to_string())
        });
        let show_percentage = attrs.flag("show_percentage", label.is_none());
        let label_text = match label {
            Some(label) => label,
            None if show_percentage => format!("{percentage}%"),
            None => String::new(),
        };

        let height = attrs.get_or("height", "md");
        let track_class = classes([
            "sb-progress-track",
            format!("sb-bg-{}", attrs.get_or("bg_color", "white-50")).as_str(),
            if attrs.flag("rounded", true) { "sb-rounded" } else { "" },
        ]);
        let bar_class = classes([
            "sb-progress-bar",
            format!("sb-bg-{}", attrs.get_or("color", "primary")).as_str(),
            if attrs.flag("striped", false) { "sb-striped" } else { "" },
            if attrs.flag("animated", false) { "sb-animated" } else { "" },
        ]);
        let label_html = if label_text.is_empty() {
            String::new()
        } else {
            format!("<span class=\"sb-progress-label\">{}</span>", text(&label_text))
        };

        let bar = wrap(
            &format!(
                "<div{} role=\"progressbar\" style=\"width: {percentage}%\" \
                 aria-valuenow=\"{value}\" aria-valuemin=\"0\" aria-valuemax=\"{max}\">",
                attr("class", &bar_class)
            ),
            &label_html,
            "</div>",
        );
        let track = wrap(
            &format!("<div{}>", attr("class", &track_class)),
            &bar,
            "</div>",
        );
        let body = render_content(content);
        let body = if body.is_empty() {
            body
        } else {
            wrap("<div class=\"sb-progress-content\">", &body, "</div>")
        };

        let class = classes([
            "sb-progress",
            format!("sb-progress-{height}").as_str(),
            attrs.get_or("class", ""),
        ]);
        let id = attrs.get("id").map(|id| attr("id", id)).unwrap_or_default();
        Ok(wrap(
            &format!("<div{}{id}>", attr("class", &class)),
            &lines([track.as_str(), body.as_str()]),
            "</div>",
        ))
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(raw: &str) -> (String, Vec<String>) {
        let mut ctx = RenderContext::new();
        let html = ProgressBlock
            .render(&Attributes::parse(raw), None, &mut ctx)
            .unwrap();
        (html, ctx.take_warnings())
    }

    #[test]
    fn test_defaults() {
        let (html, warnings) = render("");
        assert_eq!(
            html,
            "<div class=\"sb-progress sb-progress-md\">\n\
             <div class=\"sb-progress-track sb-bg-white-50 sb-rounded\">\n\
             <div class=\"sb-progress-bar sb-bg-primary\" role=\"progressbar\" style=\"width: 0%\" \
             aria-valuenow=\"0\" aria-valuemin=\"0\" aria-valuemax=\"100\">\n\
             <span class=\"sb-progress-label\">0%</span>\n\
             </div>\n\
             </div>\n\
             </div>"
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_percentage_rounding() {
        let (html, _) = render("value=1 max_value=3");
        assert!(html.contains("style=\"width: 33.33%\""));
        assert!(html.contains(">33.33%</span>"));
    }

    #[test]
    fn test_value_clamped() {
        let (html, _) = render("value=150");
        assert!(html.contains("style=\"width: 100%\""));
        let (html, _) = render("value=-5");
        assert!(html.contains("style=\"width: 0%\""));
    }

    #[test]
    fn test_invalid_max_value() {
        for raw in ["max_value=0", "max_value=-1", "max_value=lots"] {
            let (html, warnings) = render(&format!("value=50 {raw}"));
            assert!(html.contains("aria-valuemax=\"100\""), "{raw}");
            assert!(html.contains("width: 50%"), "{raw}");
            assert_eq!(warnings.len(), 1, "{raw}");
        }
    }

    #[test]
    fn test_invalid_value() {
        let (html, warnings) = render("value=half");
        assert!(html.contains("width: 0%"));
        assert_eq!(warnings, vec!["invalid value 'half', using 0"]);
    }

    #[test]
    fn test_label_placeholders() {
        let (html, _) = render(r#"value=30 max_value=40 label="{{value}} of {{max_value}} ({{percentage}}%)""#);
        assert!(html.contains("<span class=\"sb-progress-label\">30 of 40 (75%)</span>"));
    }

    #[test]
    fn test_label_hides_percentage_by_default() {
        let (html, _) = render("value=10 label=Loading show_percentage=false");
        assert!(html.contains(">Loading</span>"));
        let (html, _) = render("value=10 show_percentage=false");
        assert!(!html.contains("sb-progress-label"));
        assert!(html.contains("aria-valuemax=\"100\"></div>"));
    }

    #[test]
    fn test_styling_flags() {
        let (html, _) = render("striped animated rounded=false color=success height=lg #upload .thin");
        assert!(html.starts_with("<div class=\"sb-progress sb-progress-lg thin\" id=\"upload\">"));
        assert!(html.contains("sb-progress-track sb-bg-white-50\""));
        assert!(html.contains("sb-progress-bar sb-bg-success sb-striped sb-animated\""));
    }

    #[test]
    fn test_content_below_bar() {
        let mut ctx = RenderContext::new();
        let html = ProgressBlock
            .render(&Attributes::parse("value=5"), Some("Almost *there*"), &mut ctx)
            .unwrap();
        assert!(html.ends_with(
            "<div class=\"sb-progress-content\">\n<p>Almost <em>there</em></p>\n</div>\n</div>"
        ));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666).to_string(), "66.67");
        assert_eq!(round2(12.5).to_string(), "12.5");
        assert_eq!(round2(40.0).to_string(), "40");
    }
}
