//! `hero` block.

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, classes, lines, render_content, wrap};

const LAYOUTS: [&str; 6] = [
    "text_left_image_right",
    "text_center_image_background",
    "text_only_centered",
    "text_right_image_left",
    "image_top_text_bottom",
    "image_only_full",
];
const DEFAULT_LAYOUT: &str = "text_left_image_right";

/// Full-width banner with text and an optional image.
///
/// `layout` decides where the image goes relative to the text:
///
/// | Layout | Order |
/// |---|---|
/// | `text_left_image_right` | text, image |
/// | `text_right_image_left` | image, text |
/// | `image_top_text_bottom` | image, text |
/// | `text_center_image_background` | image as background, text on top |
/// | `text_only_centered` | text only |
/// | `image_only_full` | image only |
#[derive(Debug, Default, Clone, Copy)]
pub struct HeroBlock;

impl BlockRenderer for HeroBlock {
    fn name(&self) -> &str {
        "hero"
    }

    fn optional_attributes(&self) -> &[&str] {
        &[
            "layout",
            "image_src",
            "image_alt",
            "bg_color",
            "text_color",
            "text_bg_color",
            "min_height",
            "content_align_vertical",
            "class",
        ]
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let requested = attrs.get_or("layout", DEFAULT_LAYOUT).to_lowercase();
        let layout = if LAYOUTS.contains(&requested.as_str()) {
            requested.as_str()
        } else {
            ctx.warn(format!(
                "invalid layout '{requested}', using '{DEFAULT_LAYOUT}'"
            ));
            DEFAULT_LAYOUT
        };

        let image_src = attrs.get_or("image_src", "");
        let image_alt = attrs.get_or("image_alt", "");
        if !image_src.is_empty() && image_alt.is_empty() {
            ctx.warn("image_src is set but image_alt is missing; alt text is needed for accessibility");
        }

        let align = attrs.get_or("content_align_vertical", "center").to_lowercase();
        let align_class = match align.as_str() {
            "top" => "sb-items-start",
            "center" => "sb-items-center",
            "bottom" => "sb-items-end",
            other => {
                ctx.warn(format!(
                    "invalid content_align_vertical '{other}', using 'center'"
                ));
                "sb-items-center"
            }
        };

        let image = if image_src.is_empty() || layout == "text_only_centered" {
            String::new()
        } else {
            let class = if layout == "text_center_image_background" {
                "sb-hero-background"
            } else {
                "sb-hero-image"
            };
            format!(
                "<div class=\"{class}\"><img{}{}></div>",
                attr("src", image_src),
                attr("alt", image_alt)
            )
        };

        let text = if layout == "image_only_full" {
            String::new()
        } else {
            let text_class = classes([
                "sb-hero-content",
                format!("sb-text-{}", attrs.get_or("text_color", "white")).as_str(),
                format!("sb-bg-{}", attrs.get_or("text_bg_color", "black-25")).as_str(),
            ]);
            wrap(
                &format!("<div{}>", attr("class", &text_class)),
                &render_content(content),
                "</div>",
            )
        };

        let body = match layout {
            "text_left_image_right" | "text_only_centered" | "image_only_full" => {
                lines([text.as_str(), image.as_str()])
            }
            _ => lines([image.as_str(), text.as_str()]),
        };

        let layout_class = format!("sb-hero-layout--{}", layout.replace('_', "-"));
        let bg_class = attrs
            .get("bg_color")
            .filter(|c| !c.is_empty())
            .map(|c| format!("sb-bg-{c}"))
            .unwrap_or_default();
        let class = classes([
            "sb-hero",
            layout_class.as_str(),
            align_class,
            bg_class.as_str(),
            attrs.get_or("class", ""),
        ]);
        let min_height = attrs.get_or("min_height", "auto");
        let style = if min_height == "auto" {
            String::new()
        } else {
            attr("style", &format!("min-height: {min_height}"))
        };

        Ok(wrap(
            &format!("<section{}{style}>", attr("class", &class)),
            &body,
            "</section>",
        ))
    }
}
