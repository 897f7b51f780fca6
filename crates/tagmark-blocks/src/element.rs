//! Plain HTML element blocks (`div`, `section`, `hr`, ...).

use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};

use crate::html::{attr, render_content, wrap};

/// Container elements registered as blocks.
pub const CONTAINER_TAGS: [&str; 8] = [
    "div", "section", "article", "aside", "header", "footer", "nav", "main",
];

/// Void elements registered as blocks.
pub const VOID_TAGS: [&str; 2] = ["hr", "br"];

/// Renders a plain HTML element named after the block.
///
/// Every attribute is passed through escaped; a bare flag such as `hidden`
/// renders as a bare attribute. Void elements ignore their content.
///
/// ```text
/// {~ section .intro #start ~}
/// Welcome
/// {~~}
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement {
    tag: &'static str,
    void: bool,
}

impl HtmlElement {
    /// Element with content.
    #[must_use]
    pub const fn container(tag: &'static str) -> Self {
        Self { tag, void: false }
    }

    /// Element without a closing tag.
    #[must_use]
    pub const fn void(tag: &'static str) -> Self {
        Self { tag, void: true }
    }

    /// All container and void elements.
    pub fn all() -> impl Iterator<Item = Self> {
        CONTAINER_TAGS
            .into_iter()
            .map(Self::container)
            .chain(VOID_TAGS.into_iter().map(Self::void))
    }

    fn attributes(attrs: &Attributes) -> String {
        attrs
            .iter()
            .map(|(key, value)| {
                if key == value {
                    format!(" {key}")
                } else {
                    attr(key, value)
                }
            })
            .collect()
    }
}

impl BlockRenderer for HtmlElement {
    fn name(&self) -> &str {
        self.tag
    }

    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        ctx: &mut RenderContext,
    ) -> Result<String, RenderError> {
        let tag = self.tag;
        let attributes = Self::attributes(attrs);

        if self.void {
            if content.is_some_and(|c| !c.trim().is_empty()) {
                ctx.warn(format!("<{tag}> cannot have content, ignoring it"));
            }
            return Ok(format!("<{tag}{attributes}>"));
        }

        Ok(wrap(
            &format!("<{tag}{attributes}>"),
            &render_content(content),
            &format!("</{tag}>"),
        ))
    }
}
