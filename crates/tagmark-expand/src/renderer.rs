//! Renderer capability.
//!
//! A renderer turns one block tag (its attributes plus optional content) into
//! an HTML fragment. Renderers are stateless and shared across threads.

use crate::Attributes;

/// Fatal renderer failure.
///
/// Recoverable problems (an out-of-range value that has a sensible default)
/// are reported through [`RenderContext::warn`] instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A required attribute was not supplied.
    #[error("missing required attribute '{0}'")]
    MissingAttribute(String),
    /// The renderer could not produce output.
    #[error("{0}")]
    Failed(String),
}

/// Per-tag state handed to a renderer.
///
/// Collects non-fatal warnings which the engine forwards to the diagnostics
/// sink after the renderer returns.
#[derive(Debug, Default)]
pub struct RenderContext {
    warnings: Vec<String>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a non-fatal problem with the tag being rendered.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Drain recorded warnings.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}

/// Trait for block tag renderers.
///
/// Implement this to add a new block tag. The renderer is registered under
/// [`name`](Self::name) and invoked for every `{~ name ... ~}` occurrence.
///
/// Invalid attribute values should fall back to a documented default and call
/// [`RenderContext::warn`]. Return [`RenderError`] only when no sensible
/// output exists.
///
/// The returned fragment is dedented by its common margin, so nested HTML may
/// be indented. It should not contain blank lines: markdown ends a raw HTML
/// block at a blank line, and a following line indented four or more spaces
/// past the margin is then read as an indented code block.
///
/// # Example
///
/// ```
/// use tagmark_expand::{Attributes, BlockRenderer, RenderContext, RenderError};
///
/// struct Badge;
///
/// impl BlockRenderer for Badge {
///     fn name(&self) -> &str {
///         "badge"
///     }
///
///     fn required_attributes(&self) -> &[&str] {
///         &["label"]
///     }
///
///     fn render(
///         &self,
///         attrs: &Attributes,
///         _content: Option<&str>,
///         _ctx: &mut RenderContext,
///     ) -> Result<String, RenderError> {
///         let label = attrs
///             .get("label")
///             .ok_or_else(|| RenderError::MissingAttribute("label".to_owned()))?;
///         Ok(format!("<span class=\"badge\">{label}</span>"))
///     }
/// }
///
/// let mut ctx = RenderContext::new();
/// let html = Badge
///     .render(&Attributes::parse("label=new"), None, &mut ctx)
///     .unwrap();
/// assert_eq!(html, r#"<span class="badge">new</span>"#);
/// ```
pub trait BlockRenderer: Send + Sync {
    /// Tag name this renderer handles.
    fn name(&self) -> &str;

    /// Attributes that must be present.
    fn required_attributes(&self) -> &[&str] {
        &[]
    }

    /// Attributes the renderer understands beyond the required ones.
    fn optional_attributes(&self) -> &[&str] {
        &[]
    }

    /// Render the tag into an HTML fragment.
    ///
    /// `content` is `None` for self-closing tags and the raw text between the
    /// opening tag and `{~~}` otherwise.
    fn render(
        &self,
        attrs: &Attributes,
        content: Option<&str>,
        ctx: &mut RenderContext,
    ) -> Result<String, RenderError>;
}
