//! Expansion engine.
//!
//! Replaces every block tag in a document with the fragment produced by its
//! renderer, leaving fenced code untouched. The output is still markdown and
//! is meant to be handed to a markdown converter.

use std::sync::Arc;

use crate::locate::{TagOccurrence, locate_self_closing, locate_wrapping};
use crate::util::{comment_safe, dedent};
use crate::{
    Attributes, DiagnosticsSink, Registry, RenderContext, RenderError, TracingSink, segment,
};

/// Options controlling failure handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Abort the document on the first unknown tag, missing required
    /// attribute, or renderer failure.
    pub fail_on_error: bool,
    /// Replace failed tags with an HTML comment describing the problem
    /// instead of removing them.
    pub error_comments: bool,
}

/// Error returned by [`ExpansionEngine::expand`] when `fail_on_error` is set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("block '{name}' is not registered")]
    UnknownTag { name: String },
    #[error("failed to render block '{name}'")]
    Render {
        name: String,
        #[source]
        source: RenderError,
    },
}

/// Block tag expansion engine.
///
/// Holds a frozen [`Registry`] and a [`DiagnosticsSink`]. Both are shared, so
/// one engine can expand many documents concurrently.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tagmark_expand::{
///     Attributes, BlockRenderer, ExpandOptions, ExpansionEngine, RegistryBuilder,
///     RenderContext, RenderError,
/// };
///
/// struct Shout;
///
/// impl BlockRenderer for Shout {
///     fn name(&self) -> &str { "shout" }
///
///     fn render(&self, _: &Attributes, content: Option<&str>, _: &mut RenderContext) -> Result<String, RenderError> {
///         Ok(format!("<strong>{}</strong>", content.unwrap_or_default().trim().to_uppercase()))
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// builder.register_renderer(Arc::new(Shout)).unwrap();
/// let engine = ExpansionEngine::new(Arc::new(builder.freeze()));
///
/// let out = engine.expand("Say {~ shout ~}hi{~~} now", &ExpandOptions::default()).unwrap();
/// assert_eq!(out, "Say \n\n<strong>HI</strong>\n\n now");
/// ```
pub struct ExpansionEngine {
    registry: Arc<Registry>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl ExpansionEngine {
    /// Create an engine that reports diagnostics through `tracing`.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            sink: Arc::new(TracingSink),
        }
    }

    /// Use a different diagnostics sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Expand every block tag outside fenced code.
    ///
    /// Self-closing tags are expanded first across each prose segment, then
    /// content-wrapping tags over the partly expanded text. Each rendered
    /// fragment is surrounded by blank lines so the markdown converter treats
    /// it as a standalone HTML block; a fragment that is empty after trimming
    /// leaves nothing behind.
    ///
    /// Without `fail_on_error` this never fails.
    pub fn expand(&self, document: &str, options: &ExpandOptions) -> Result<String, ExpandError> {
        let mut output = String::with_capacity(document.len());

        for seg in segment(document) {
            if seg.is_code {
                output.push_str(seg.text);
                continue;
            }
            let text = self.substitute(seg.text, &locate_self_closing(seg.text), options)?;
            let text = self.substitute(&text, &locate_wrapping(&text), options)?;
            output.push_str(&text);
        }

        Ok(output)
    }

    fn substitute(
        &self,
        text: &str,
        tags: &[TagOccurrence<'_>],
        options: &ExpandOptions,
    ) -> Result<String, ExpandError> {
        if tags.is_empty() {
            return Ok(text.to_owned());
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for tag in tags {
            out.push_str(&text[last..tag.span.start]);
            out.push_str(&self.expand_tag(tag, options)?);
            last = tag.span.end;
        }
        out.push_str(&text[last..]);
        Ok(out)
    }

    fn expand_tag(
        &self,
        tag: &TagOccurrence<'_>,
        options: &ExpandOptions,
    ) -> Result<String, ExpandError> {
        let name = tag.name;
        tracing::debug!(name, self_closing = tag.self_closing, "Expanding block");

        let Some(descriptor) = self.registry.lookup(name) else {
            self.sink.on_tag_missing(name);
            if options.fail_on_error {
                return Err(ExpandError::UnknownTag {
                    name: name.to_owned(),
                });
            }
            return Ok(placeholder(options, &format!("Block '{name}' not found")));
        };

        let attrs = Attributes::parse(tag.raw_attributes);
        let missing = descriptor.missing_required(&attrs);
        if let Some(first) = missing.first() {
            if options.fail_on_error {
                return Err(ExpandError::Render {
                    name: name.to_owned(),
                    source: RenderError::MissingAttribute((*first).to_owned()),
                });
            }
            for key in &missing {
                self.sink
                    .on_render_warning(name, &format!("missing required attribute '{key}'"));
            }
        }

        let mut ctx = RenderContext::new();
        let result = descriptor.renderer.render(&attrs, tag.raw_content, &mut ctx);
        for warning in ctx.take_warnings() {
            self.sink.on_render_warning(name, &warning);
        }

        match result {
            Ok(html) => {
                self.sink.on_tag_rendered(name);
                let html = dedent(&html);
                let fragment = html.trim();
                if fragment.is_empty() {
                    Ok(String::new())
                } else {
                    Ok(format!("\n\n{fragment}\n\n"))
                }
            }
            Err(e) => {
                self.sink.on_render_error(name, &e.to_string());
                if options.fail_on_error {
                    return Err(ExpandError::Render {
                        name: name.to_owned(),
                        source: e,
                    });
                }
                Ok(placeholder(
                    options,
                    &format!("Error rendering block '{name}': {e}"),
                ))
            }
        }
    }
}

fn placeholder(options: &ExpandOptions, message: &str) -> String {
    if options.error_comments {
        format!("\n\n<!-- {} -->\n\n", comment_safe(message))
    } else {
        String::new()
    }
}
