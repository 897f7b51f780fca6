//! Markdown with block tags.
//!
//! Ties the workspace together:
//!
//! - [`tagmark_expand`]: finds `{~ name ~}...{~~}` and `{~ name /~}` tags and
//!   replaces them with rendered HTML
//! - [`tagmark_blocks`]: the built-in renderers
//! - [`tagmark_markdown`]: the final markdown to HTML conversion
//! - [`tagmark_config`]: `tagmark.toml` loading
//!
//! [`Pipeline`] runs expansion and conversion for one or many documents and
//! returns a [`RenderedDocument`] with the HTML, table of contents and
//! content metrics.

mod metrics;
mod pipeline;

pub use metrics::{reading_time_minutes, word_count};
pub use pipeline::{Pipeline, PipelineError, RenderedDocument, default_registry};
pub use tagmark_config::{Config, ConfigError, ConfigOverrides};
pub use tagmark_expand::{
    Attributes, BlockDescriptor, BlockRenderer, CollectingSink, DiagnosticEvent,
    DiagnosticsSink, ExpandError, ExpandOptions, NullSink, Registry, RegistryBuilder,
    RegistrationError, RenderContext, RenderError, TagUsage, TracingSink, UsageReport,
};
pub use tagmark_markdown::{Extension, MarkdownConverter, TocEntry};
pub use tagmark_blocks;
pub use tagmark_config;
pub use tagmark_expand;
pub use tagmark_markdown;
