//! Block tag expansion for tagmark documents.
//!
//! Tagmark extends markdown with block tags:
//!
//! - Content-wrapping: `{~ alert type="warning" ~}Careful{~~}`
//! - Self-closing: `{~ progress value=40 /~}`
//!
//! The [`ExpansionEngine`] replaces every tag with the HTML fragment produced
//! by the matching [`BlockRenderer`], leaving fenced code untouched. The result
//! is still markdown; run it through a markdown converter to get HTML.
//!
//! # Architecture
//!
//! - [`segment`]: splits a document into code and prose runs
//! - [`locate`]: finds tag occurrences in a prose run
//! - [`Attributes`]: parses a tag's attribute list
//! - [`RegistryBuilder`] / [`Registry`]: name to renderer dispatch
//! - [`DiagnosticsSink`]: per-tag outcome reporting
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tagmark_expand::{
//!     Attributes, BlockRenderer, CollectingSink, DiagnosticEvent, ExpandOptions,
//!     ExpansionEngine, RegistryBuilder, RenderContext, RenderError,
//! };
//!
//! struct Note;
//!
//! impl BlockRenderer for Note {
//!     fn name(&self) -> &str { "note" }
//!
//!     fn render(&self, attrs: &Attributes, content: Option<&str>, _: &mut RenderContext) -> Result<String, RenderError> {
//!         let kind = attrs.get_or("kind", "info");
//!         Ok(format!("<aside class=\"{kind}\">{}</aside>", content.unwrap_or_default().trim()))
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! builder.register_renderer(Arc::new(Note)).unwrap();
//!
//! let sink = Arc::new(CollectingSink::new());
//! let engine = ExpansionEngine::new(Arc::new(builder.freeze())).with_sink(sink.clone());
//!
//! let doc = "{~ note kind=tip ~}Hi{~~}\n\n```\n{~ note ~}code{~~}\n```\n{~ missing /~}";
//! let out = engine.expand(doc, &ExpandOptions::default()).unwrap();
//!
//! assert!(out.starts_with("\n\n<aside class=\"tip\">Hi</aside>\n\n"));
//! assert!(out.contains("```\n{~ note ~}code{~~}\n```\n"));
//! assert_eq!(
//!     sink.events(),
//!     vec![
//!         DiagnosticEvent::Rendered { name: "note".to_owned() },
//!         DiagnosticEvent::Missing { name: "missing".to_owned() },
//!     ]
//! );
//! ```

mod attrs;
mod diagnostics;
mod engine;
mod locate;
mod registry;
mod renderer;
mod segment;
mod util;

pub use attrs::Attributes;
pub use diagnostics::{
    CollectingSink, DiagnosticEvent, DiagnosticsSink, NullSink, TagUsage, TracingSink,
    UsageReport,
};
pub use engine::{ExpandError, ExpandOptions, ExpansionEngine};
pub use locate::{TagOccurrence, locate, locate_self_closing, locate_wrapping};
pub use registry::{BlockDescriptor, Registry, RegistryBuilder, RegistrationError};
pub use renderer::{BlockRenderer, RenderContext, RenderError};
pub use segment::{Segment, segment};
