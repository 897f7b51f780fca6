//! Markdown conversion stage for tagmark documents.
//!
//! Wraps `pulldown-cmark` with an extension set tuned for documents whose
//! block tags have already been expanded into raw HTML blocks:
//!
//! - [`Extension::ListFixer`]: lists may follow a paragraph without a blank line
//! - [`Extension::LineBreaks`]: single newlines are line breaks
//! - [`Extension::Toc`]: headings get unique ids, collected as [`TocEntry`]
//!
//! Use [`MarkdownConverter::document`] for whole documents and
//! [`MarkdownConverter::fragment`] for content inside a block.

mod converter;
mod extension;
mod line_breaks;
mod list_fixer;
mod toc;

pub use converter::{Converted, MarkdownConverter};
pub use extension::{Extension, UnknownExtension};
pub use list_fixer::fix_lists;
pub use toc::{TocEntry, slugify};
