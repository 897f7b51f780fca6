//! Markdown to HTML conversion.

use std::borrow::Cow;

use pulldown_cmark::{Event, Options, Parser, html};

use crate::line_breaks::hard_breaks;
use crate::list_fixer::fix_lists;
use crate::toc::assign_heading_ids;
use crate::{Extension, TocEntry};

/// Result of [`MarkdownConverter::convert_with_toc`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Converted {
    /// Rendered HTML.
    pub html: String,
    /// Headings in document order. Empty unless [`Extension::Toc`] is active.
    pub toc: Vec<TocEntry>,
}

/// Markdown converter with a configurable extension set.
///
/// # Example
///
/// ```
/// use tagmark_markdown::MarkdownConverter;
///
/// let converted = MarkdownConverter::document().convert_with_toc("# Hello\nworld");
/// assert_eq!(converted.html, "<h1 id=\"hello\">Hello</h1>\n<p>world</p>\n");
/// assert_eq!(converted.toc[0].id, "hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownConverter {
    extensions: Vec<Extension>,
}

impl MarkdownConverter {
    /// Create a converter with the given extensions. Duplicates are ignored.
    pub fn new(extensions: impl IntoIterator<Item = Extension>) -> Self {
        let mut list = Vec::new();
        for ext in extensions {
            if !list.contains(&ext) {
                list.push(ext);
            }
        }
        Self { extensions: list }
    }

    /// Preset for whole documents.
    pub fn document() -> Self {
        Self::new(Extension::ALL)
    }

    /// Preset for block content rendered inside a fragment.
    pub fn fragment() -> Self {
        Self::new([
            Extension::FencedCode,
            Extension::Tables,
            Extension::LineBreaks,
        ])
    }

    /// Active extensions in configuration order.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn has(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }

    /// Parser options implied by the active extensions.
    pub fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.has(Extension::Tables) {
            options |= Options::ENABLE_TABLES;
        }
        if self.has(Extension::Footnotes) {
            options |= Options::ENABLE_FOOTNOTES;
        }
        if self.has(Extension::AttrList) {
            options |= Options::ENABLE_HEADING_ATTRIBUTES;
        }
        options
    }

    /// Convert markdown to HTML.
    pub fn convert(&self, markdown: &str) -> String {
        self.convert_with_toc(markdown).html
    }

    /// Convert markdown to HTML and collect the table of contents.
    pub fn convert_with_toc(&self, markdown: &str) -> Converted {
        let source = if self.has(Extension::ListFixer) {
            Cow::Owned(fix_lists(markdown))
        } else {
            Cow::Borrowed(markdown)
        };

        let mut events: Vec<Event<'_>> = Parser::new_ext(&source, self.parser_options()).collect();
        if self.has(Extension::LineBreaks) {
            events = hard_breaks(events);
        }
        let toc = if self.has(Extension::Toc) {
            assign_heading_ids(&mut events)
        } else {
            Vec::new()
        };

        let mut output = String::with_capacity(source.len() + source.len() / 2);
        html::push_html(&mut output, events.into_iter());
        Converted { html: output, toc }
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicates_ignored() {
        let converter =
            MarkdownConverter::new([Extension::Toc, Extension::Tables, Extension::Toc]);
        assert_eq!(converter.extensions(), &[Extension::Toc, Extension::Tables]);
    }

    #[test]
    fn test_fragment_preset() {
        let converter = MarkdownConverter::fragment();
        assert!(converter.has(Extension::Tables));
        assert!(!converter.has(Extension::Toc));
        assert_eq!(converter.convert("# Title"), "<h1>Title</h1>\n");
    }

    #[test]
    fn test_tables() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert!(MarkdownConverter::document().convert(markdown).contains("<table>"));
        assert!(!MarkdownConverter::new([]).convert(markdown).contains("<table>"));
    }

    #[test]
    fn test_fenced_code_always_on() {
        let html = MarkdownConverter::new([]).convert("```rust\nfn main() {}\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn test_line_breaks() {
        let html = MarkdownConverter::new([Extension::LineBreaks]).convert("a\nb");
        assert_eq!(html, "<p>a<br />\nb</p>\n");
        assert_eq!(MarkdownConverter::new([]).convert("a\nb"), "<p>a\nb</p>\n");
    }

    #[test]
    fn test_list_fixer_enables_ordered_list_after_paragraph() {
        let markdown = "Steps:\n2. two\n3. three\n";
        let fixed = MarkdownConverter::document().convert(markdown);
        assert!(fixed.contains("<ol start=\"2\">"));

        let plain = MarkdownConverter::fragment().convert(markdown);
        assert!(!plain.contains("<ol"));
    }

    #[test]
    fn test_list_fixer_ignores_code() {
        let html = MarkdownConverter::document().convert("```\nx\n- y\n```\n");
        assert_eq!(html, "<pre><code>x\n- y\n</code></pre>\n");
    }

    #[test]
    fn test_footnotes() {
        let markdown = "Text[^1]\n\n[^1]: The note.\n";
        let html = MarkdownConverter::document().convert(markdown);
        assert!(html.contains("footnote-definition"));
    }

    #[test]
    fn test_heading_attributes() {
        let converted = MarkdownConverter::document().convert_with_toc("## Setup {#install}\n");
        assert_eq!(converted.html, "<h2 id=\"install\">Setup</h2>\n");
        assert_eq!(
            converted.toc,
            vec![TocEntry {
                level: 2,
                title: "Setup".to_owned(),
                id: "install".to_owned()
            }]
        );
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let converted = MarkdownConverter::document().convert_with_toc("# Notes\n\n# Notes\n");
        assert_eq!(
            converted.html,
            "<h1 id=\"notes\">Notes</h1>\n<h1 id=\"notes_1\">Notes</h1>\n"
        );
    }

    #[test]
    fn test_no_toc_without_extension() {
        let converted = MarkdownConverter::fragment().convert_with_toc("# Notes\n");
        assert!(converted.toc.is_empty());
    }

    #[test]
    fn test_raw_html_block_passes_through() {
        let html = MarkdownConverter::document()
            .convert("Intro\n\n<div class=\"alert\">\n<p>Hi</p>\n</div>\n\nOutro");
        assert_eq!(
            html,
            "<p>Intro</p>\n<div class=\"alert\">\n<p>Hi</p>\n</div>\n<p>Outro</p>\n"
        );
    }
}
