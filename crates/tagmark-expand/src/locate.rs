//! Block tag locator.
//!
//! Finds block tags in a non-code run of text:
//!
//! - Self-closing: `{~ name attrs /~}`
//! - Content-wrapping: `{~ name attrs ~} content {~~}`
//!
//! Content runs to the *first* following `{~~}`, so a wrapping tag inside
//! another wrapping tag closes the outer one early. Nested wrapping tags are
//! not supported; self-closing tags inside wrapping content are fine because
//! the engine expands them in an earlier pass.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static SELF_CLOSING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{~\s*(\w+)\s*([^~]*?)\s*/~\}").unwrap());

static WRAPPING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{~\s*(\w+)\s*([^~]*?)(\s*)~\}(.*?)\{~~\}").unwrap());

/// A block tag found in the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagOccurrence<'a> {
    /// Tag name as written.
    pub name: &'a str,
    /// Unparsed attribute text, trimmed.
    pub raw_attributes: &'a str,
    /// Text between the opening tag and `{~~}`; `None` for self-closing tags.
    pub raw_content: Option<&'a str>,
    /// Whether the tag used the `/~}` form.
    pub self_closing: bool,
    /// Byte range of the whole tag in the searched text.
    pub span: Range<usize>,
}

/// Find all self-closing tags in source order.
pub fn locate_self_closing(text: &str) -> Vec<TagOccurrence<'_>> {
    SELF_CLOSING_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(TagOccurrence {
                name: caps.get(1)?.as_str(),
                raw_attributes: caps.get(2).map_or("", |m| m.as_str()),
                raw_content: None,
                self_closing: true,
                span: whole.range(),
            })
        })
        .collect()
}

/// Find all content-wrapping tags in source order.
///
/// An opener written as `{~ name /~}` is a self-closing tag and is never
/// taken as the start of a wrapping tag. An opener with no `{~~}` after it
/// is left as literal text.
pub fn locate_wrapping(text: &str) -> Vec<TagOccurrence<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = WRAPPING_PATTERN.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let raw_attributes = caps.get(2).map_or("", |m| m.as_str());
        let gap = caps.get(3).map_or("", |m| m.as_str());

        if gap.is_empty() && raw_attributes.ends_with('/') {
            // Self-closing tag, resume right after its `{~`
            pos = whole.start() + 2;
            continue;
        }

        found.push(TagOccurrence {
            name: name.as_str(),
            raw_attributes,
            raw_content: Some(caps.get(4).map_or("", |m| m.as_str())),
            self_closing: false,
            span: whole.range(),
        });
        pos = whole.end();
    }

    found
}

/// Find all tags of both shapes, ordered by start offset.
///
/// A wrapping tag may contain self-closing tags in its content; both are
/// reported. Spans never partially overlap.
///
/// # Example
///
/// ```
/// use tagmark_expand::locate;
///
/// let tags = locate("{~ a /~}{~ b ~}x{~~}");
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[0].name, "a");
/// assert_eq!(tags[0].raw_content, None);
/// assert_eq!(tags[1].name, "b");
/// assert_eq!(tags[1].raw_content, Some("x"));
/// ```
pub fn locate(text: &str) -> Vec<TagOccurrence<'_>> {
    let mut tags = locate_self_closing(text);
    tags.extend(locate_wrapping(text));
    tags.sort_by_key(|tag| tag.span.start);
    tags
}
