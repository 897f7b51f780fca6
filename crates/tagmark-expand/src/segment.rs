//! Code fence segmentation.
//!
//! Splits a document into alternating code and prose runs so block tags are
//! never expanded inside fenced code.

/// A contiguous run of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Segment text, including line endings.
    pub text: &'a str,
    /// Whether the run lies inside a fenced code block (fence lines included).
    pub is_code: bool,
}

/// Tracks fence state during line-by-line scanning.
///
/// Any line whose trimmed content starts with three backticks toggles the
/// state. Tilde fences and fence lengths are not considered.
#[derive(Debug, Default)]
struct FenceTracker {
    in_fence: bool,
}

impl FenceTracker {
    /// Update state for a line. Returns `true` if the line is a fence marker.
    fn update(&mut self, line: &str) -> bool {
        if is_fence_line(line) {
            self.in_fence = !self.in_fence;
            return true;
        }
        false
    }
}

/// Check whether a line opens or closes a fenced code block.
fn is_fence_line(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Split a document into code and non-code segments.
///
/// An opening fence line starts a code segment and the matching closing fence
/// line ends it. An unterminated fence leaves the remainder as code. Empty
/// segments are never produced and boundaries always fall on line starts, so
/// concatenating the texts yields the input unchanged.
///
/// # Example
///
/// ```
/// use tagmark_expand::segment;
///
/// let doc = "Intro\n```\n{~ alert /~}\n```\nOutro\n";
/// let segments = segment(doc);
///
/// assert_eq!(segments.len(), 3);
/// assert!(!segments[0].is_code);
/// assert!(segments[1].is_code);
/// assert_eq!(segments[1].text, "```\n{~ alert /~}\n```\n");
/// assert_eq!(segments.iter().map(|s| s.text).collect::<String>(), doc);
/// ```
pub fn segment(document: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut fence = FenceTracker::default();
    let mut start = 0;
    let mut offset = 0;

    for line in document.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let was_code = fence.in_fence;
        if !fence.update(line) {
            continue;
        }

        if was_code {
            // Closing fence belongs to the code run it closes
            push_segment(&mut segments, &document[start..offset], true);
            start = offset;
        } else {
            push_segment(&mut segments, &document[start..line_start], false);
            start = line_start;
        }
    }

    push_segment(&mut segments, &document[start..], fence.in_fence);
    segments
}

fn push_segment<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, is_code: bool) {
    if !text.is_empty() {
        segments.push(Segment { text, is_code });
    }
}
