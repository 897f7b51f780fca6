//! Blank-line insertion before lists.
//!
//! CommonMark only lets a list interrupt a paragraph in some cases (an
//! ordered list must start at 1). Authors routinely write
//!
//! ```text
//! Steps:
//! 2. Second
//! 3. Third
//! ```
//!
//! so a blank line is inserted before the first item.

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*+]|\d+\.)\s").unwrap());

/// Check whether a line starts with a list marker.
pub(crate) fn is_list_item(line: &str) -> bool {
    LIST_MARKER.is_match(line)
}

/// Insert a blank line before every list item that directly follows a
/// non-blank, non-list line.
///
/// Lines inside fenced code, raw `<pre>` blocks and raw HTML blocks are left
/// alone. A raw HTML block starts with a line opening with `<` after a blank
/// line and runs until the next blank line.
pub fn fix_lists(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut in_fence = false;
    let mut pre_depth = 0usize;
    let mut in_html = false;
    let mut prev_is_text = false;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            prev_is_text = false;
            out.push_str(line);
            continue;
        }
        if in_fence {
            out.push_str(line);
            continue;
        }

        if trimmed.is_empty() {
            in_html = false;
        } else if !prev_is_text && pre_depth == 0 && trimmed.starts_with('<') {
            // <pre> ends at its closing tag, not at a blank line
            in_html = !trimmed.starts_with("<pre");
        }

        let item = is_list_item(line);
        if item && prev_is_text && pre_depth == 0 && !in_html {
            out.push('\n');
        }
        out.push_str(line);

        pre_depth = (pre_depth + line.matches("<pre").count())
            .saturating_sub(line.matches("</pre>").count());
        prev_is_text = !trimmed.is_empty() && !item;
    }

    out
}
