//! HTML building helpers shared by the built-in renderers.

use std::sync::LazyLock;

use html_escape::{encode_double_quoted_attribute, encode_text};
use tagmark_markdown::MarkdownConverter;

static FRAGMENT: LazyLock<MarkdownConverter> = LazyLock::new(MarkdownConverter::fragment);

/// Convert block content to HTML that stays a single raw HTML block.
///
/// Blank lines would end the surrounding HTML block in the outer markdown
/// pass, so inside `<pre>` they become `&#10;` and elsewhere they are
/// dropped.
pub(crate) fn render_content(content: Option<&str>) -> String {
    let Some(markdown) = content.filter(|c| !c.trim().is_empty()) else {
        return String::new();
    };
    seal_blank_lines(FRAGMENT.convert(markdown).trim_end())
}

pub(crate) fn seal_blank_lines(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pre_depth = 0usize;

    for line in html.split_inclusive('\n') {
        if line.trim().is_empty() {
            if pre_depth > 0 {
                out.push_str("&#10;");
            }
            continue;
        }
        out.push_str(line);
        pre_depth = (pre_depth + line.matches("<pre").count())
            .saturating_sub(line.matches("</pre>").count());
    }

    out
}

/// Escape text content.
pub(crate) fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

/// Render ` name="value"` with the value escaped.
pub(crate) fn attr(name: &str, value: &str) -> String {
    format!(" {name}=\"{}\"", encode_double_quoted_attribute(value))
}

/// Join non-empty class names into a `class` value.
pub(crate) fn classes<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for name in names.into_iter().map(str::trim).filter(|n| !n.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
    }
    out
}

/// Wrap `body` between an opening and closing tag, one per line.
///
/// An empty body yields `open` and `close` on a single line so no blank line
/// ends up inside the fragment.
pub(crate) fn wrap(open: &str, body: &str, close: &str) -> String {
    if body.is_empty() {
        format!("{open}{close}")
    } else {
        format!("{open}\n{body}\n{close}")
    }
}

/// Join the non-empty parts, one per line.
pub(crate) fn lines<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let parts: Vec<_> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_content_paragraphs() {
        let html = render_content(Some("First\n\nSecond"));
        assert_eq!(html, "<p>First</p>\n<p>Second</p>");
    }

    #[test]
    fn test_render_content_empty() {
        assert_eq!(render_content(None), "");
        assert_eq!(render_content(Some("  \n ")), "");
    }

    #[test]
    fn test_blank_lines_in_pre_become_entities() {
        let html = render_content(Some("```\na\n\nb\n```"));
        assert_eq!(html, "<pre><code>a\n&#10;b\n</code></pre>");
        assert!(!html.contains("\n\n"));
    }

    #[test]
    fn test_seal_drops_blank_lines_outside_pre() {
        assert_eq!(seal_blank_lines("<p>a</p>\n\n<p>b</p>\n"), "<p>a</p>\n<p>b</p>\n");
    }

    #[test]
    fn test_attr_escapes() {
        assert_eq!(attr("title", "a \"b\" <c>"), " title=\"a &quot;b&quot; &lt;c&gt;\"");
    }

    #[test]
    fn test_text_escapes() {
        assert_eq!(text("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("<div>", "<p>x</p>", "</div>"), "<div>\n<p>x</p>\n</div>");
        assert_eq!(wrap("<div>", "", "</div>"), "<div></div>");
    }

    #[test]
    fn test_lines_skips_empty() {
        assert_eq!(lines(["a", "", "b"]), "a\nb");
    }

    #[test]
    fn test_classes() {
        assert_eq!(classes(["sb-card", "", " wide "]), "sb-card wide");
        assert_eq!(classes([]), "");
    }
}
