//! Text helpers shared by the engine.

/// Remove the whitespace prefix common to all non-blank lines.
///
/// Whitespace-only lines are reduced to their line ending and do not take
/// part in computing the margin. Tabs and spaces are compared literally.
pub(crate) fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .reduce(common_prefix)
        .unwrap_or_default();

    text.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                &line[line.trim_end_matches(['\r', '\n']).len()..]
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect()
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, c), _)| i + c.len_utf8());
    &a[..len]
}

/// Make `text` safe to embed in an HTML comment.
pub(crate) fn comment_safe(text: &str) -> String {
    text.replace("--", "- -")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dedent_common_margin() {
        let html = "    <div>\n      <p>x</p>\n    </div>";
        assert_eq!(dedent(html), "<div>\n  <p>x</p>\n</div>");
    }

    #[test]
    fn test_dedent_ignores_blank_lines() {
        let html = "  <a>\n\n     \n  </a>\n";
        assert_eq!(dedent(html), "<a>\n\n\n</a>\n");
    }

    #[test]
    fn test_dedent_keeps_relative_indent() {
        let html = "  <ul>\n\n        <li>x</li>\n  </ul>";
        assert_eq!(dedent(html), "<ul>\n\n      <li>x</li>\n</ul>");
    }

    #[test]
    fn test_dedent_no_margin() {
        let html = "<div>\n  <p>x</p>\n</div>";
        assert_eq!(dedent(html), html);
    }

    #[test]
    fn test_dedent_mixed_tabs_and_spaces() {
        assert_eq!(dedent("\t a\n\t b"), "a\nb");
        assert_eq!(dedent("\ta\n  b"), "\ta\n  b");
    }

    #[test]
    fn test_dedent_crlf() {
        assert_eq!(dedent("  a\r\n  \r\n  b"), "a\r\n\r\nb");
    }

    #[test]
    fn test_dedent_empty() {
        assert_eq!(dedent(""), "");
        assert_eq!(dedent("   "), "");
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix("    ", "  \t"), "  ");
        assert_eq!(common_prefix("", "  "), "");
        assert_eq!(common_prefix("\u{3000} ", "\u{3000}"), "\u{3000}");
    }

    #[test]
    fn test_comment_safe() {
        assert_eq!(comment_safe("a -- b --> c"), "a - - b - -> c");
    }
}
