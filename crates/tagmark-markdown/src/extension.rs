//! Conversion extensions.

use std::fmt;
use std::str::FromStr;

/// A feature of the markdown conversion stage.
///
/// Extensions are applied in a fixed pipeline order regardless of the order
/// they are listed in; the list only decides which ones are active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Insert a blank line before a list that directly follows a paragraph.
    ListFixer,
    /// Fenced code blocks. Always recognised; listed for configuration parity.
    FencedCode,
    /// GFM pipe tables.
    Tables,
    /// Single newlines become `<br />`, except before a list marker.
    LineBreaks,
    /// `[^1]` footnote references and definitions.
    Footnotes,
    /// `{#id .class}` heading attributes.
    AttrList,
    /// Heading ids and table of contents collection.
    Toc,
}

impl Extension {
    /// Every extension, in pipeline order.
    pub const ALL: [Self; 7] = [
        Self::ListFixer,
        Self::FencedCode,
        Self::Tables,
        Self::LineBreaks,
        Self::Footnotes,
        Self::AttrList,
        Self::Toc,
    ];

    /// Configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListFixer => "list_fixer",
            Self::FencedCode => "fenced_code",
            Self::Tables => "tables",
            Self::LineBreaks => "line_breaks",
            Self::Footnotes => "footnotes",
            Self::AttrList => "attr_list",
            Self::Toc => "toc",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown extension name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown markdown extension '{0}'")]
pub struct UnknownExtension(pub String);

impl FromStr for Extension {
    type Err = UnknownExtension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "list_fixer" => Ok(Self::ListFixer),
            "fenced_code" => Ok(Self::FencedCode),
            "tables" => Ok(Self::Tables),
            "line_breaks" | "nl2br" => Ok(Self::LineBreaks),
            "footnotes" => Ok(Self::Footnotes),
            "attr_list" => Ok(Self::AttrList),
            "toc" => Ok(Self::Toc),
            other => Err(UnknownExtension(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_round_trip() {
        for ext in Extension::ALL {
            assert_eq!(ext.to_string().parse::<Extension>(), Ok(ext));
        }
    }

    #[test]
    fn test_alias() {
        assert_eq!("nl2br".parse::<Extension>(), Ok(Extension::LineBreaks));
        assert_eq!(" toc ".parse::<Extension>(), Ok(Extension::Toc));
    }

    #[test]
    fn test_unknown() {
        let err = "smarty".parse::<Extension>().unwrap_err();
        assert_eq!(err, UnknownExtension("smarty".to_owned()));
        assert_eq!(err.to_string(), "unknown markdown extension 'smarty'");
    }
}
