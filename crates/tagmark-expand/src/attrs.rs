//! Block tag attribute parsing.
//!
//! Parses the attribute list of a block tag, e.g. the
//! `type="danger" title='Heads up' level=2 dismissible .wide #top` part of
//! `{~ alert type="danger" title='Heads up' level=2 dismissible .wide #top ~}`.

/// Parsed attributes of a block tag.
///
/// Keys are unique and keep the position of their first occurrence; a key
/// that appears again overwrites the earlier value. Values are always strings,
/// coercion is up to the renderer.
///
/// # Example
///
/// ```
/// use tagmark_expand::Attributes;
///
/// let attrs = Attributes::parse(r#"type="danger" title='Heads up' level=2 dismissible"#);
/// assert_eq!(attrs.get("type"), Some("danger"));
/// assert_eq!(attrs.get("title"), Some("Heads up"));
/// assert_eq!(attrs.get("level"), Some("2"));
/// assert_eq!(attrs.get("dismissible"), Some("dismissible"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw attribute string.
    ///
    /// Recognized forms, separated by whitespace:
    ///
    /// - `key="value"` and `key='value'` (value may contain spaces or be empty)
    /// - `key=value` (value runs until whitespace or a quote)
    /// - `key` alone, stored as `key -> key`
    /// - `.class` shortcuts, merged into `class` ahead of an explicit `class="..."`
    /// - `#id` shortcut, used unless an explicit `id="..."` is present
    ///
    /// Parsing never fails. An unterminated quote ends parsing and anything the
    /// grammar doesn't recognize is skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut explicit = Self::new();
        let mut shortcut_classes: Vec<&str> = Vec::new();
        let mut shortcut_id: Option<&str> = None;

        let mut remaining = raw.trim();

        while !remaining.is_empty() {
            if let Some(rest) = remaining.strip_prefix('.') {
                // Class shortcut: .wide
                let end = rest.find(|c: char| !is_class_char(c)).unwrap_or(rest.len());
                if end > 0 {
                    shortcut_classes.push(&rest[..end]);
                }
                remaining = &rest[end..];
            } else if let Some(rest) = remaining.strip_prefix('#') {
                // ID shortcut: #top (first one wins)
                let end = rest.find(|c: char| !is_id_char(c)).unwrap_or(rest.len());
                if end > 0 && shortcut_id.is_none() {
                    shortcut_id = Some(&rest[..end]);
                }
                remaining = &rest[end..];
            } else if remaining.starts_with(is_key_char) {
                let key_end = remaining
                    .find(|c: char| !is_key_char(c))
                    .unwrap_or(remaining.len());
                let key = &remaining[..key_end];
                let after_key = &remaining[key_end..];

                if let Some(after_eq) = after_key.strip_prefix('=') {
                    match parse_value(after_eq) {
                        ParsedValue::Value(value, rest) => {
                            explicit.insert(key, value);
                            remaining = rest;
                        }
                        ParsedValue::Empty(rest) => remaining = rest,
                        ParsedValue::Unterminated => break,
                    }
                } else {
                    // Flag: the key doubles as its value
                    explicit.insert(key, key);
                    remaining = after_key;
                }
            } else {
                // Skip unrecognized character
                let skip = remaining.chars().next().map_or(1, char::len_utf8);
                remaining = &remaining[skip..];
            }

            remaining = remaining.trim_start();
        }

        merge_shortcuts(explicit, &shortcut_classes, shortcut_id)
    }

    /// Insert or overwrite a value. An overwritten key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get an attribute value, falling back to `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Check whether a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Interpret an attribute as a boolean switch.
    ///
    /// A bare flag (`open`) and the strings `true`, `1`, `t`, `y`, `yes`, `on`
    /// (any case) are `true`. Any other present value is `false`. An absent key
    /// yields `default`.
    #[must_use]
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(value) if value == key => true,
            Some(value) => is_truthy(value),
        }
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

enum ParsedValue<'a> {
    /// Value and the unparsed remainder.
    Value(&'a str, &'a str),
    /// `key=` with nothing usable after it.
    Empty(&'a str),
    /// Opening quote without a closing one.
    Unterminated,
}

/// Parse the value following `key=`.
fn parse_value(s: &str) -> ParsedValue<'_> {
    for quote in ['"', '\''] {
        if let Some(stripped) = s.strip_prefix(quote) {
            return match stripped.find(quote) {
                Some(end) => ParsedValue::Value(&stripped[..end], &stripped[end + 1..]),
                None => ParsedValue::Unterminated,
            };
        }
    }

    let end = s
        .find(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '`'))
        .unwrap_or(s.len());
    if end == 0 {
        ParsedValue::Empty(s)
    } else {
        ParsedValue::Value(&s[..end], &s[end..])
    }
}

/// Fold `.class` and `#id` shortcuts into the explicit attributes.
///
/// Resulting order: `id`, `class`, then every other key as written.
fn merge_shortcuts(explicit: Attributes, classes: &[&str], id: Option<&str>) -> Attributes {
    if classes.is_empty() && id.is_none() {
        return explicit;
    }

    let mut merged = Attributes::new();

    if let Some(id) = explicit.get("id").or(id) {
        merged.insert("id", id);
    }

    let mut all_classes: Vec<&str> = classes.to_vec();
    if let Some(class) = explicit.get("class") {
        all_classes.extend(class.split_whitespace());
    }
    let mut unique: Vec<&str> = Vec::with_capacity(all_classes.len());
    for class in all_classes {
        if !unique.contains(&class) {
            unique.push(class);
        }
    }
    if !unique.is_empty() {
        merged.insert("class", unique.join(" "));
    }

    for (key, value) in explicit.iter() {
        if key != "id" && key != "class" {
            merged.insert(key, value);
        }
    }

    merged
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "t" | "y" | "yes" | "on"
    )
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '@')
}

fn is_class_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':')
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-')
}
