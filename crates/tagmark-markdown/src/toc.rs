//! Heading ids and table of contents.

use std::collections::HashSet;

use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Issues unique heading ids within one document.
#[derive(Debug, Default)]
struct HeadingIds {
    used: HashSet<String>,
}

impl HeadingIds {
    /// Reserve an id the author set explicitly.
    fn reserve(&mut self, id: &str) {
        self.used.insert(id.to_owned());
    }

    /// Return `base`, or `base_1`, `base_2`, ... if already taken.
    fn unique(&mut self, base: &str) -> String {
        let mut id = base.to_owned();
        let mut n = 0;
        while id.is_empty() || self.used.contains(&id) {
            n += 1;
            id = format!("{base}_{n}");
        }
        self.used.insert(id.clone());
        id
    }
}

/// Assign an id to every heading without one and collect TOC entries.
pub(crate) fn assign_heading_ids(events: &mut [Event<'_>]) -> Vec<TocEntry> {
    let mut ids = HeadingIds::default();
    let mut toc = Vec::new();
    let mut open: Option<(usize, u8)> = None;
    let mut title = String::new();

    for i in 0..events.len() {
        match &events[i] {
            Event::Start(Tag::Heading { level, .. }) => {
                open = Some((i, *level as u8));
                title.clear();
            }
            Event::Text(text) | Event::Code(text) if open.is_some() => title.push_str(text),
            Event::End(TagEnd::Heading(_)) => {
                let Some((start, level)) = open.take() else {
                    continue;
                };
                let Event::Start(Tag::Heading { id, .. }) = &mut events[start] else {
                    continue;
                };
                let assigned = match id {
                    Some(explicit) => {
                        ids.reserve(explicit);
                        explicit.to_string()
                    }
                    None => {
                        let fresh = ids.unique(&slugify(&title));
                        *id = Some(CowStr::from(fresh.clone()));
                        fresh
                    }
                };
                toc.push(TocEntry {
                    level,
                    title: title.trim().to_owned(),
                    id: assigned,
                });
            }
            _ => {}
        }
    }

    toc
}

/// Convert heading text to an anchor id.
///
/// Lowercases, keeps letters, digits and underscores, collapses runs of
/// whitespace and hyphens into a single `-`, and drops everything else.
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut pending_dash = false;

    for c in text.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            pending_dash = false;
            result.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pulldown_cmark::{Options, Parser};

    fn collect(markdown: &str) -> Vec<TocEntry> {
        let mut events: Vec<_> =
            Parser::new_ext(markdown, Options::ENABLE_HEADING_ATTRIBUTES).collect();
        assign_heading_ids(&mut events)
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("snake_case"), "snake_case");
        assert_eq!(slugify("Ünïcode Straße"), "ünïcode-straße");
        assert_eq!(slugify("?!"), "");
    }

    #[test]
    fn test_unique_ids() {
        let mut ids = HeadingIds::default();
        assert_eq!(ids.unique("intro"), "intro");
        assert_eq!(ids.unique("intro"), "intro_1");
        assert_eq!(ids.unique("intro"), "intro_2");
        assert_eq!(ids.unique(""), "_1");
    }

    #[test]
    fn test_collects_entries() {
        let toc = collect("# Guide\n\n## Install `tagmark`\n\n### Guide\n");
        assert_eq!(
            toc,
            vec![
                TocEntry {
                    level: 1,
                    title: "Guide".to_owned(),
                    id: "guide".to_owned()
                },
                TocEntry {
                    level: 2,
                    title: "Install tagmark".to_owned(),
                    id: "install-tagmark".to_owned()
                },
                TocEntry {
                    level: 3,
                    title: "Guide".to_owned(),
                    id: "guide_1".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_explicit_id_reserved() {
        let toc = collect("# Setup {#setup}\n\n## Setup\n");
        let ids: Vec<_> = toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup_1"]);
    }
}
