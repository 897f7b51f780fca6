//! List-aware newline-to-break conversion.

use pulldown_cmark::Event;

use crate::list_fixer::is_list_item;

/// Turn soft breaks into hard breaks, except a break directly followed by
/// text that starts with a list marker.
pub(crate) fn hard_breaks(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut iter = events.into_iter().peekable();

    while let Some(event) = iter.next() {
        let before_list = matches!(iter.peek(), Some(Event::Text(text)) if is_list_item(text));
        match event {
            Event::SoftBreak if !before_list => out.push(Event::HardBreak),
            other => out.push(other),
        }
    }

    out
}
