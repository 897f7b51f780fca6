//! Diagnostics sinks.
//!
//! The engine reports every tag outcome to a [`DiagnosticsSink`]. Sinks are
//! shared by all documents in a batch and must tolerate concurrent calls.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// Receiver of per-tag expansion events.
pub trait DiagnosticsSink: Send + Sync {
    /// A tag was rendered and its fragment inserted.
    fn on_tag_rendered(&self, name: &str);

    /// No renderer is registered for the tag.
    fn on_tag_missing(&self, name: &str);

    /// The renderer failed; the tag was replaced with nothing.
    fn on_render_error(&self, name: &str, reason: &str);

    /// The renderer recovered from a problem, e.g. substituted a default.
    fn on_render_warning(&self, _name: &str, _message: &str) {}
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn on_tag_rendered(&self, _name: &str) {}

    fn on_tag_missing(&self, _name: &str) {}

    fn on_render_error(&self, _name: &str, _reason: &str) {}
}

/// Sink that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn on_tag_rendered(&self, name: &str) {
        tracing::debug!(name, "Rendered block");
    }

    fn on_tag_missing(&self, name: &str) {
        tracing::warn!(name, "No renderer registered for block");
    }

    fn on_render_error(&self, name: &str, reason: &str) {
        tracing::warn!(name, reason, "Failed to render block");
    }

    fn on_render_warning(&self, name: &str, message: &str) {
        tracing::warn!(name, message, "Block rendered with warning");
    }
}

/// A single recorded event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    Rendered { name: String },
    Missing { name: String },
    RenderError { name: String, reason: String },
    Warning { name: String, message: String },
}

/// Sink that records events in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.lock().clone()
    }

    /// Remove and return recorded events.
    pub fn take(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DiagnosticEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: DiagnosticEvent) {
        self.lock().push(event);
    }
}

impl DiagnosticsSink for CollectingSink {
    fn on_tag_rendered(&self, name: &str) {
        self.push(DiagnosticEvent::Rendered {
            name: name.to_owned(),
        });
    }

    fn on_tag_missing(&self, name: &str) {
        self.push(DiagnosticEvent::Missing {
            name: name.to_owned(),
        });
    }

    fn on_render_error(&self, name: &str, reason: &str) {
        self.push(DiagnosticEvent::RenderError {
            name: name.to_owned(),
            reason: reason.to_owned(),
        });
    }

    fn on_render_warning(&self, name: &str, message: &str) {
        self.push(DiagnosticEvent::Warning {
            name: name.to_owned(),
            message: message.to_owned(),
        });
    }
}

/// Outcome counts for one tag name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TagUsage {
    pub rendered: usize,
    pub missing: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl TagUsage {
    fn total(&self) -> usize {
        self.rendered + self.missing + self.failed
    }
}

/// Sink that aggregates per-tag usage statistics across a batch.
///
/// # Example
///
/// ```
/// use tagmark_expand::{DiagnosticsSink, UsageReport};
///
/// let report = UsageReport::new();
/// report.on_tag_rendered("alert");
/// report.on_tag_rendered("alert");
/// report.on_tag_missing("widget");
///
/// assert_eq!(report.usage("alert").rendered, 2);
/// assert_eq!(report.usage("widget").missing, 1);
/// assert_eq!(report.total_tags(), 3);
/// ```
#[derive(Debug, Default)]
pub struct UsageReport {
    tags: Mutex<BTreeMap<String, TagUsage>>,
}

impl UsageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts for one tag name. Unknown names yield zeros.
    pub fn usage(&self, name: &str) -> TagUsage {
        self.lock().get(name).copied().unwrap_or_default()
    }

    /// Counts for every tag seen, ordered by name.
    pub fn snapshot(&self) -> BTreeMap<String, TagUsage> {
        self.lock().clone()
    }

    /// Number of tag occurrences seen, whatever their outcome.
    pub fn total_tags(&self) -> usize {
        self.lock().values().map(TagUsage::total).sum()
    }

    /// Serialize the counts as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&*self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, TagUsage>> {
        self.tags.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, name: &str, update: impl FnOnce(&mut TagUsage)) {
        let mut tags = self.lock();
        update(tags.entry(name.to_owned()).or_default());
    }
}

impl Serialize for UsageReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.lock().serialize(serializer)
    }
}

impl DiagnosticsSink for UsageReport {
    fn on_tag_rendered(&self, name: &str) {
        self.record(name, |u| u.rendered += 1);
    }

    fn on_tag_missing(&self, name: &str) {
        self.record(name, |u| u.missing += 1);
    }

    fn on_render_error(&self, name: &str, _reason: &str) {
        self.record(name, |u| u.failed += 1);
    }

    fn on_render_warning(&self, name: &str, _message: &str) {
        self.record(name, |u| u.warnings += 1);
    }
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = self.lock();
        let total: usize = tags.values().map(TagUsage::total).sum();
        writeln!(f, "Block usage: {total} tags, {} distinct", tags.len())?;
        for (name, usage) in tags.iter() {
            writeln!(
                f,
                "  {name}: {} rendered, {} missing, {} failed, {} warnings",
                usage.rendered, usage.missing, usage.failed, usage.warnings
            )?;
        }
        Ok(())
    }
}
