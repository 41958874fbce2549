//! Trigger-gate evaluation over a per-event decision set.

use ucc_core::TriggerDecision;

/// Whether the configured trigger path fired in this event.
///
/// True iff at least one decision name contains `path` as a substring and
/// that same decision both ran and accepted. Multiple matching entries OR
/// together with no preference among them. Substring matching is
/// intentional: it tolerates versioned path suffixes such as `_v5`.
pub fn has_fired(decisions: &[TriggerDecision], path: &str) -> bool {
    decisions.iter().any(|d| d.name.contains(path) && d.was_run && d.accept)
}
