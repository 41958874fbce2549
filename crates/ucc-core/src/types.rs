//! Common data types for UCCMon

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name under which a collection is requested from the event source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputTag(String);

impl InputTag {
    /// Create a new input tag.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The tag label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InputTag {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

/// One entry of a per-event trigger decision set.
///
/// The decision set is an ordered, read-only sequence owned by the event
/// source; this module only inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDecision {
    /// Full trigger path name, including any version suffix (e.g. `_v5`).
    pub name: String,
    /// Whether the path was run for this event.
    pub was_run: bool,
    /// Whether the path accepted this event.
    pub accept: bool,
}

impl TriggerDecision {
    /// Create a decision entry.
    pub fn new(name: impl Into<String>, was_run: bool, accept: bool) -> Self {
        Self { name: name.into(), was_run, accept }
    }
}

/// A pixel-cluster collection reduced to its only consumed property: the
/// element count summed over the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelClusters {
    /// Number of clusters in the collection.
    pub count: usize,
}

impl PixelClusters {
    /// Create a cluster summary.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

/// Calorimeter energy-sum quantity for one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaloMet {
    /// Total transverse energy.
    pub sum_et: f64,
}

impl CaloMet {
    /// Create an energy-sum quantity.
    pub fn new(sum_et: f64) -> Self {
        Self { sum_et }
    }
}
