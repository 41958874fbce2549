//! JSON event records: the concrete [`EventData`] source consumed by the
//! CLI event loop, and the natural test double.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ucc_core::{CaloMet, EventData, InputTag, PixelClusters, Result, TriggerDecision};

/// One event, as a row of the JSONL event stream.
///
/// Each typed product family is keyed by its input-tag label; a fetch is a
/// lookup by the configured tag. Absent tags simply yield `None`, which
/// the collector treats as an invalid handle for that collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Trigger-decision sets by tag.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub trigger_results: HashMap<String, Vec<TriggerDecision>>,
    /// Pixel-cluster summaries by tag.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub pixel_clusters: HashMap<String, PixelClusters>,
    /// Energy-sum quantities by tag.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub calo_met: HashMap<String, CaloMet>,
}

impl EventRecord {
    /// Create an empty event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one event from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Attach a trigger-decision set under `tag`.
    pub fn with_trigger_results(
        mut self,
        tag: impl Into<String>,
        decisions: Vec<TriggerDecision>,
    ) -> Self {
        self.trigger_results.insert(tag.into(), decisions);
        self
    }

    /// Attach a pixel-cluster summary under `tag`.
    pub fn with_pixel_clusters(mut self, tag: impl Into<String>, count: usize) -> Self {
        self.pixel_clusters.insert(tag.into(), PixelClusters::new(count));
        self
    }

    /// Attach an energy-sum quantity under `tag`.
    pub fn with_calo_met(mut self, tag: impl Into<String>, sum_et: f64) -> Self {
        self.calo_met.insert(tag.into(), CaloMet::new(sum_et));
        self
    }
}

impl EventData for EventRecord {
    fn trigger_decisions(&self, tag: &InputTag) -> Option<&[TriggerDecision]> {
        self.trigger_results.get(tag.as_str()).map(Vec::as_slice)
    }

    fn pixel_clusters(&self, tag: &InputTag) -> Option<&PixelClusters> {
        self.pixel_clusters.get(tag.as_str())
    }

    fn calo_met(&self, tag: &InputTag) -> Option<&CaloMet> {
        self.calo_met.get(tag.as_str())
    }
}
