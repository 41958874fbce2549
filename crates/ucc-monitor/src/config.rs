//! Monitor configuration: the external parameter schema and its loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ucc_core::{Error, InputTag, Result};

/// Fixed prefix of the output namespace; the booked folder is
/// `<prefix>/<triggerPath>`.
pub const FOLDER_PREFIX: &str = "HLT/HI";

/// Configuration of one trigger-gated monitor.
///
/// All keys are required and carry no internal defaults. A missing or
/// wrongly-typed key fails loading with [`Error::Config`] at construction
/// time; value-level problems (zero bins, inverted ranges) are caught by
/// [`MonitorConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MonitorConfig {
    /// Source of the per-event trigger decisions.
    pub trigger_results: InputTag,
    /// Source of the energy-sum quantity.
    pub calo_met: InputTag,
    /// Source of the pixel-cluster collection.
    pub pixel_cluster: InputTag,
    /// Substring matched against decision names to form the gate.
    pub trigger_path: String,
    /// Cluster histogram bin count.
    pub n_clusters: usize,
    /// Cluster histogram lower edge.
    pub min_clusters: i64,
    /// Cluster histogram upper edge.
    pub max_clusters: i64,
    /// Energy-sum histogram bin count.
    pub n_et: usize,
    /// Energy-sum histogram lower edge.
    pub min_et: f64,
    /// Energy-sum histogram upper edge.
    pub max_et: f64,
}

impl MonitorConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(format!("monitor configuration: {e}")))
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Check that the configured values are usable for booking.
    pub fn validate(&self) -> Result<()> {
        if self.trigger_path.is_empty() {
            return Err(Error::Validation("triggerPath must not be empty".into()));
        }
        if self.n_clusters == 0 {
            return Err(Error::Validation("nClusters must be at least 1".into()));
        }
        if self.min_clusters >= self.max_clusters {
            return Err(Error::Validation(format!(
                "cluster range must satisfy minClusters < maxClusters, got ({}, {})",
                self.min_clusters, self.max_clusters
            )));
        }
        if self.n_et == 0 {
            return Err(Error::Validation("nEt must be at least 1".into()));
        }
        if !self.min_et.is_finite() || !self.max_et.is_finite() || self.min_et >= self.max_et {
            return Err(Error::Validation(format!(
                "energy-sum range must satisfy finite minEt < maxEt, got ({}, {})",
                self.min_et, self.max_et
            )));
        }
        Ok(())
    }

    /// Output folder for this monitor's histograms.
    pub fn folder(&self) -> String {
        format!("{FOLDER_PREFIX}/{}", self.trigger_path)
    }
}
