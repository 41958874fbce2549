//! Per-run bookkeeping accumulated from event outcomes.

use serde::{Deserialize, Serialize};

use crate::collector::EventOutcome;

/// Counters for one processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Events processed.
    pub events: u64,
    /// Events where the gate fired.
    pub fired: u64,
    /// Samples added to the cluster histogram.
    pub cluster_samples: u64,
    /// Samples added to the energy-sum histogram.
    pub et_samples: u64,
    /// Events with an absent/invalid trigger-decision collection.
    pub missing_trigger_results: u64,
}

impl RunSummary {
    /// Fold one event outcome into the counters.
    pub fn record(&mut self, outcome: &EventOutcome) {
        self.events += 1;
        match outcome {
            EventOutcome::NoTriggerResults => self.missing_trigger_results += 1,
            EventOutcome::NotFired => {}
            EventOutcome::Sampled { clusters, sum_et } => {
                self.fired += 1;
                if *clusters {
                    self.cluster_samples += 1;
                }
                if *sum_et {
                    self.et_samples += 1;
                }
            }
        }
    }
}
