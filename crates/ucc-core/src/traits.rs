//! Core traits for UCCMon
//!
//! This module defines the trait-based architecture that enables
//! dependency inversion: the trigger-gated collector does not depend on
//! the host's event-delivery or histogram-booking backends.

use crate::types::{CaloMet, InputTag, PixelClusters, TriggerDecision};
use crate::Result;

/// Opaque handle to a booked histogram, valid for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistogramId(usize);

impl HistogramId {
    /// Create a handle from a sink-assigned index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The sink-assigned index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Typed fetch-by-tag access to one event's data.
///
/// Every getter returns `None` when the requested collection is absent or
/// invalid; deciding whether that is reportable is the caller's business.
pub trait EventData {
    /// The trigger decision set, ordered as produced upstream.
    fn trigger_decisions(&self, tag: &InputTag) -> Option<&[TriggerDecision]>;

    /// The pixel-cluster collection summary.
    fn pixel_clusters(&self, tag: &InputTag) -> Option<&PixelClusters>;

    /// The calorimeter energy-sum quantity.
    fn calo_met(&self, tag: &InputTag) -> Option<&CaloMet>;
}

/// Histogram booking and filling backend.
///
/// Booking is not idempotent: booking the same folder/name twice creates
/// two histograms. Guaranteeing a single booking per run is the
/// orchestrator's contract, not the sink's. If histograms are shared
/// across event streams, `fill` must be made safe by the backend; callers
/// here never assume more than serial access.
pub trait HistogramSink {
    /// Create a 1D histogram with `n_bins` uniform bins over
    /// `[x_min, x_max]` under `folder`.
    fn book_1d(
        &mut self,
        folder: &str,
        name: &str,
        title: &str,
        n_bins: usize,
        x_min: f64,
        x_max: f64,
    ) -> Result<HistogramId>;

    /// Add one sample to a booked histogram.
    fn fill(&mut self, id: HistogramId, value: f64) -> Result<()>;
}
