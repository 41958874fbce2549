//! The trigger-gated collector: booking and per-event sampling.

use ucc_core::{EventData, HistogramId, HistogramSink, Result};

use crate::config::MonitorConfig;
use crate::gate;

/// What one call to [`BookedUccMonitor::analyze`] did with the event.
///
/// Purely an observation for callers (run summaries, logging, tests); it
/// feeds no control flow back into the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The trigger-decision collection was absent or invalid; reported and
    /// skipped.
    NoTriggerResults,
    /// The gate did not fire; nothing was recorded.
    NotFired,
    /// The gate fired; the flags say which histograms actually received a
    /// sample.
    Sampled {
        /// The cluster histogram received a sample.
        clusters: bool,
        /// The energy-sum histogram received a sample.
        sum_et: bool,
    },
}

/// A configured monitor, ready to book its histograms.
///
/// Construction validates the configuration; [`UccMonitor::book`] consumes
/// the monitor, so processing events before booking — or booking the same
/// instance twice — is unrepresentable.
#[derive(Debug, Clone)]
pub struct UccMonitor {
    config: MonitorConfig,
}

impl UccMonitor {
    /// Create a monitor from a validated configuration.
    pub fn new(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The monitor's configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Book the two monitoring histograms under `HLT/HI/<triggerPath>`.
    ///
    /// Called once per processing run, before any event. The sink does not
    /// deduplicate: booking a second monitor over the same path creates
    /// duplicate histograms.
    pub fn book(self, sink: &mut dyn HistogramSink) -> Result<BookedUccMonitor> {
        let folder = self.config.folder();
        let h_sum_et = sink.book_1d(
            &folder,
            "h_SumEt",
            "SumEt",
            self.config.n_et,
            self.config.min_et,
            self.config.max_et,
        )?;
        let h_si_pixel_clusters = sink.book_1d(
            &folder,
            "h_SiPixelClusters",
            "h_SiPixelClusters",
            self.config.n_clusters,
            self.config.min_clusters as f64,
            self.config.max_clusters as f64,
        )?;
        tracing::info!(folder = %folder, "booked UCC monitoring histograms");
        Ok(BookedUccMonitor { config: self.config, h_sum_et, h_si_pixel_clusters })
    }
}

/// A booked monitor; terminal state for the run, accepts events repeatedly.
#[derive(Debug, Clone)]
pub struct BookedUccMonitor {
    config: MonitorConfig,
    h_sum_et: HistogramId,
    h_si_pixel_clusters: HistogramId,
}

impl BookedUccMonitor {
    /// The monitor's configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Process one event.
    ///
    /// Resolves the trigger gate and, if it fired, fetches the cluster
    /// count and the energy sum and adds one sample each. The two fetches
    /// are independent: an absent collection is reported and skipped
    /// without affecting the other. Events are never deduplicated; the
    /// same event analyzed twice adds two samples.
    pub fn analyze(
        &self,
        event: &dyn EventData,
        sink: &mut dyn HistogramSink,
    ) -> Result<EventOutcome> {
        let Some(decisions) = event.trigger_decisions(&self.config.trigger_results) else {
            tracing::warn!(tag = %self.config.trigger_results, "invalid collection: TriggerResults");
            return Ok(EventOutcome::NoTriggerResults);
        };

        if !gate::has_fired(decisions, &self.config.trigger_path) {
            return Ok(EventOutcome::NotFired);
        }

        let clusters = match event.pixel_clusters(&self.config.pixel_cluster) {
            Some(c) => {
                sink.fill(self.h_si_pixel_clusters, c.count as f64)?;
                true
            }
            None => {
                tracing::debug!(tag = %self.config.pixel_cluster, "invalid collection: pixel clusters");
                false
            }
        };

        let sum_et = match event.calo_met(&self.config.calo_met) {
            Some(met) => {
                sink.fill(self.h_sum_et, met.sum_et)?;
                true
            }
            None => {
                tracing::debug!(tag = %self.config.calo_met, "invalid collection: caloMET");
                false
            }
        };

        Ok(EventOutcome::Sampled { clusters, sum_et })
    }
}
