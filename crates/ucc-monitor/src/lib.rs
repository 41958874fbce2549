//! # ucc-monitor
//!
//! Trigger-gated histogram collector for heavy-ion ultra-central-collision
//! (UCC) monitoring. For each event it resolves whether a configured
//! trigger path fired — by substring match over the upstream decision set —
//! and, if so, samples the pixel-cluster count and the transverse-energy
//! sum into two booked histograms.
//!
//! The collector is a three-state lifecycle rendered as typestate:
//! construction validates the configuration, [`UccMonitor::book`] consumes
//! the configured monitor, and only the returned [`BookedUccMonitor`] can
//! process events.
//!
//! ## Example
//!
//! ```
//! use ucc_core::TriggerDecision;
//! use ucc_hist::MemoryStore;
//! use ucc_monitor::{EventRecord, MonitorConfig, UccMonitor};
//!
//! let config = MonitorConfig::from_json_str(r#"{
//!     "triggerResults": "TriggerResults",
//!     "caloMet": "caloMet",
//!     "pixelCluster": "siPixelClusters",
//!     "triggerPath": "HLT_UCC",
//!     "nClusters": 100, "minClusters": 0, "maxClusters": 10000,
//!     "nEt": 200, "minEt": 0.0, "maxEt": 400.0
//! }"#).unwrap();
//!
//! let mut store = MemoryStore::new();
//! let monitor = UccMonitor::new(config).unwrap().book(&mut store).unwrap();
//!
//! let event = EventRecord::new()
//!     .with_trigger_results("TriggerResults", vec![TriggerDecision::new("HLT_UCC_v5", true, true)])
//!     .with_pixel_clusters("siPixelClusters", 120)
//!     .with_calo_met("caloMet", 45.3);
//! monitor.analyze(&event, &mut store).unwrap();
//!
//! assert_eq!(store.find("HLT/HI/HLT_UCC", "h_SumEt").unwrap().entries, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collector;
pub mod config;
pub mod gate;
pub mod record;
pub mod summary;

pub use collector::{BookedUccMonitor, EventOutcome, UccMonitor};
pub use config::{MonitorConfig, FOLDER_PREFIX};
pub use record::EventRecord;
pub use summary::RunSummary;
