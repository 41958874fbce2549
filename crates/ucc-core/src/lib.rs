//! # ucc-core
//!
//! Core building blocks for UCCMon: the workspace error type, the shared
//! event-data types, and the backend traits (`EventData`, `HistogramSink`)
//! that decouple the trigger-gated collector from any concrete host
//! runtime.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{EventData, HistogramId, HistogramSink};
pub use types::{CaloMet, InputTag, PixelClusters, TriggerDecision};
