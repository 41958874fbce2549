//! # ucc-hist
//!
//! Fixed-range, fixed-bin-count 1D histograms and an in-memory
//! [`HistogramSink`](ucc_core::HistogramSink) implementation used by the
//! UCCMon CLI and tests.
//!
//! ## Example
//!
//! ```
//! use ucc_core::HistogramSink;
//! use ucc_hist::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let id = store.book_1d("HLT/HI/HLT_UCC", "h_SumEt", "SumEt", 100, 0.0, 200.0).unwrap();
//! store.fill(id, 45.3).unwrap();
//! let h = store.find("HLT/HI/HLT_UCC", "h_SumEt").unwrap();
//! assert_eq!(h.entries, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod histogram;
pub mod store;

pub use histogram::Histogram1D;
pub use store::{BookedHistogram, MemoryStore};
