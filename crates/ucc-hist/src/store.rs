//! In-memory histogram store implementing [`HistogramSink`].

use serde::{Deserialize, Serialize};
use ucc_core::{Error, HistogramId, HistogramSink, Result};

use crate::histogram::Histogram1D;

/// A histogram together with the folder it was booked under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedHistogram {
    /// Output folder, e.g. `HLT/HI/HLT_UCC`.
    pub folder: String,
    /// The histogram itself.
    pub histogram: Histogram1D,
}

/// Instance-local, append-only histogram store.
///
/// Booking appends unconditionally, so booking the same folder/name twice
/// yields two independent histograms; single booking per run is the
/// caller's contract. Handles are indices into the booking order and stay
/// valid for the store's lifetime.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<BookedHistogram>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All booked histograms, in booking order.
    pub fn snapshot(&self) -> &[BookedHistogram] {
        &self.entries
    }

    /// Look up the first histogram booked under `folder` with `name`.
    pub fn find(&self, folder: &str, name: &str) -> Option<&Histogram1D> {
        self.entries
            .iter()
            .find(|e| e.folder == folder && e.histogram.name == name)
            .map(|e| &e.histogram)
    }

    /// Number of booked histograms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been booked yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistogramSink for MemoryStore {
    fn book_1d(
        &mut self,
        folder: &str,
        name: &str,
        title: &str,
        n_bins: usize,
        x_min: f64,
        x_max: f64,
    ) -> Result<HistogramId> {
        let histogram = Histogram1D::new(name, title, n_bins, x_min, x_max)?;
        self.entries.push(BookedHistogram { folder: folder.to_owned(), histogram });
        Ok(HistogramId::new(self.entries.len() - 1))
    }

    fn fill(&mut self, id: HistogramId, value: f64) -> Result<()> {
        let entry = self
            .entries
            .get_mut(id.index())
            .ok_or_else(|| Error::Validation(format!("unknown histogram handle {}", id.index())))?;
        entry.histogram.fill(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_and_fill_by_handle() {
        let mut store = MemoryStore::new();
        let id = store.book_1d("HLT/HI/HLT_UCC", "h_SumEt", "SumEt", 20, 0.0, 100.0).unwrap();
        store.fill(id, 45.3).unwrap();
        store.fill(id, 45.3).unwrap();

        let h = store.find("HLT/HI/HLT_UCC", "h_SumEt").unwrap();
        assert_eq!(h.entries, 2);
        assert_eq!(h.bin_content[9], 2.0);
    }

    #[test]
    fn duplicate_booking_creates_two_histograms() {
        let mut store = MemoryStore::new();
        let a = store.book_1d("HLT/HI/p", "h", "h", 5, 0.0, 5.0).unwrap();
        let b = store.book_1d("HLT/HI/p", "h", "h", 5, 0.0, 5.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        store.fill(b, 1.0).unwrap();
        // `find` returns the first booking, which stayed empty.
        assert_eq!(store.find("HLT/HI/p", "h").unwrap().entries, 0);
        assert_eq!(store.snapshot()[1].histogram.entries, 1);
    }

    #[test]
    fn fill_with_unknown_handle_is_an_error() {
        let mut store = MemoryStore::new();
        let err = store.fill(HistogramId::new(3), 1.0).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn booking_propagates_bad_binning() {
        let mut store = MemoryStore::new();
        assert!(store.book_1d("HLT/HI/p", "h", "h", 0, 0.0, 1.0).is_err());
        assert!(store.is_empty());
    }
}
