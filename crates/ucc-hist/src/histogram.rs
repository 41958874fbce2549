//! Uniform-binning 1D histogram, mutable only one sample at a time.

use serde::{Deserialize, Serialize};
use ucc_core::{Error, Result};

/// A 1D histogram with `n_bins` uniform bins over `[x_min, x_max)`.
///
/// Binning parameters are fixed at construction and never change. Samples
/// below `x_min` are counted in `underflow`; samples at or above `x_max`
/// in `overflow` (the upper edge belongs to overflow, as in ROOT's TH1).
/// NaN samples count as underflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram1D {
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Number of bins (excluding under/overflow).
    pub n_bins: usize,
    /// Lower edge of the first bin.
    pub x_min: f64,
    /// Upper edge of the last bin.
    pub x_max: f64,
    /// Bin contents (length = `n_bins`).
    pub bin_content: Vec<f64>,
    /// Sum of samples below `x_min`.
    pub underflow: f64,
    /// Sum of samples at or above `x_max`.
    pub overflow: f64,
    /// Total number of samples, under/overflow included.
    pub entries: u64,
}

impl Histogram1D {
    /// Create an empty histogram.
    ///
    /// Fails with [`Error::Validation`] on a zero bin count, a non-finite
    /// edge, or `x_min >= x_max`.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        n_bins: usize,
        x_min: f64,
        x_max: f64,
    ) -> Result<Self> {
        let name = name.into();
        if n_bins == 0 {
            return Err(Error::Validation(format!("histogram '{name}' needs at least one bin")));
        }
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(Error::Validation(format!(
                "invalid range for histogram '{name}': expected finite x_min < x_max, got ({x_min}, {x_max})"
            )));
        }
        Ok(Self {
            name,
            title: title.into(),
            n_bins,
            x_min,
            x_max,
            bin_content: vec![0.0; n_bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        })
    }

    /// Add one sample.
    pub fn fill(&mut self, value: f64) {
        self.entries += 1;
        if value < self.x_min || value.is_nan() {
            self.underflow += 1.0;
            return;
        }
        if value >= self.x_max {
            self.overflow += 1.0;
            return;
        }
        let width = self.bin_width();
        let mut bin = ((value - self.x_min) / width) as usize;
        // Guard the edge case where rounding lands exactly on n_bins.
        if bin >= self.n_bins {
            bin = self.n_bins - 1;
        }
        self.bin_content[bin] += 1.0;
    }

    /// Width of one bin.
    pub fn bin_width(&self) -> f64 {
        (self.x_max - self.x_min) / self.n_bins as f64
    }

    /// Sum of in-range bin contents (under/overflow excluded).
    pub fn integral(&self) -> f64 {
        self.bin_content.iter().sum()
    }
}
