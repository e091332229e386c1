//! The embedded market-share dataset and its borrowed range views.

use crate::error::{Result, ShareError};
use crate::range::TimeRange;
use crate::series::Os;
use crate::stats::StatChange;
use serde::Serialize;

const FIRST_YEAR: u16 = 2001;

// Approximate desktop shares per year; rows need not sum to 100.
const WINDOWS: [f64; 24] = [
    96.0, 95.5, 95.0, 94.0, 94.0, 93.0, 91.5, 89.5, 94.82, 93.4,
    91.49, 89.98, 90.67, 88.98, 86.92, 83.77, 83.75, 80.39,
    77.83, 76.78, 74.74, 75.43, 68.84, 72.87,
];

const LINUX: [f64; 24] = [
    0.01, 0.08, 0.1, 0.12, 0.14, 0.16, 0.2, 0.5, 0.68, 0.77,
    0.79, 0.86, 1.10, 1.33, 1.62, 1.50, 1.64, 1.60,
    1.68, 1.76, 2.21, 2.56, 3.05, 4.12,
];

const MACOS: [f64; 24] = [
    2.5, 2.7, 3.0, 3.1, 3.3, 3.8, 4.0, 4.2, 4.50, 6.19,
    7.72, 9.16, 8.23, 9.69, 11.46, 14.73, 14.61, 18.01,
    20.49, 21.46, 23.05, 22.01, 28.11, 23.01,
];

/// Yearly percentage shares for every tracked OS.
///
/// Years are contiguous and ascending; every series has one value per year.
/// The dataset is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    years:   Vec<u16>,
    windows: Vec<f64>,
    linux:   Vec<f64>,
    macos:   Vec<f64>,
}

impl Dataset {
    /// The dataset compiled into the binary (2001–2024).
    pub fn builtin() -> Self {
        Self {
            years:   (FIRST_YEAR..).take(WINDOWS.len()).collect(),
            windows: WINDOWS.to_vec(),
            linux:   LINUX.to_vec(),
            macos:   MACOS.to_vec(),
        }
    }

    /// Build a dataset whose years start at `first_year` and run one per value.
    pub fn new(first_year: u16, windows: Vec<f64>, linux: Vec<f64>, macos: Vec<f64>) -> Result<Self> {
        let len = windows.len();
        if len == 0 {
            return Err(ShareError::Dataset("series must not be empty".into()));
        }
        if linux.len() != len || macos.len() != len {
            return Err(ShareError::Dataset(format!(
                "series lengths differ: windows={len}, linux={}, macos={}",
                linux.len(),
                macos.len()
            )));
        }
        let last = usize::from(first_year) + len - 1;
        if last > usize::from(u16::MAX) {
            return Err(ShareError::Dataset(format!("year axis overflows at {last}")));
        }

        Ok(Self {
            years: (first_year..).take(len).collect(),
            windows,
            linux,
            macos,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn years(&self) -> &[u16] {
        &self.years
    }

    pub fn series(&self, os: Os) -> &[f64] {
        match os {
            Os::Windows => &self.windows,
            Os::Linux   => &self.linux,
            Os::MacOs   => &self.macos,
        }
    }

    pub fn value(&self, os: Os, index: usize) -> Option<f64> {
        self.series(os).get(index).copied()
    }

    /// Borrow the suffix of every series selected by `range`.
    pub fn window(&self, range: TimeRange) -> DataWindow<'_> {
        let start = range.start_index(self.len());
        DataWindow {
            years:  &self.years[start..],
            shares: Os::ALL.map(|os| &self.series(os)[start..]),
        }
    }

    /// Change between the two most recent years, per series.
    ///
    /// Always computed over the full dataset, whatever range is on screen.
    pub fn latest_changes(&self) -> Option<[StatChange; 3]> {
        let last = self.len().checked_sub(1)?;
        let prev = last.checked_sub(1)?;
        Some(Os::ALL.map(|os| {
            let s = self.series(os);
            StatChange::new(os, s[last], s[prev])
        }))
    }
}

/// Borrowed slice of the dataset for one time range.
#[derive(Debug, Clone, Copy)]
pub struct DataWindow<'a> {
    years:  &'a [u16],
    shares: [&'a [f64]; 3],
}

impl<'a> DataWindow<'a> {
    pub fn years(&self) -> &'a [u16] {
        self.years
    }

    pub fn series(&self, os: Os) -> &'a [f64] {
        self.shares[os.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Year plus one value per series at `index`.
    pub fn row(&self, index: usize) -> Option<(u16, [f64; 3])> {
        let year = *self.years.get(index)?;
        Some((year, self.shares.map(|s| s[index])))
    }
}
