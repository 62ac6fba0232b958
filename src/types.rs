//! Common Types and Constants
//!
//! Shared constants and small enums used across the fuzzification modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Auto-partition sizes accepted by `fuzzify`
pub const SUPPORTED_PARTITIONS: [usize; 3] = [3, 5, 7];

/// Partition size for features without a configuration entry
pub const DEFAULT_PARTITION: usize = 3;

/// Separator between feature and modality in membership table column names
pub const COLUMN_SEPARATOR: char = ';';

/// Name of the row index column in CSV files
pub const INDEX_COLUMN: &str = "index";

/// Numerical tolerance used by tests and degree comparisons
pub const EPSILON: f64 = 1e-10;

// ==================== Plot Geometry ====================

/// SVG canvas width (px)
pub const PLOT_WIDTH: f64 = 640.0;

/// SVG canvas height (px)
pub const PLOT_HEIGHT: f64 = 400.0;

/// Padding around the plot area (px)
pub const PLOT_PADDING: f64 = 48.0;

/// Line colors, cycled per modality
pub const PLOT_PALETTE: [&str; 7] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
];

// ==================== Partition Naming ====================

/// Term names used for auto-generated partitions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionNaming {
    /// dismal, poor, mediocre, average, decent, good, excellent
    #[default]
    Quality,
    /// lowest, lower, low, average, high, higher, highest
    Quantity,
}

impl PartitionNaming {
    fn full_scale(&self) -> [&'static str; 7] {
        match self {
            PartitionNaming::Quality => [
                "dismal", "poor", "mediocre", "average", "decent", "good", "excellent",
            ],
            PartitionNaming::Quantity => [
                "lowest", "lower", "low", "average", "high", "higher", "highest",
            ],
        }
    }

    /// Term names for a partition of `count` triangles, lowest first.
    ///
    /// Returns `None` for sizes outside [`SUPPORTED_PARTITIONS`].
    pub fn names(&self, count: usize) -> Option<Vec<&'static str>> {
        let scale = self.full_scale();
        let picked: Vec<&'static str> = match (self, count) {
            (PartitionNaming::Quality, 3) => vec![scale[1], scale[3], scale[5]],
            (PartitionNaming::Quantity, 3) => scale[2..5].to_vec(),
            (_, 5) => scale[1..6].to_vec(),
            (_, 7) => scale.to_vec(),
            _ => return None,
        };
        Some(picked)
    }
}

/// Options controlling auto-partition naming
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FuzzifierOptions {
    /// Naming scale for auto-generated terms
    #[serde(default)]
    pub naming: PartitionNaming,
    /// Reverse the term names (highest first)
    #[serde(default)]
    pub invert: bool,
}
