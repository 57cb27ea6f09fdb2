//! Bivariate classification engine.
//!
//! Each attribute is binned into `n` quantile classes independently; the two
//! class indices select one color of an `n×n` palette. Legends and tooltip
//! text are derived from the same class lookup.

pub mod bivariate;
pub mod format;
pub mod legend;
pub mod quantile;

use serde::{Deserialize, Serialize};

pub use bivariate::{build_classifier, BivariateClassifier, Buckets, Observations, Pair};
pub use format::{format_pair, DEFAULT_UNIT, NO_DATA_TEXT};
pub use legend::{build_legend, LegendModel, Swatch};
pub use quantile::QuantileBinner;

/// Display names of attribute A and attribute B
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitles {
    pub a: String,
    pub b: String,
}

impl AxisTitles {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self::new("Diabetes", "Obesity")
    }
}
