//! Equal-frequency binning of a numeric sample.

use serde::Serialize;

use crate::error::{BivarmapError, Result};

/// Maps values to one of `n` quantile classes fitted on a sample.
///
/// The `n - 1` thresholds are the sample quantiles at `i/n` for `i = 1..n-1`,
/// linearly interpolated between order statistics. A value equal to a
/// threshold belongs to the lower class. Values outside the sample range
/// clamp to the first or last class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantileBinner {
    classes: usize,
    thresholds: Vec<f64>,
}

impl QuantileBinner {
    /// Fit a binner with `classes` buckets on `sample`.
    ///
    /// NaN and infinite values in the sample are ignored. Fails when no finite
    /// value remains or when `classes` is zero.
    pub fn new(sample: &[f64], classes: usize) -> Result<Self> {
        if classes < 1 {
            return Err(BivarmapError::invalid_input(
                "Class count must be at least 1",
            ));
        }

        let mut sorted: Vec<f64> = sample.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return Err(BivarmapError::invalid_input(
                "Cannot fit quantile classes on an empty sample",
            ));
        }
        sorted.sort_by(f64::total_cmp);

        let thresholds = (1..classes)
            .map(|i| quantile_sorted(&sorted, i, classes))
            .collect();

        Ok(Self {
            classes,
            thresholds,
        })
    }

    /// Number of classes
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// The `n - 1` ascending thresholds
    pub fn boundaries(&self) -> &[f64] {
        &self.thresholds
    }

    /// Class index in `[0, n-1]` for `value`. NaN maps to class 0.
    pub fn bucket(&self, value: f64) -> usize {
        self.thresholds.partition_point(|&t| t < value)
    }
}

/// Quantile at fraction `num/den` of an ascending, non-empty slice.
///
/// The position `(len-1) * num / den` is split into integer and fractional
/// parts with integer arithmetic so exact order statistics are hit exactly.
fn quantile_sorted(sorted: &[f64], num: usize, den: usize) -> f64 {
    let scaled = (sorted.len() - 1) * num;
    let index = scaled / den;
    let remainder = scaled % den;

    let lower = sorted[index];
    if remainder == 0 {
        return lower;
    }
    let upper = sorted[index + 1];
    lower + (upper - lower) * (remainder as f64 / den as f64)
}
