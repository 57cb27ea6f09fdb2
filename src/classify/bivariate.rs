//! Two-attribute classification into a square palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::quantile::QuantileBinner;
use crate::error::{BivarmapError, Result};
use crate::palettes::Color;

/// The two attribute values of one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub a: f64,
    pub b: f64,
}

impl Pair {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// Region id to attribute pair; `None` means the region has no data.
///
/// A sorted map keeps the fitting sample order reproducible.
pub type Observations = BTreeMap<String, Option<Pair>>;

/// Class indices of a pair, one per attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Buckets {
    pub a: usize,
    pub b: usize,
}

impl Buckets {
    /// Flat palette offset: attribute A picks the block of `n`, B the offset in it.
    pub fn palette_index(&self, n: usize) -> usize {
        self.b + self.a * n
    }
}

/// Immutable classifier holding both fitted binners and the palette.
///
/// Switching palettes means building a new classifier; nothing here mutates
/// after construction, so a classifier can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct BivariateClassifier {
    n: usize,
    binner_a: QuantileBinner,
    binner_b: QuantileBinner,
    palette: Vec<Color>,
    no_data: Color,
}

impl BivariateClassifier {
    /// Fit a classifier from the two samples and a flat palette.
    ///
    /// The class count is `floor(sqrt(palette.len()))`. When the palette length
    /// is not a perfect square the colors past `n*n` are kept but never selected.
    pub fn new(sample_a: &[f64], sample_b: &[f64], palette: Vec<Color>) -> Result<Self> {
        let n = classes_for_palette(palette.len());
        if n < 1 {
            return Err(BivarmapError::invalid_input(
                "Palette must contain at least one color",
            ));
        }

        let no_data = Color::no_data();
        if let Some(clash) = palette.iter().find(|c| c.same_as(&no_data)) {
            return Err(BivarmapError::invalid_input(format!(
                "Palette color {} is indistinguishable from the no-data color {}",
                clash, no_data
            )));
        }

        let binner_a = QuantileBinner::new(sample_a, n)?;
        let binner_b = QuantileBinner::new(sample_b, n)?;

        debug!(
            n = n,
            palette_len = palette.len(),
            boundaries_a = ?binner_a.boundaries(),
            boundaries_b = ?binner_b.boundaries(),
            "Fitted bivariate classifier"
        );

        Ok(Self {
            n,
            binner_a,
            binner_b,
            palette,
            no_data,
        })
    }

    /// Classes per attribute
    pub fn n(&self) -> usize {
        self.n
    }

    /// The full palette as supplied, including any unused tail
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn binner_a(&self) -> &QuantileBinner {
        &self.binner_a
    }

    pub fn binner_b(&self) -> &QuantileBinner {
        &self.binner_b
    }

    /// The sentinel returned for absent observations
    pub fn no_data_color(&self) -> &Color {
        &self.no_data
    }

    /// Class indices of `pair`. Every other lookup goes through here.
    pub fn buckets_for(&self, pair: &Pair) -> Buckets {
        Buckets {
            a: self.binner_a.bucket(pair.a),
            b: self.binner_b.bucket(pair.b),
        }
    }

    /// Palette color of the cell at column `a`, row `b`
    pub fn color_at(&self, buckets: Buckets) -> &Color {
        &self.palette[buckets.palette_index(self.n)]
    }

    /// Color of an observation, or the no-data sentinel when it is absent
    pub fn color_for(&self, pair: Option<&Pair>) -> &Color {
        match pair {
            Some(pair) => self.color_at(self.buckets_for(pair)),
            None => &self.no_data,
        }
    }
}

/// Fit a classifier on every present observation.
pub fn build_classifier(
    observations: &Observations,
    palette: Vec<Color>,
) -> Result<BivariateClassifier> {
    let (sample_a, sample_b): (Vec<f64>, Vec<f64>) = observations
        .values()
        .flatten()
        .map(|pair| (pair.a, pair.b))
        .unzip();

    if sample_a.is_empty() {
        return Err(BivarmapError::invalid_input(
            "No observation carries data; nothing to classify",
        ));
    }

    BivariateClassifier::new(&sample_a, &sample_b, palette)
}

/// `floor(sqrt(len))` without going through floating point
fn classes_for_palette(len: usize) -> usize {
    let mut n = 0usize;
    while (n + 1) * (n + 1) <= len {
        n += 1;
    }
    n
}
