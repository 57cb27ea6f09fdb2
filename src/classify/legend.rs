//! Renderer-independent description of the legend grid.

use serde::Serialize;

use super::bivariate::{BivariateClassifier, Buckets};
use super::format::annotate;
use super::AxisTitles;
use crate::palettes::Color;

/// One cell of the legend grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    /// Class of attribute B
    pub row: usize,
    /// Class of attribute A
    pub col: usize,
    pub color: Color,
    /// Two lines, one per attribute, each with its class label when present
    pub title: String,
}

/// The `n×n` swatches plus axis titles.
///
/// Swatches are ordered column by column. A renderer typically draws row `0`
/// at the bottom and rotates the square by 45° so the two axes read as
/// diagonals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendModel {
    pub n: usize,
    pub titles: AxisTitles,
    pub swatches: Vec<Swatch>,
    pub no_data: Color,
}

impl LegendModel {
    /// Swatch at column `col` (class of A) and row `row` (class of B)
    pub fn swatch(&self, col: usize, row: usize) -> Option<&Swatch> {
        if col >= self.n || row >= self.n {
            return None;
        }
        self.swatches.get(col * self.n + row)
    }
}

/// Describe the legend for `classifier`.
pub fn build_legend(
    classifier: &BivariateClassifier,
    titles: &AxisTitles,
    labels: Option<&[String]>,
) -> LegendModel {
    let n = classifier.n();
    let mut swatches = Vec::with_capacity(n * n);

    for i in 0..n {
        for j in 0..n {
            let title = format!(
                "{}\n{}",
                annotate(&titles.a, labels, i),
                annotate(&titles.b, labels, j)
            );
            swatches.push(Swatch {
                row: j,
                col: i,
                color: classifier.color_at(Buckets { a: i, b: j }).clone(),
                title,
            });
        }
    }

    LegendModel {
        n,
        titles: titles.clone(),
        swatches,
        no_data: classifier.no_data_color().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Pair;
    use crate::palettes::{BivariateScheme, BuPu};
    use pretty_assertions::assert_eq;

    fn classifier() -> BivariateClassifier {
        let a: Vec<f64> = (0..30).map(f64::from).collect();
        let b: Vec<f64> = (0..30).map(|v| f64::from(v) * 2.0).collect();
        BivariateClassifier::new(&a, &b, BuPu.palette().unwrap()).unwrap()
    }

    #[test]
    fn test_grid_shape_and_colors() {
        let classifier = classifier();
        let legend = build_legend(&classifier, &AxisTitles::default(), None);
        assert_eq!(legend.n, 3);
        assert_eq!(legend.swatches.len(), 9);

        let palette = BuPu.palette().unwrap();
        for swatch in &legend.swatches {
            assert_eq!(swatch.color, palette[swatch.row + swatch.col * 3]);
        }
        assert_eq!(legend.swatch(0, 0).unwrap().color, palette[0]);
        assert_eq!(legend.swatch(1, 0).unwrap().color, palette[3]);
        assert_eq!(legend.swatch(0, 1).unwrap().color, palette[1]);
        assert_eq!(legend.swatch(2, 2).unwrap().color, palette[8]);
        assert!(legend.swatch(3, 0).is_none());
    }

    #[test]
    fn test_swatch_matches_classified_color() {
        let classifier = classifier();
        let legend = build_legend(&classifier, &AxisTitles::default(), None);
        let pair = Pair::new(25.0, 3.0);
        let buckets = classifier.buckets_for(&pair);
        let swatch = legend.swatch(buckets.a, buckets.b).unwrap();
        assert_eq!(&swatch.color, classifier.color_for(Some(&pair)));
    }

    #[test]
    fn test_titles_carry_labels() {
        let labels = vec!["low".to_string(), String::new(), "high".to_string()];
        let legend = build_legend(&classifier(), &AxisTitles::default(), Some(&labels));

        assert_eq!(legend.swatch(0, 2).unwrap().title, "Diabetes (low)\nObesity (high)");
        assert_eq!(legend.swatch(1, 1).unwrap().title, "Diabetes\nObesity");
        assert_eq!(legend.swatch(2, 0).unwrap().title, "Diabetes (high)\nObesity (low)");
        assert_eq!(legend.titles, AxisTitles::default());
    }

    #[test]
    fn test_no_data_color_exposed() {
        let legend = build_legend(&classifier(), &AxisTitles::default(), None);
        assert_eq!(legend.no_data, Color::no_data());
    }
}
