//! Tooltip text for a region's pair of values.

use super::bivariate::{BivariateClassifier, Pair};
use super::AxisTitles;

/// Text shown for regions without data
pub const NO_DATA_TEXT: &str = "N/A";

/// Unit appended to both values unless the caller chooses another
pub const DEFAULT_UNIT: &str = "%";

/// `text`, followed by ` (label)` when the class has a non-empty label.
pub(crate) fn annotate(text: &str, labels: Option<&[String]>, bucket: usize) -> String {
    match labels.and_then(|l| l.get(bucket)).filter(|l| !l.is_empty()) {
        Some(label) => format!("{} ({})", text, label),
        None => text.to_string(),
    }
}

/// Two-line summary of `pair`, one line per attribute.
///
/// Classes come from [`BivariateClassifier::buckets_for`], so the labels always
/// agree with the color the same pair is drawn in.
pub fn format_pair(
    pair: Option<&Pair>,
    classifier: &BivariateClassifier,
    titles: &AxisTitles,
    labels: Option<&[String]>,
    unit: &str,
) -> String {
    let Some(pair) = pair else {
        return NO_DATA_TEXT.to_string();
    };
    let buckets = classifier.buckets_for(pair);

    let line_a = annotate(&format!("{}{} {}", pair.a, unit, titles.a), labels, buckets.a);
    let line_b = annotate(&format!("{}{} {}", pair.b, unit, titles.b), labels, buckets.b);
    format!("{}\n{}", line_a, line_b)
}
