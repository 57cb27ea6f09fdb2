//! Assertion utilities for testing.
//!
//! Floating-point comparisons for fitted class boundaries.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two arrays of floating-point values are approximately element-wise equal.
///
/// # Panics
///
/// Panics if the arrays have different lengths or if any element-wise comparison fails.
pub fn assert_array_approx_eq(actual: &[f64], expected: &[f64], epsilon: Option<f64>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Arrays have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= eps,
            "Arrays differ at index {}: actual = {}, expected = {}, diff = {}, epsilon = {}",
            i,
            a,
            e,
            diff,
            eps
        );
    }
}

/// Assert that every bucket count lies within `[floor(S/n), ceil(S/n)]`.
pub fn assert_balanced(counts: &[usize], sample_size: usize) {
    let n = counts.len();
    let floor = sample_size / n;
    let ceil = sample_size.div_ceil(n);
    for (bucket, &count) in counts.iter().enumerate() {
        assert!(
            count >= floor && count <= ceil,
            "Bucket {} holds {} of {} values, expected between {} and {}",
            bucket,
            count,
            sample_size,
            floor,
            ceil
        );
    }
}
