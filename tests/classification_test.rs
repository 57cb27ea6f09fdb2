//! End-to-end checks of the classification core through the public API.

mod common;

use bivarmap::palettes::color::parse_palette;
use bivarmap::palettes::{get_scheme, scheme_names};
use bivarmap::{
    build_classifier, build_legend, format_pair, AxisTitles, BivarmapError, Buckets, Color,
    Observations, Pair, QuantileBinner,
};
use common::{assertions, test_data};
use pretty_assertions::assert_eq;

fn distinct_palette(len: usize) -> Vec<Color> {
    let colors: Vec<String> = (0..len).map(|i| format!("#0000{:02x}", i + 1)).collect();
    parse_palette(colors.as_slice()).unwrap()
}

fn default_labels() -> Vec<String> {
    vec!["low".to_string(), String::new(), "high".to_string()]
}

#[test]
fn test_scenario_middle_pair() {
    let palette = distinct_palette(9);
    let classifier =
        build_classifier(&test_data::scenario_observations(), palette.clone()).unwrap();

    let pair = Pair::new(5.0, 5.0);
    assert_eq!(classifier.buckets_for(&pair), Buckets { a: 1, b: 1 });
    assert_eq!(classifier.color_for(Some(&pair)), &palette[4]);
}

#[test]
fn test_palette_ten_colors_uses_nine() {
    let palette = distinct_palette(10);
    let classifier =
        build_classifier(&test_data::scenario_observations(), palette.clone()).unwrap();
    assert_eq!(classifier.n(), 3);

    let mut reached = Vec::new();
    for a in 0..=10 {
        for b in 0..=10 {
            let color = classifier.color_for(Some(&Pair::new(f64::from(a), f64::from(b))));
            if !reached.contains(color) {
                reached.push(color.clone());
            }
        }
    }
    assert_eq!(reached.len(), 9);
    assert!(!reached.contains(&palette[9]));
}

#[test]
fn test_absent_never_touches_palette() {
    let palette = distinct_palette(9);
    let classifier =
        build_classifier(&test_data::scenario_observations(), palette.clone()).unwrap();

    let color = classifier.color_for(None);
    assert_eq!(color, &Color::no_data());
    assert!(!palette.contains(color));
    assert_eq!(
        format_pair(None, &classifier, &AxisTitles::default(), Some(&default_labels()), "%"),
        "N/A"
    );
}

#[test]
fn test_text_and_color_share_buckets() {
    let scheme = get_scheme("BuPu").unwrap();
    let observations = test_data::scenario_observations();
    let classifier = build_classifier(&observations, scheme.palette().unwrap()).unwrap();
    let legend = build_legend(&classifier, &AxisTitles::default(), Some(&default_labels()));

    for pair in observations.values().flatten() {
        let buckets = classifier.buckets_for(pair);
        let swatch = legend.swatch(buckets.a, buckets.b).unwrap();
        assert_eq!(&swatch.color, classifier.color_for(Some(pair)));

        // The legend title names the same classes as the tooltip
        let text = format_pair(
            Some(pair),
            &classifier,
            &AxisTitles::default(),
            Some(&default_labels()),
            "%",
        );
        let (tooltip_a, tooltip_b) = text.split_once('\n').unwrap();
        let (legend_a, legend_b) = swatch.title.split_once('\n').unwrap();
        assert!(tooltip_a.ends_with(legend_a), "{} vs {}", tooltip_a, legend_a);
        assert!(tooltip_b.ends_with(legend_b), "{} vs {}", tooltip_b, legend_b);
    }
}

#[test]
fn test_every_scheme_fits_scenario() {
    let observations = test_data::scenario_observations();
    for name in scheme_names() {
        let scheme = get_scheme(name).unwrap();
        let classifier = build_classifier(&observations, scheme.palette().unwrap()).unwrap();
        assertions::assert_array_approx_eq(
            classifier.binner_a().boundaries(),
            &[11.0 / 3.0, 19.0 / 3.0],
            None,
        );
        assertions::assert_array_approx_eq(
            classifier.binner_b().boundaries(),
            &[11.0 / 3.0, 19.0 / 3.0],
            None,
        );
    }
}

#[test]
fn test_balance_on_larger_sample() {
    let sample: Vec<f64> = (0..1000).map(|i| (f64::from(i) * 0.37).sin() * 100.0).collect();
    for classes in [2, 3, 4, 5, 7] {
        let binner = QuantileBinner::new(&sample, classes).unwrap();
        let mut counts = vec![0usize; classes];
        for &value in &sample {
            counts[binner.bucket(value)] += 1;
        }
        assertions::assert_balanced(&counts, sample.len());
    }
}

#[test]
fn test_construction_failures() {
    let mut empty = Observations::new();
    assert!(matches!(
        build_classifier(&empty, distinct_palette(9)),
        Err(BivarmapError::InvalidInput { .. })
    ));

    empty.insert("a".to_string(), Some(Pair::new(1.0, 2.0)));
    assert!(matches!(
        build_classifier(&empty, Vec::new()),
        Err(BivarmapError::InvalidInput { .. })
    ));
    assert!(matches!(
        QuantileBinner::new(&[1.0], 0),
        Err(BivarmapError::InvalidInput { .. })
    ));
}
