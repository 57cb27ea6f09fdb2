//! Test data generation utilities.
//!
//! Writes CSV files in the county/diabetes/obesity layout the server reads by default.

use std::fmt::Write as _;
use std::path::Path;

use bivarmap::{Observations, Pair};

/// Nine regions where attribute A rises 1..9 while B falls 9..1, plus one without data.
pub fn scenario_observations() -> Observations {
    let mut observations = Observations::new();
    for i in 1..=9 {
        observations.insert(
            format!("0100{}", i),
            Some(Pair::new(f64::from(i), f64::from(10 - i))),
        );
    }
    observations.insert("02000".to_string(), None);
    observations
}

/// Render observations as CSV text; absent pairs become empty cells.
pub fn observations_to_csv(observations: &Observations) -> String {
    let mut csv = String::from("county,diabetes,obesity\n");
    for (id, pair) in observations {
        match pair {
            Some(pair) => writeln!(csv, "{},{},{}", id, pair.a, pair.b),
            None => writeln!(csv, "{},,", id),
        }
        .expect("Writing to a String cannot fail");
    }
    csv
}

/// Write the scenario dataset to `path`
pub fn create_scenario_csv(path: &Path) -> std::io::Result<()> {
    std::fs::write(path, observations_to_csv(&scenario_observations()))
}
