//! Application state management for bivarmap.
//!
//! Holds the loaded observations and one fitted classifier per built-in
//! scheme. Choosing a scheme selects a different classifier; none of them is
//! ever refitted in place.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::classify::{build_classifier, BivariateClassifier, Observations, Pair};
use crate::config::Config;
use crate::error::{BivarmapError, Result};
use crate::palettes::{get_scheme, scheme_names};

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Path of the loaded data file, for status reporting
    pub data_file: String,
    /// Region id to attribute pair
    pub observations: Observations,
    /// Fitted classifiers keyed by canonical scheme name
    pub classifiers: BTreeMap<String, BivariateClassifier>,
}

impl AppState {
    /// Fit every built-in scheme on `observations`
    pub fn new(config: Config, data_file: String, observations: Observations) -> Result<Self> {
        let mut classifiers = BTreeMap::new();
        for name in scheme_names() {
            let scheme = get_scheme(name)?;
            let classifier = build_classifier(&observations, scheme.palette()?)?;
            classifiers.insert(scheme.name().to_string(), classifier);
        }

        info!(
            scheme_count = classifiers.len(),
            region_count = observations.len(),
            "Fitted classifiers"
        );

        Ok(Self {
            config,
            data_file,
            observations,
            classifiers,
        })
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(
        config: Config,
        data_file: String,
        observations: Observations,
    ) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(config, data_file, observations)?))
    }

    /// Classifier for `scheme`, or for the configured default when `None`.
    ///
    /// Returns the canonical scheme name alongside the classifier.
    pub fn classifier(&self, scheme: Option<&str>) -> Result<(&str, &BivariateClassifier)> {
        let requested = scheme.unwrap_or(self.config.data.default_scheme.as_str());
        let canonical = get_scheme(requested)?;
        self.classifiers
            .get_key_value(canonical.name())
            .map(|(name, classifier)| (name.as_str(), classifier))
            .ok_or_else(|| BivarmapError::InvalidParameter {
                param: "scheme".to_string(),
                message: format!("Scheme not loaded: {}", requested),
            })
    }

    /// Observation for a region; the outer `None` means the id is unknown
    pub fn observation(&self, id: &str) -> Option<&Option<Pair>> {
        self.observations.get(id)
    }

    /// Labels configured for the classes, if any
    pub fn labels(&self) -> Option<&[String]> {
        let labels = &self.config.data.labels;
        (!labels.is_empty()).then_some(labels.as_slice())
    }
}
