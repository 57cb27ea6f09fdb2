//! # bivarmap
//!
//! Bivariate choropleth classification.
//!
//! Each region carries two numeric attributes. Both attributes are binned
//! into `n` quantile classes and the pair of classes picks one color from a
//! flat `n×n` palette. The same class lookup drives tooltip text and the
//! legend grid, so the three always agree.
//!
//! ## Architecture
//!
//! - **Core**: [`classify`] holds the quantile binner, the classifier, the legend
//!   model and the formatter
//! - **Palettes**: built-in 3×3 schemes and a validated color type
//! - **Service**: CSV loading and a JSON API for map renderers

pub mod classify;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod palettes;
pub mod state;

pub use classify::{
    build_classifier, build_legend, format_pair, AxisTitles, BivariateClassifier, Buckets,
    LegendModel, Observations, Pair, QuantileBinner, Swatch,
};
pub use config::Config;
pub use error::{BivarmapError, Result};
pub use logging::{generate_request_id, init_tracing, log_error, log_timed_operation};
pub use palettes::Color;
pub use state::AppState;
