//! Palettes for bivariate classification.
//!
//! A bivariate palette is a flat list of `n*n` colors. This module provides the
//! validated [`Color`] type and the built-in 3×3 schemes.

pub mod color;
pub mod schemes;

pub use color::Color;
pub use schemes::{get_scheme, scheme_names, BivariateScheme, DEFAULT_SCHEME};

// Re-export the built-in schemes
pub use schemes::{BuPu, GnBu, PuOr, RdBu};
