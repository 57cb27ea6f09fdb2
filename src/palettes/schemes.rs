//! Built-in bivariate color schemes.
//!
//! Each scheme is a 3×3 grid stored row by row: the first three colors are the
//! lowest class of the first attribute, crossed with increasing classes of the
//! second attribute.

use super::color::{parse_palette, Color};
use crate::error::{BivarmapError, Result};

/// Scheme used when no scheme is requested
pub const DEFAULT_SCHEME: &str = "BuPu";

/// Trait for bivariate color schemes
pub trait BivariateScheme: Send + Sync {
    /// The flat list of colors, as CSS strings
    fn colors(&self) -> &'static [&'static str];

    /// Get the name of this scheme
    fn name(&self) -> &str;

    /// The colors parsed into a palette
    fn palette(&self) -> Result<Vec<Color>> {
        parse_palette(self.colors())
    }
}

/// Red to blue
pub struct RdBu;

impl BivariateScheme for RdBu {
    fn colors(&self) -> &'static [&'static str] {
        &[
            "#e8e8e8", "#e4acac", "#c85a5a", //
            "#b0d5df", "#ad9ea5", "#985356", //
            "#64acbe", "#627f8c", "#574249",
        ]
    }

    fn name(&self) -> &str {
        "RdBu"
    }
}

/// Blue to purple
pub struct BuPu;

impl BivariateScheme for BuPu {
    fn colors(&self) -> &'static [&'static str] {
        &[
            "#e8e8e8", "#ace4e4", "#5ac8c8", //
            "#dfb0d6", "#a5add3", "#5698b9", //
            "#be64ac", "#8c62aa", "#3b4994",
        ]
    }

    fn name(&self) -> &str {
        "BuPu"
    }
}

/// Green to blue
pub struct GnBu;

impl BivariateScheme for GnBu {
    fn colors(&self) -> &'static [&'static str] {
        &[
            "#e8e8e8", "#b5c0da", "#6c83b5", //
            "#b8d6be", "#90b2b3", "#567994", //
            "#73ae80", "#5a9178", "#2a5a5b",
        ]
    }

    fn name(&self) -> &str {
        "GnBu"
    }
}

/// Purple to orange
pub struct PuOr;

impl BivariateScheme for PuOr {
    fn colors(&self) -> &'static [&'static str] {
        &[
            "#e8e8e8", "#e4d9ac", "#c8b35a", //
            "#cbb8d7", "#c8ada0", "#af8e53", //
            "#9972af", "#976b82", "#804d36",
        ]
    }

    fn name(&self) -> &str {
        "PuOr"
    }
}

/// Names of all built-in schemes, in display order
pub fn scheme_names() -> &'static [&'static str] {
    &["RdBu", "BuPu", "GnBu", "PuOr"]
}

/// Get a scheme by name (case-insensitive)
pub fn get_scheme(name: &str) -> Result<Box<dyn BivariateScheme>> {
    match name.to_lowercase().as_str() {
        "rdbu" => Ok(Box::new(RdBu)),
        "bupu" => Ok(Box::new(BuPu)),
        "gnbu" => Ok(Box::new(GnBu)),
        "puor" => Ok(Box::new(PuOr)),
        _ => Err(BivarmapError::InvalidParameter {
            param: "scheme".to_string(),
            message: format!("Unknown scheme: {}", name),
        }),
    }
}
