//! Color type shared by palettes, classifiers and legends.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BivarmapError, Result};

/// Text of the color returned for regions without data.
pub const NO_DATA_COLOR: &str = "#ccc";

/// A CSS color, kept in the notation it was given in.
///
/// The RGBA value is parsed once so that two spellings of the same color
/// (`#ccc` and `#cccccc`) can be recognised as equal with [`Color::same_as`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    text: String,
    rgba: [u8; 4],
}

impl Color {
    /// Parse a CSS color string (hex, rgb(), named colors...)
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = colorgrad::Color::from_html(text).map_err(|e| {
            BivarmapError::invalid_input(format!("Invalid color '{}': {}", text, e))
        })?;
        Ok(Self {
            text: text.to_string(),
            rgba: parsed.to_rgba8(),
        })
    }

    /// The sentinel color for absent observations.
    pub fn no_data() -> Self {
        Self {
            text: NO_DATA_COLOR.to_string(),
            rgba: [0xcc, 0xcc, 0xcc, 0xff],
        }
    }

    /// The color as originally written
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// RGBA components
    pub fn rgba(&self) -> [u8; 4] {
        self.rgba
    }

    /// True when both colors render identically, regardless of notation.
    pub fn same_as(&self, other: &Color) -> bool {
        self.rgba == other.rgba
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Color {
    type Err = BivarmapError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = BivarmapError;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.text
    }
}

/// Parse a list of color strings into a palette.
pub fn parse_palette<S: AsRef<str>>(colors: &[S]) -> Result<Vec<Color>> {
    colors.iter().map(|c| Color::parse(c.as_ref())).collect()
}
