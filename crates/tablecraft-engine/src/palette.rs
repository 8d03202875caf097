//! Fixed name-to-color and name-to-line-style maps
//!
//! These cover the string inputs of the border and highlight operations.
//! Unlike themes they are closed enums parsed at the boundary, so an
//! unrecognized name is a single error path.

use crate::error::{Error, Result};
use tablecraft_core::{BorderLineStyle, Color};

/// Highlight colors for conditional formatting
///
/// Light tints chosen to layer visually over prior formatting; not related
/// to the theme palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightColor {
    Red,
    Green,
    Yellow,
    Blue,
}

impl HighlightColor {
    /// Parse a highlight color name (case-insensitive)
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Ok(HighlightColor::Red),
            "green" => Ok(HighlightColor::Green),
            "yellow" => Ok(HighlightColor::Yellow),
            "blue" => Ok(HighlightColor::Blue),
            _ => Err(Error::UnknownHighlightColor(name.to_string())),
        }
    }

    /// The fill color used for this highlight
    pub fn color(&self) -> Color {
        match self {
            HighlightColor::Red => Color::rgb(0xFF, 0xC7, 0xCE),
            HighlightColor::Green => Color::rgb(0xC6, 0xEF, 0xCE),
            HighlightColor::Yellow => Color::rgb(0xFF, 0xEB, 0x9C),
            HighlightColor::Blue => Color::rgb(0xB4, 0xC6, 0xE7),
        }
    }
}

/// Parse a border line style name (case-insensitive)
pub fn border_line_from_name(name: &str) -> Result<BorderLineStyle> {
    match name.to_ascii_lowercase().as_str() {
        "thin" => Ok(BorderLineStyle::Thin),
        "medium" => Ok(BorderLineStyle::Medium),
        "thick" => Ok(BorderLineStyle::Thick),
        "double" => Ok(BorderLineStyle::Double),
        _ => Err(Error::UnknownBorderStyle(name.to_string())),
    }
}

/// Parse a border color name (case-insensitive)
pub fn border_color_from_name(name: &str) -> Result<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::rgb(0x00, 0x00, 0x00)),
        "blue" => Ok(Color::rgb(0x44, 0x72, 0xC4)),
        "red" => Ok(Color::rgb(0xFF, 0x00, 0x00)),
        "green" => Ok(Color::rgb(0x70, 0xAD, 0x47)),
        _ => Err(Error::UnknownBorderColor(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_colors() {
        assert_eq!(
            HighlightColor::parse("RED").unwrap().color(),
            Color::rgb(0xFF, 0xC7, 0xCE)
        );
        assert!(matches!(
            HighlightColor::parse("magenta"),
            Err(Error::UnknownHighlightColor(_))
        ));
    }

    #[test]
    fn test_border_names() {
        assert_eq!(
            border_line_from_name("Thick").unwrap(),
            BorderLineStyle::Thick
        );
        assert_eq!(
            border_color_from_name("black").unwrap(),
            Color::rgb(0, 0, 0)
        );
        assert!(matches!(
            border_line_from_name("dotted"),
            Err(Error::UnknownBorderStyle(_))
        ));
        assert!(matches!(
            border_color_from_name("purple"),
            Err(Error::UnknownBorderColor(_))
        ));
    }
}
