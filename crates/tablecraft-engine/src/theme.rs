//! Color theme registry
//!
//! Themes are the named 4-color palettes used by table formatting: a header
//! fill, two banding fills, and a border color. The registry is built once at
//! first use and never mutated.

use crate::error::{Error, Result};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use tablecraft_core::Color;

/// A named 4-color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    /// Header row fill
    pub header: Color,
    /// First banding fill (odd data rows)
    pub band_a: Color,
    /// Second banding fill (even data rows)
    pub band_b: Color,
    /// Border color
    pub border: Color,
}

static THEMES: Lazy<AHashMap<&'static str, ColorTheme>> = Lazy::new(|| {
    let mut themes = AHashMap::new();
    themes.insert(
        "blue",
        ColorTheme {
            header: Color::rgb(0x44, 0x72, 0xC4),
            band_a: Color::rgb(0xD9, 0xE1, 0xF2),
            band_b: Color::rgb(0xFF, 0xFF, 0xFF),
            border: Color::rgb(0x44, 0x72, 0xC4),
        },
    );
    themes.insert(
        "green",
        ColorTheme {
            header: Color::rgb(0x70, 0xAD, 0x47),
            band_a: Color::rgb(0xE2, 0xEF, 0xDA),
            band_b: Color::rgb(0xFF, 0xFF, 0xFF),
            border: Color::rgb(0x70, 0xAD, 0x47),
        },
    );
    themes.insert(
        "orange",
        ColorTheme {
            header: Color::rgb(0xFF, 0xC0, 0x00),
            band_a: Color::rgb(0xFF, 0xF2, 0xCC),
            band_b: Color::rgb(0xFF, 0xFF, 0xFF),
            border: Color::rgb(0xFF, 0xC0, 0x00),
        },
    );
    themes
});

impl ColorTheme {
    /// Look up a theme by name (case-insensitive)
    ///
    /// Unknown names are an error; callers wanting a default must substitute
    /// one themselves.
    pub fn lookup(name: &str) -> Result<&'static ColorTheme> {
        THEMES
            .get(name.to_ascii_lowercase().as_str())
            .ok_or_else(|| Error::UnknownTheme(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let blue = ColorTheme::lookup("blue").unwrap();
        assert_eq!(ColorTheme::lookup("Blue").unwrap(), blue);
        assert_eq!(ColorTheme::lookup("BLUE").unwrap(), blue);
        assert_eq!(blue.header, Color::rgb(0x44, 0x72, 0xC4));
        assert_eq!(blue.band_a, Color::rgb(0xD9, 0xE1, 0xF2));
        assert_eq!(blue.band_b, Color::rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_builtin_themes() {
        assert!(ColorTheme::lookup("green").is_ok());
        assert!(ColorTheme::lookup("orange").is_ok());
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        assert!(matches!(
            ColorTheme::lookup("purple"),
            Err(Error::UnknownTheme(_))
        ));
    }
}
