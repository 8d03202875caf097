//! Cell styling types
//!
//! This module contains the types that make up a resolved cell style:
//! - [`Style`] - Complete cell style
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`Border`] - Cell borders
//! - [`Color`] - Color representation

mod border;
mod color;

pub use border::{Border, BorderLineStyle};
pub use color::Color;

/// Complete cell style
///
/// A style is a value: the resolver assigns whole styles to cells and an
/// assignment fully replaces whatever style the cell had before. There is no
/// merging of properties across assignments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Border settings
    pub border: Border,
    /// Horizontal text alignment
    pub alignment: HorizontalAlignment,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font color
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Set fill color (solid fill)
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = FillStyle::Solid { color };
        self
    }

    /// Set the border on all four edges
    pub fn with_border(mut self, line: BorderLineStyle, color: Color) -> Self {
        self.border = Border::outline(line, color);
        self
    }

    /// Set horizontal alignment
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Get the solid fill color, if any
    pub fn fill_color(&self) -> Option<Color> {
        match self.fill {
            FillStyle::None => None,
            FillStyle::Solid { color } => Some(color),
        }
    }
}

/// Font style settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Bold
    pub bold: bool,
    /// Font color
    pub color: Color,
}

impl FontStyle {
    /// Create a bold font in the given color
    pub fn bold(color: Color) -> Self {
        Self { bold: true, color }
    }
}

/// Fill style for cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid { color: Color },
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Default alignment (text left, numbers right)
    #[default]
    General,
    /// Centered
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_style_builder() {
        let style = Style::new()
            .with_bold(true)
            .with_font_color(Color::WHITE)
            .with_fill(Color::rgb(0x44, 0x72, 0xC4))
            .with_border(BorderLineStyle::Thin, Color::rgb(0x44, 0x72, 0xC4))
            .with_alignment(HorizontalAlignment::Center);

        assert!(style.font.bold);
        assert_eq!(style.font.color, Color::WHITE);
        assert_eq!(style.fill_color(), Some(Color::rgb(0x44, 0x72, 0xC4)));
        assert_eq!(style.border.line, BorderLineStyle::Thin);
        assert_eq!(style.alignment, HorizontalAlignment::Center);
    }

    #[test]
    fn test_default_style_is_plain() {
        let style = Style::default();
        assert!(!style.font.bold);
        assert!(style.fill.is_none());
        assert!(style.border.is_none());
        assert_eq!(style.alignment, HorizontalAlignment::General);
    }
}
