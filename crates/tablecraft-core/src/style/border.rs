//! Border style types

use super::Color;

/// Border settings for a cell
///
/// The styling engine always draws the same line on all four edges, so a
/// border is a single line style plus a color rather than per-edge settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// Line style
    pub line: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl Border {
    /// Create a border with no line
    pub fn none() -> Self {
        Self::default()
    }

    /// Create an outline border with the given line style and color
    pub fn outline(line: BorderLineStyle, color: Color) -> Self {
        Self { line, color }
    }

    /// Create a thin border in the given color
    pub fn thin(color: Color) -> Self {
        Self::outline(BorderLineStyle::Thin, color)
    }

    /// Check if no border is drawn
    pub fn is_none(&self) -> bool {
        self.line == BorderLineStyle::None
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Double line
    Double,
}
