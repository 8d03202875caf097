//! # tablecraft-core
//!
//! Core value types for the tablecraft styling engine:
//! - [`CellAddress`] and [`CellRange`] - A1-style cell addressing
//! - [`Style`] - the immutable bundle of visual properties assigned to a cell
//! - [`Color`] - RGB color representation
//!
//! ## Example
//!
//! ```rust
//! use tablecraft_core::{CellRange, Style, Color, BorderLineStyle};
//!
//! let range = CellRange::parse("A1:D10").unwrap();
//! assert_eq!(range.row_count(), 10);
//!
//! let style = Style::new()
//!     .with_fill(Color::rgb(0x44, 0x72, 0xC4))
//!     .with_border(BorderLineStyle::Thin, Color::BLACK);
//! ```

pub mod address;
pub mod error;
pub mod style;

// Re-exports for convenience
pub use address::{CellAddress, CellRange};
pub use error::{Error, Result};
pub use style::{
    Border, BorderLineStyle, Color, FillStyle, FontStyle, HorizontalAlignment, Style,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
