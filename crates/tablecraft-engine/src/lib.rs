//! # tablecraft-engine
//!
//! The tabular style-resolution engine: turns declarative styling requests
//! (theme name, conditional rule, border spec, banding toggle) into a
//! deterministic per-cell assignment of [`Style`](tablecraft_core::Style)
//! values over a target range.
//!
//! The engine never touches file I/O; it reads and writes cells through the
//! [`SheetGrid`] trait, which any backing store can implement.
//!
//! ## Example
//!
//! ```rust
//! use tablecraft_engine::{resolver, ColorTheme, MemoryGrid, SheetGrid, TableSpec};
//!
//! let mut grid = MemoryGrid::new();
//! grid.add_sheet("Sheet1");
//!
//! let spec = TableSpec::parse("Name,Age;John,30").unwrap();
//! let theme = ColorTheme::lookup("blue").unwrap();
//! let start = grid.append_row("Sheet1", &["Name".into(), "Age".into()]);
//! grid.append_row("Sheet1", &["John".into(), "30".into()]);
//!
//! let assignments = resolver::resolve_table(&spec, theme, true, start);
//! resolver::apply(&mut grid, "Sheet1", &assignments);
//! ```

pub mod condition;
pub mod error;
pub mod grid;
pub mod palette;
pub mod resolver;
pub mod table;
pub mod theme;

// Re-exports for convenience
pub use condition::Condition;
pub use error::{Error, Result};
pub use grid::{GridCell, GridValue, MemoryGrid, MemorySheet, SheetGrid};
pub use palette::{border_color_from_name, border_line_from_name, HighlightColor};
pub use resolver::Assignment;
pub use table::{TableSpec, CELL_DELIMITER, ROW_DELIMITER};
pub use theme::ColorTheme;
