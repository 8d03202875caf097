//! # tablecraft-tools
//!
//! The tool-call surface over the styling engine: four independently
//! invocable operations, each of which validates its string inputs at the
//! boundary, resolves styles for the target range, and applies them through
//! a [`SheetGrid`](tablecraft_engine::SheetGrid).
//!
//! Each invocation is synchronous and request-scoped: it runs one
//! resolution pass to completion or fails with a structured error. Failures
//! partway through a range leave already-styled cells styled; there is no
//! rollback.
//!
//! ## Example
//!
//! ```rust
//! use tablecraft_engine::MemoryGrid;
//! use tablecraft_tools::create_table;
//!
//! let mut grid = MemoryGrid::new();
//! grid.add_sheet("Sheet1");
//!
//! let outcome = create_table(&mut grid, "Sheet1", "Name,Age;John,30", "blue", true).unwrap();
//! assert_eq!(outcome.cells_styled, 4);
//! ```

mod ops;

pub use ops::{
    apply_conditional_formatting, apply_custom_borders, apply_table_formatting, create_table,
    ToolOutcome,
};

// The tool layer fails with engine errors directly
pub use tablecraft_engine::{Error, Result};
