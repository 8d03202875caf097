//! Grid adapter: the interface the engine needs from its backing store
//!
//! The resolver never touches file I/O. Anything that can answer these five
//! questions - a real workbook codec, an in-memory grid, a mock - can back
//! the engine.

use std::collections::BTreeMap;

use tablecraft_core::{CellAddress, Style};

/// Read/write access to a workbook's cells
///
/// Cell positions use the engine's 0-based [`CellAddress`]. Implementations
/// must not create cells in [`set_cell_style`](SheetGrid::set_cell_style);
/// styling a missing cell is a no-op, which is how the resolver's "skip
/// missing cells" semantics reach the backing store.
pub trait SheetGrid {
    /// Whether a sheet with this name exists
    fn sheet_exists(&self, sheet: &str) -> bool;

    /// Whether the cell exists in the sheet
    fn cell_exists(&self, sheet: &str, addr: CellAddress) -> bool;

    /// The cell's numeric value, or `None` if missing or non-numeric
    fn numeric_value(&self, sheet: &str, addr: CellAddress) -> Option<f64>;

    /// Replace the cell's style (full replacement, not a patch)
    fn set_cell_style(&mut self, sheet: &str, addr: CellAddress, style: &Style);

    /// Append a row of text cells after the last occupied row, returning the
    /// row index it landed on
    fn append_row(&mut self, sheet: &str, cells: &[String]) -> u32;
}

/// A cell value in the in-memory grid
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GridValue {
    /// Numeric cell
    Number(f64),
    /// Text cell
    Text(String),
}

impl GridValue {
    /// The numeric value, if this is a numeric cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            GridValue::Number(n) => Some(*n),
            GridValue::Text(_) => None,
        }
    }
}

/// A single cell: a value plus the style most recently assigned to it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Cell value
    pub value: GridValue,
    /// Last assigned style, if any
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub style: Option<Style>,
}

/// A single sheet of the in-memory grid
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySheet {
    cells: BTreeMap<CellAddress, GridCell>,
}

impl MemorySheet {
    /// Index of the last occupied row, if the sheet has any cells
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().map(|addr| addr.row).max()
    }

    /// Get a cell
    pub fn cell(&self, addr: CellAddress) -> Option<&GridCell> {
        self.cells.get(&addr)
    }

    /// Iterate over all cells in address order
    pub fn cells(&self) -> impl Iterator<Item = (&CellAddress, &GridCell)> {
        self.cells.iter()
    }

    fn set_value(&mut self, addr: CellAddress, value: GridValue) {
        self.cells
            .entry(addr)
            .and_modify(|cell| cell.value = value.clone())
            .or_insert(GridCell { value, style: None });
    }
}

/// Map-backed [`SheetGrid`] implementation
///
/// The reference backing store: used by the CLI (persisted as JSON via the
/// `serde` feature) and by tests. Sheets keep insertion order, like workbook
/// tabs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryGrid {
    sheets: Vec<(String, MemorySheet)>,
}

impl MemoryGrid {
    /// Create an empty grid with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty sheet; replaces any existing sheet of the same name
    pub fn add_sheet<S: Into<String>>(&mut self, name: S) {
        let name = name.into();
        self.remove_sheet(&name);
        self.sheets.push((name, MemorySheet::default()));
    }

    /// Remove a sheet by name, returning whether it existed
    pub fn remove_sheet(&mut self, name: &str) -> bool {
        let before = self.sheets.len();
        self.sheets.retain(|(n, _)| n != name);
        self.sheets.len() != before
    }

    /// Sheet names in tab order
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|(name, _)| name.as_str())
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&MemorySheet> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sheet)| sheet)
    }

    fn sheet_mut(&mut self, name: &str) -> Option<&mut MemorySheet> {
        self.sheets
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, sheet)| sheet)
    }

    /// Set a text cell
    pub fn set_text<S: Into<String>>(&mut self, sheet: &str, addr: CellAddress, text: S) {
        if let Some(sheet) = self.sheet_mut(sheet) {
            sheet.set_value(addr, GridValue::Text(text.into()));
        }
    }

    /// Set a numeric cell
    pub fn set_number(&mut self, sheet: &str, addr: CellAddress, value: f64) {
        if let Some(sheet) = self.sheet_mut(sheet) {
            sheet.set_value(addr, GridValue::Number(value));
        }
    }

    /// The style last assigned to a cell, if any
    pub fn cell_style(&self, sheet: &str, addr: CellAddress) -> Option<&Style> {
        self.sheet(sheet)?.cell(addr)?.style.as_ref()
    }

    /// The value of a cell, if it exists
    pub fn cell_value(&self, sheet: &str, addr: CellAddress) -> Option<&GridValue> {
        self.sheet(sheet).and_then(|s| s.cell(addr)).map(|c| &c.value)
    }
}

impl SheetGrid for MemoryGrid {
    fn sheet_exists(&self, sheet: &str) -> bool {
        self.sheet(sheet).is_some()
    }

    fn cell_exists(&self, sheet: &str, addr: CellAddress) -> bool {
        self.sheet(sheet)
            .map(|s| s.cell(addr).is_some())
            .unwrap_or(false)
    }

    fn numeric_value(&self, sheet: &str, addr: CellAddress) -> Option<f64> {
        self.sheet(sheet)?.cell(addr)?.value.as_number()
    }

    fn set_cell_style(&mut self, sheet: &str, addr: CellAddress, style: &Style) {
        if let Some(sheet) = self.sheet_mut(sheet) {
            // Missing cells are skipped, not created
            if let Some(cell) = sheet.cells.get_mut(&addr) {
                cell.style = Some(style.clone());
            }
        }
    }

    fn append_row(&mut self, sheet: &str, cells: &[String]) -> u32 {
        let Some(sheet) = self.sheet_mut(sheet) else {
            return 0;
        };

        let row = sheet.last_row().map(|r| r + 1).unwrap_or(0);
        for (col, text) in cells.iter().enumerate() {
            sheet.set_value(
                CellAddress::new(row, col as u16),
                GridValue::Text(text.clone()),
            );
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tablecraft_core::Color;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_sheet_management() {
        let mut grid = MemoryGrid::new();
        assert!(!grid.sheet_exists("Sheet1"));

        grid.add_sheet("Sheet1");
        grid.add_sheet("Data");
        assert!(grid.sheet_exists("Sheet1"));
        assert_eq!(grid.sheet_count(), 2);
        assert_eq!(grid.sheet_names().collect::<Vec<_>>(), ["Sheet1", "Data"]);

        assert!(grid.remove_sheet("Data"));
        assert!(!grid.remove_sheet("Data"));
    }

    #[test]
    fn test_append_row_lands_after_last_occupied() {
        let mut grid = MemoryGrid::new();
        grid.add_sheet("Sheet1");

        let row = grid.append_row("Sheet1", &["a".into(), "b".into()]);
        assert_eq!(row, 0);

        grid.set_number("Sheet1", addr("A5"), 1.0);
        let row = grid.append_row("Sheet1", &["c".into()]);
        assert_eq!(row, 5);
    }

    #[test]
    fn test_numeric_value_filters_text() {
        let mut grid = MemoryGrid::new();
        grid.add_sheet("Sheet1");
        grid.set_number("Sheet1", addr("A1"), 42.0);
        grid.set_text("Sheet1", addr("B1"), "42");

        assert_eq!(grid.numeric_value("Sheet1", addr("A1")), Some(42.0));
        assert_eq!(grid.numeric_value("Sheet1", addr("B1")), None);
        assert_eq!(grid.numeric_value("Sheet1", addr("C1")), None);
    }

    #[test]
    fn test_styling_missing_cell_is_a_noop() {
        let mut grid = MemoryGrid::new();
        grid.add_sheet("Sheet1");

        let style = Style::new().with_fill(Color::RED);
        grid.set_cell_style("Sheet1", addr("A1"), &style);
        assert!(!grid.cell_exists("Sheet1", addr("A1")));

        grid.set_text("Sheet1", addr("A1"), "x");
        grid.set_cell_style("Sheet1", addr("A1"), &style);
        assert_eq!(grid.cell_style("Sheet1", addr("A1")), Some(&style));
    }
}
