//! Table data parsing

use crate::error::{Error, Result};

/// Separates rows in table text input
pub const ROW_DELIMITER: char = ';';

/// Separates cells within a row
pub const CELL_DELIMITER: char = ',';

/// Parsed table data
///
/// Row 0 is always the header row. Rows may have different lengths; shorter
/// rows simply produce fewer cells, with no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    rows: Vec<Vec<String>>,
}

impl TableSpec {
    /// Parse table text ("Name,Age;John,30;Jane,25") into rows of cells
    ///
    /// Cells are trimmed of surrounding whitespace. Input that yields no
    /// rows is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<String>> = text
            .split(ROW_DELIMITER)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.split(CELL_DELIMITER)
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect();

        if rows.is_empty() {
            return Err(Error::EmptyTable);
        }

        Ok(Self { rows })
    }

    /// The parsed rows, header first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows, including the header
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse() {
        let spec = TableSpec::parse("Name,Age;John,30;Jane,25").unwrap();
        assert_eq!(spec.row_count(), 3);
        assert_eq!(spec.rows()[0], vec!["Name", "Age"]);
        assert_eq!(spec.rows()[1], vec!["John", "30"]);
        assert_eq!(spec.rows()[2], vec!["Jane", "25"]);
    }

    #[test]
    fn test_parse_trims_cells() {
        let spec = TableSpec::parse("Name , Age ; John , 30").unwrap();
        assert_eq!(spec.rows()[0], vec!["Name", "Age"]);
        assert_eq!(spec.rows()[1], vec!["John", "30"]);
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let spec = TableSpec::parse("A,B,C;1;2,3").unwrap();
        assert_eq!(spec.rows()[1], vec!["1"]);
        assert_eq!(spec.max_width(), 3);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(TableSpec::parse(""), Err(Error::EmptyTable)));
        assert!(matches!(TableSpec::parse(";;"), Err(Error::EmptyTable)));
    }

    #[test]
    fn test_single_cell() {
        let spec = TableSpec::parse("Total").unwrap();
        assert_eq!(spec.row_count(), 1);
        assert_eq!(spec.rows()[0], vec!["Total"]);
    }
}
