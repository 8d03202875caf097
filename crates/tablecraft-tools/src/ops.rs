//! The four tool operations

use serde::Serialize;
use tracing::debug;

use tablecraft_core::CellRange;
use tablecraft_engine::{
    border_color_from_name, border_line_from_name, resolver, ColorTheme, Condition, Error,
    HighlightColor, Result, SheetGrid, TableSpec,
};

/// Successful result of a tool operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    /// Human-readable status message
    pub message: String,
    /// Number of cells that received a style
    pub cells_styled: usize,
}

impl ToolOutcome {
    fn new(message: String, cells_styled: usize) -> Self {
        Self {
            message,
            cells_styled,
        }
    }
}

fn ensure_sheet(grid: &dyn SheetGrid, sheet: &str) -> Result<()> {
    if grid.sheet_exists(sheet) {
        Ok(())
    } else {
        Err(Error::SheetNotFound(sheet.to_string()))
    }
}

/// Create a styled table from delimited text
///
/// Appends the table's rows starting at the sheet's first free row, then
/// styles them: header on row 0, banding or plain themed borders below.
pub fn create_table(
    grid: &mut dyn SheetGrid,
    sheet: &str,
    table_text: &str,
    theme_name: &str,
    banding: bool,
) -> Result<ToolOutcome> {
    ensure_sheet(grid, sheet)?;
    let theme = ColorTheme::lookup(theme_name)?;
    let spec = TableSpec::parse(table_text)?;

    debug!(
        sheet,
        theme = theme_name,
        rows = spec.row_count(),
        banding,
        "creating formatted table"
    );

    let mut start_row = 0;
    for (i, row) in spec.rows().iter().enumerate() {
        let landed = grid.append_row(sheet, row);
        if i == 0 {
            start_row = landed;
        }
    }

    let assignments = resolver::resolve_table(&spec, theme, banding, start_row);
    resolver::apply(grid, sheet, &assignments);

    Ok(ToolOutcome::new(
        format!(
            "Formatted table created in sheet '{}' with {} theme",
            sheet, theme_name
        ),
        assignments.len(),
    ))
}

/// Apply table formatting (header + banding) to an existing range
pub fn apply_table_formatting(
    grid: &mut dyn SheetGrid,
    sheet: &str,
    range_address: &str,
    theme_name: &str,
    banding: bool,
) -> Result<ToolOutcome> {
    ensure_sheet(grid, sheet)?;
    let range = CellRange::parse(range_address)?;
    let theme = ColorTheme::lookup(theme_name)?;

    debug!(
        sheet,
        range = %range,
        theme = theme_name,
        banding,
        "applying table formatting"
    );

    let assignments = resolver::resolve_range_formatting(grid, sheet, range, theme, banding);
    resolver::apply(grid, sheet, &assignments);

    Ok(ToolOutcome::new(
        format!(
            "Table formatting applied to range {} in sheet '{}' with {} theme",
            range, sheet, theme_name
        ),
        assignments.len(),
    ))
}

/// Highlight cells in a range whose numeric value satisfies a condition
pub fn apply_conditional_formatting(
    grid: &mut dyn SheetGrid,
    sheet: &str,
    range_address: &str,
    condition_kind: &str,
    operand_text: &str,
    highlight_color: &str,
) -> Result<ToolOutcome> {
    ensure_sheet(grid, sheet)?;
    let range = CellRange::parse(range_address)?;
    let condition = Condition::parse(condition_kind, operand_text)?;
    let color = HighlightColor::parse(highlight_color)?;

    debug!(
        sheet,
        range = %range,
        ?condition,
        "applying conditional formatting"
    );

    let assignments = resolver::resolve_conditional(grid, sheet, range, condition, color);
    resolver::apply(grid, sheet, &assignments);

    Ok(ToolOutcome::new(
        format!(
            "Conditional formatting applied to range {} in sheet '{}'",
            range, sheet
        ),
        assignments.len(),
    ))
}

/// Apply a named border style and color to every existing cell in a range
pub fn apply_custom_borders(
    grid: &mut dyn SheetGrid,
    sheet: &str,
    range_address: &str,
    border_style: &str,
    border_color: &str,
) -> Result<ToolOutcome> {
    ensure_sheet(grid, sheet)?;
    let range = CellRange::parse(range_address)?;
    let line = border_line_from_name(border_style)?;
    let color = border_color_from_name(border_color)?;

    debug!(
        sheet,
        range = %range,
        style = border_style,
        color = border_color,
        "applying custom borders"
    );

    let assignments = resolver::resolve_borders(grid, sheet, range, line, color);
    resolver::apply(grid, sheet, &assignments);

    Ok(ToolOutcome::new(
        format!(
            "Custom borders applied to range {} in sheet '{}'",
            range, sheet
        ),
        assignments.len(),
    ))
}
