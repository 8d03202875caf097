//! Style resolution
//!
//! Walks a target range and decides, for every cell, which style wins:
//! header, banding, conditional highlight, or plain border. The output is a
//! per-cell assignment list; applying an assignment fully replaces the
//! cell's previous style. Combined effects must be requested in a single
//! operation - there is no merging across operations.

use tablecraft_core::{BorderLineStyle, CellAddress, CellRange, Color, HorizontalAlignment, Style};

use crate::condition::Condition;
use crate::grid::SheetGrid;
use crate::palette::HighlightColor;
use crate::table::TableSpec;
use crate::theme::ColorTheme;

/// A resolved (cell, style) pair
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Target cell
    pub address: CellAddress,
    /// The full style the cell ends up with
    pub style: Style,
}

impl Assignment {
    fn new(address: CellAddress, style: Style) -> Self {
        Self { address, style }
    }
}

/// Header row style: theme header fill, bold white centered font, themed
/// thin border.
pub fn header_style(theme: &ColorTheme) -> Style {
    Style::new()
        .with_bold(true)
        .with_font_color(Color::WHITE)
        .with_fill(theme.header)
        .with_border(BorderLineStyle::Thin, theme.border)
        .with_alignment(HorizontalAlignment::Center)
}

/// Banded data row style: band fill plus themed thin border.
pub fn band_style(theme: &ColorTheme, fill: Color) -> Style {
    Style::new()
        .with_fill(fill)
        .with_border(BorderLineStyle::Thin, theme.border)
}

/// Unbanded data row style: themed thin border, no fill.
pub fn plain_border_style(theme: &ColorTheme) -> Style {
    Style::new().with_border(BorderLineStyle::Thin, theme.border)
}

/// Conditional highlight style: a solid fill and nothing else, so it layers
/// visually over whatever formatting the range had.
pub fn highlight_style(color: HighlightColor) -> Style {
    Style::new().with_fill(color.color())
}

/// Custom border style: the named line on all four edges, no fill or font.
pub fn custom_border_style(line: BorderLineStyle, color: Color) -> Style {
    Style::new().with_border(line, color)
}

/// The banding style for a data row, given its 0-based offset from the
/// header row. Odd offsets get bandA, even offsets bandB.
fn banded_row_style(theme: &ColorTheme, offset: u32) -> Style {
    if offset % 2 == 1 {
        band_style(theme, theme.band_a)
    } else {
        band_style(theme, theme.band_b)
    }
}

/// Resolve styles for a table built from data (mode a)
///
/// The table occupies columns starting at A and rows starting at
/// `start_row`; each row's extent follows its own cell count, so ragged
/// rows produce shorter styled spans.
pub fn resolve_table(
    spec: &TableSpec,
    theme: &ColorTheme,
    banding: bool,
    start_row: u32,
) -> Vec<Assignment> {
    let mut assignments = Vec::new();

    for (i, row) in spec.rows().iter().enumerate() {
        let style = if i == 0 {
            header_style(theme)
        } else if banding {
            banded_row_style(theme, i as u32)
        } else {
            plain_border_style(theme)
        };

        for col in 0..row.len() {
            assignments.push(Assignment::new(
                CellAddress::new(start_row + i as u32, col as u16),
                style.clone(),
            ));
        }
    }

    assignments
}

/// Resolve table formatting over an existing range (mode b)
///
/// The range's top row gets the header style; rows below alternate banding
/// relative to the top of the range, or get a uniform themed border when
/// banding is off. Cells that do not exist in the sheet are skipped, not
/// created.
pub fn resolve_range_formatting(
    grid: &dyn SheetGrid,
    sheet: &str,
    range: CellRange,
    theme: &ColorTheme,
    banding: bool,
) -> Vec<Assignment> {
    let mut assignments = Vec::new();

    for row in range.rows() {
        let offset = row - range.start.row;
        let style = if offset == 0 {
            header_style(theme)
        } else if banding {
            banded_row_style(theme, offset)
        } else {
            plain_border_style(theme)
        };

        for col in range.cols() {
            let addr = CellAddress::new(row, col);
            if grid.cell_exists(sheet, addr) {
                assignments.push(Assignment::new(addr, style.clone()));
            }
        }
    }

    assignments
}

/// Resolve conditional highlighting over a range (mode c)
///
/// Only existing numeric cells are evaluated; matches get the solid
/// highlight fill, everything else is skipped silently.
pub fn resolve_conditional(
    grid: &dyn SheetGrid,
    sheet: &str,
    range: CellRange,
    condition: Condition,
    color: HighlightColor,
) -> Vec<Assignment> {
    let style = highlight_style(color);

    range
        .cells()
        .filter_map(|addr| {
            let value = grid.numeric_value(sheet, addr)?;
            condition
                .matches(value)
                .then(|| Assignment::new(addr, style.clone()))
        })
        .collect()
}

/// Resolve custom borders over a range (mode d)
///
/// Every existing cell gets the border style; repeated application is
/// idempotent since each assignment is a full replacement.
pub fn resolve_borders(
    grid: &dyn SheetGrid,
    sheet: &str,
    range: CellRange,
    line: BorderLineStyle,
    color: Color,
) -> Vec<Assignment> {
    let style = custom_border_style(line, color);

    range
        .cells()
        .filter(|addr| grid.cell_exists(sheet, *addr))
        .map(|addr| Assignment::new(addr, style.clone()))
        .collect()
}

/// Write an assignment list to the grid
pub fn apply(grid: &mut dyn SheetGrid, sheet: &str, assignments: &[Assignment]) {
    for assignment in assignments {
        grid.set_cell_style(sheet, assignment.address, &assignment.style);
    }
}
