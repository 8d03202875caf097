//! Tablecraft CLI - applies styling operations to JSON workbooks
//!
//! The workbook format is a JSON serialization of the engine's in-memory
//! grid, standing in for a real document codec so the styling operations can
//! be exercised end to end from a shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use tablecraft_core::CellAddress;
use tablecraft_engine::MemoryGrid;
use tablecraft_tools::{
    apply_conditional_formatting, apply_custom_borders, apply_table_formatting, create_table,
};

#[derive(Parser)]
#[command(name = "tablecraft")]
#[command(author, version, about = "Spreadsheet styling tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new workbook file with one empty sheet
    New {
        /// Workbook file to create
        file: PathBuf,

        /// Name of the initial sheet
        #[arg(short, long, default_value = "Sheet1")]
        sheet: String,
    },

    /// Set a single cell value (numeric if it parses as a number)
    Set {
        /// Workbook file
        file: PathBuf,

        /// Sheet name
        sheet: String,

        /// Cell address (e.g., B2)
        address: String,

        /// Cell value
        value: String,
    },

    /// Create a styled table from delimited text ("Name,Age;John,30")
    Table {
        /// Workbook file
        file: PathBuf,

        /// Sheet name
        sheet: String,

        /// Table data: cells separated by commas, rows by semicolons
        data: String,

        /// Color theme (blue, green, orange)
        #[arg(short, long, default_value = "blue")]
        theme: String,

        /// Disable alternating row colors
        #[arg(long)]
        no_banding: bool,
    },

    /// Apply table formatting to an existing range
    Format {
        /// Workbook file
        file: PathBuf,

        /// Sheet name
        sheet: String,

        /// Target range (e.g., A1:D10)
        range: String,

        /// Color theme (blue, green, orange)
        #[arg(short, long, default_value = "blue")]
        theme: String,

        /// Disable alternating row colors
        #[arg(long)]
        no_banding: bool,
    },

    /// Highlight cells matching a numeric condition
    Highlight {
        /// Workbook file
        file: PathBuf,

        /// Sheet name
        sheet: String,

        /// Target range (e.g., A1:D10)
        range: String,

        /// Condition kind (greater_than, less_than, equal_to, between)
        condition: String,

        /// Condition value(s), comma-separated for 'between'
        value: String,

        /// Highlight color (red, green, yellow, blue)
        #[arg(short, long, default_value = "yellow")]
        color: String,
    },

    /// Apply custom borders to a range
    Borders {
        /// Workbook file
        file: PathBuf,

        /// Sheet name
        sheet: String,

        /// Target range (e.g., A1:D10)
        range: String,

        /// Border style (thin, medium, thick, double)
        #[arg(short, long, default_value = "thin")]
        style: String,

        /// Border color (black, blue, red, green)
        #[arg(short, long, default_value = "black")]
        color: String,
    },

    /// Show the sheets in a workbook
    Info {
        /// Workbook file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::New { file, sheet } => {
            let mut grid = MemoryGrid::new();
            grid.add_sheet(sheet);
            save_grid(&file, &grid)?;
            println!("Workbook created at {}", file.display());
            Ok(())
        }
        Commands::Set {
            file,
            sheet,
            address,
            value,
        } => {
            let mut grid = load_grid(&file)?;
            let addr = CellAddress::parse(&address)?;
            match value.parse::<f64>() {
                Ok(number) => grid.set_number(&sheet, addr, number),
                Err(_) => grid.set_text(&sheet, addr, value),
            }
            save_grid(&file, &grid)?;
            println!("Set {} in sheet '{}'", address, sheet);
            Ok(())
        }
        Commands::Table {
            file,
            sheet,
            data,
            theme,
            no_banding,
        } => with_grid(&file, |grid| {
            create_table(grid, &sheet, &data, &theme, !no_banding)
        }),
        Commands::Format {
            file,
            sheet,
            range,
            theme,
            no_banding,
        } => with_grid(&file, |grid| {
            apply_table_formatting(grid, &sheet, &range, &theme, !no_banding)
        }),
        Commands::Highlight {
            file,
            sheet,
            range,
            condition,
            value,
            color,
        } => with_grid(&file, |grid| {
            apply_conditional_formatting(grid, &sheet, &range, &condition, &value, &color)
        }),
        Commands::Borders {
            file,
            sheet,
            range,
            style,
            color,
        } => with_grid(&file, |grid| {
            apply_custom_borders(grid, &sheet, &range, &style, &color)
        }),
        Commands::Info { file } => {
            let grid = load_grid(&file)?;
            for name in grid.sheet_names() {
                let cells = grid.sheet(name).map(|s| s.cells().count()).unwrap_or(0);
                println!("{}: {} cells", name, cells);
            }
            Ok(())
        }
    }
}

/// Load, run one styling operation, save, and print its outcome
fn with_grid<F>(file: &Path, op: F) -> Result<()>
where
    F: FnOnce(&mut MemoryGrid) -> tablecraft_tools::Result<tablecraft_tools::ToolOutcome>,
{
    let mut grid = load_grid(file)?;
    let outcome = op(&mut grid)?;
    save_grid(file, &grid)?;
    println!("{} ({} cells styled)", outcome.message, outcome.cells_styled);
    Ok(())
}

fn load_grid(path: &Path) -> Result<MemoryGrid> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Invalid workbook '{}'", path.display()))
}

fn save_grid(path: &Path, grid: &MemoryGrid) -> Result<()> {
    let data = serde_json::to_string_pretty(grid)?;
    fs::write(path, data).with_context(|| format!("Failed to write '{}'", path.display()))
}
