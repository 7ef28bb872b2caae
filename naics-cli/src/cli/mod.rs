//! Command-line interface definitions

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config;
use crate::naics::excel::SheetLayout;

#[derive(Parser)]
#[command(
    name = "naics-cli",
    version,
    about = "Generate and query the NAICS facility lookup tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate the lookup tables from the classification workbook
    Generate(GenerateArgs),
    /// Validate a sector/category/type combination and print the full code
    Resolve(ResolveArgs),
    /// Print the sector > category > type chain for a facility type code
    Describe(DescribeArgs),
}

/// Which artifacts the generate command writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Generated Rust source module only
    Module,
    /// JSON data file only
    Json,
    /// Both artifacts
    Both,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the NAICS classification workbook
    #[arg(long)]
    pub workbook: Option<PathBuf>,

    /// Worksheet to read
    #[arg(long)]
    pub sheet: Option<String>,

    /// Physical layout of the worksheet
    #[arg(long, value_enum)]
    pub layout: Option<SheetLayout>,

    /// Which artifacts to write
    #[arg(long, value_enum, default_value = "both")]
    pub format: OutputFormat,

    /// Where to write the JSON data file
    #[arg(long)]
    pub data_out: Option<PathBuf>,

    /// Where to write the generated Rust module
    #[arg(long)]
    pub module_out: Option<PathBuf>,

    /// TOML config file overriding the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep titles exactly as they appear in the workbook
    #[arg(long)]
    pub no_clean_titles: bool,

    /// Keep source row order instead of sorting each table by title
    #[arg(long)]
    pub no_sort: bool,

    /// Use the canonical display titles for sectors instead of workbook titles
    #[arg(long)]
    pub canonical_sector_titles: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Sector code (2 digits, or "31-33" for manufacturing)
    pub sector: String,

    /// Category code (3 digits)
    pub category: String,

    /// Facility type code (6 digits)
    #[arg(value_name = "TYPE")]
    pub type_code: String,

    /// Generated JSON data file to query
    #[arg(long, default_value = config::DEFAULT_DATA_OUT)]
    pub data: PathBuf,
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Facility type code (6 digits)
    pub code: String,

    /// Generated JSON data file to query
    #[arg(long, default_value = config::DEFAULT_DATA_OUT)]
    pub data: PathBuf,
}
