//! Command line surface.

pub mod setup;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatting::ColorMode;
use crate::source::SelectionCriteria;

pub use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "autocompare")]
#[command(about = "Side-by-side vehicle comparison and recommendations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that renders a comparison
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to searching for .autocompare.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Plain output: no colors, no unicode
    #[arg(long)]
    pub plain: bool,

    /// Color output: auto, always or never (overrides config and environment)
    #[arg(long, value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,
}

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    ColorMode::parse(s)
        .ok_or_else(|| format!("Invalid color mode '{}'. Expected auto, always or never", s))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two vehicle records stored as JSON files
    Compare {
        /// First vehicle record
        first: PathBuf,

        /// Second vehicle record
        second: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Look up two vehicles in a JSON catalog and compare them
    Lookup {
        /// Catalog file: a JSON array of vehicle records
        #[arg(long)]
        catalog: PathBuf,

        /// First selection as BRAND/MODEL/YEAR
        #[arg(long)]
        first: SelectionCriteria,

        /// Second selection as BRAND/MODEL/YEAR
        #[arg(long)]
        second: SelectionCriteria,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Compare the two built-in demo vehicles
    Demo {
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Project the value of a vehicle over the coming years
    Project {
        /// List price
        #[arg(long)]
        price: f64,

        /// Depreciation already suffered, percent of list price
        #[arg(long, default_value = "0")]
        depreciation: f64,

        /// Number of years to project
        #[arg(long, default_value = "5")]
        years: u32,

        /// Kilometres driven per year
        #[arg(long = "annual-km", default_value = "15000")]
        annual_km: f64,

        /// Kilometres already on the odometer
        #[arg(long = "current-km", default_value = "0")]
        current_km: f64,

        /// Starting year (defaults to the current year)
        #[arg(long = "base-year")]
        base_year: Option<i32>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Initialize a configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
