use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and rewrite PLUTO grid, output catalog and pluto.ini files.
#[derive(Parser)]
#[command(
    name = "pluto-tools",
    version,
    about = "Inspect and rewrite PLUTO grid, output catalog and pluto.ini files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML configuration file with tool defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Summarise a grid file and optionally rewrite it.
    Grid(GridArgs),
    /// List the records of an output catalog (dbl.out, flt.out, ...).
    Outputs(OutputsArgs),
    /// Query or normalise a pluto.ini file.
    Ini(IniArgs),
    /// Print the code-unit scalars.
    Units,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Grid file to read.
    pub input: PathBuf,

    /// Write the grid to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output layout: "current" (PLUTO 4) or "legacy" (PLUTO 3).
    #[arg(long)]
    pub format: Option<String>,

    /// Geometry recorded in the output header.
    #[arg(long)]
    pub geometry: Option<String>,
}

/// Arguments for the `outputs` subcommand.
#[derive(clap::Args)]
pub struct OutputsArgs {
    /// Output catalog to read.
    pub catalog: PathBuf,

    /// Only list outputs that contain this variable.
    #[arg(long)]
    pub var: Option<String>,
}

/// Arguments for the `ini` subcommand.
#[derive(clap::Args)]
pub struct IniArgs {
    /// Configuration file to read.
    pub input: PathBuf,

    /// Print only this section.
    #[arg(short, long)]
    pub section: Option<String>,

    /// Print only this key of `--section`.
    #[arg(short, long, requires = "section")]
    pub key: Option<String>,

    /// Write the normalised document to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
