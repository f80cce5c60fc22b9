mod cli;
mod config;
mod convert;
mod grid_cmd;
mod ini_cmd;
mod logging;
mod outputs_cmd;
mod units_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Grid(args) => grid_cmd::run(args, &config),
        Command::Outputs(args) => outputs_cmd::run(args),
        Command::Ini(args) => ini_cmd::run(args),
        Command::Units => units_cmd::run(),
    }
}
