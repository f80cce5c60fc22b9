//! Outputs command: list the records of an output catalog.

use anyhow::{Context, Result};
use tracing::info;

use pluto_io::read_output_log;

use crate::cli::OutputsArgs;

/// Run the outputs command.
pub fn run(args: OutputsArgs) -> Result<()> {
    let log = read_output_log(&args.catalog)
        .with_context(|| format!("failed to read output catalog: {}", args.catalog.display()))?;

    println!(
        "{:>6}  {:>14}  {:>14}  {:<16}  variables",
        "index", "time", "time [yr]", "format"
    );
    let mut shown = 0usize;
    for (index, rec) in log.iter() {
        if let Some(var) = &args.var
            && !rec.has_variable(var)
        {
            continue;
        }
        println!(
            "{index:>6}  {:>14.6e}  {:>14.6e}  {:<16}  {}",
            rec.time(),
            rec.time_years(),
            rec.format(),
            rec.variables().join(" ")
        );
        shown += 1;
    }

    info!(n_records = log.len(), n_shown = shown, "listed outputs");
    Ok(())
}
