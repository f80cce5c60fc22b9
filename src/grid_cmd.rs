//! Grid command: summarise a grid file and optionally rewrite it.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pluto_io::{Axis, read_grid, write_grid};

use crate::cli::GridArgs;
use crate::config::ToolsConfig;
use crate::convert;

/// Run the grid command.
pub fn run(args: GridArgs, config: &ToolsConfig) -> Result<()> {
    let _cmd = info_span!("grid").entered();

    // Resolve the writer settings first so a bad flag fails before any I/O.
    let writer_cfg = convert::build_grid_writer_config(
        &config.grid,
        args.format.as_deref(),
        args.geometry.as_deref(),
    )?;

    info!(path = %args.input.display(), "reading grid");
    let grid = read_grid(&args.input)
        .with_context(|| format!("failed to read grid: {}", args.input.display()))?;

    println!("dimensions: {}", grid.ndim());
    for axis in Axis::ALL {
        let centers = grid.axis(axis);
        let (left, right) = grid.edges(axis);
        match grid.spacing(axis) {
            Some(dx) => println!(
                "{axis}: {:>6} point(s)  [{:.6e}, {:.6e}]  dx = {dx:.6e}",
                centers.len(),
                left[0],
                right[right.len() - 1],
            ),
            None => println!("{axis}: {:>6} point(s)  (degenerate)", centers.len()),
        }
    }

    if let Some(output) = &args.output {
        write_grid(output, &grid, &writer_cfg)
            .with_context(|| format!("failed to write grid: {}", output.display()))?;
        info!(
            path = %output.display(),
            format = ?writer_cfg.format(),
            geometry = %writer_cfg.geometry(),
            "grid rewritten"
        );
    }

    Ok(())
}
