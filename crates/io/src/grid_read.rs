//! Grid file reader (`grid.out`).

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::grid::{Axis, Grid};

/// Row layout of one grid data line, decided by its field count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowLayout {
    /// `index left right` (PLUTO 4).
    Current,
    /// `index left center right width` (PLUTO 3).
    Legacy,
}

impl RowLayout {
    fn detect(n_fields: usize) -> Option<Self> {
        match n_fields {
            3 => Some(Self::Current),
            5 => Some(Self::Legacy),
            _ => None,
        }
    }
}

/// Read a PLUTO grid file into cell-center arrays.
///
/// Leading `#` comment lines are skipped. Each axis block is a point count
/// followed by that many rows; rows with 3 fields yield the midpoint of the
/// two edges, rows with 5 fields yield the stored center.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] / [`IoError::Io`] if the file cannot be
/// read, [`IoError::Malformed`] for a bad count line or data row, and
/// [`IoError::Truncated`] if the file ends inside an axis block.
pub fn read_grid(path: &Path) -> Result<Grid, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::from_io(path, e))?;
    let grid = parse_grid(&text, path)?;
    info!(
        path = %path.display(),
        shape = ?grid.shape(),
        ndim = grid.ndim(),
        "grid loaded"
    );
    Ok(grid)
}

/// Parse grid file contents. `path` is only used in error messages.
pub(crate) fn parse_grid(text: &str, path: &Path) -> Result<Grid, IoError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .skip_while(|(_, line)| line.starts_with('#'));

    let mut axes: [Vec<f64>; 3] = Default::default();

    for axis in Axis::ALL {
        let Some((count_line, raw)) = lines.next() else {
            return Err(IoError::Truncated {
                path: path.to_path_buf(),
                axis,
                expected: 1,
                got: 0,
            });
        };
        let n = parse_count(raw, count_line, axis, path)?;

        // The count is untrusted; grow as rows are actually read.
        let mut centers = Vec::new();
        for got in 0..n {
            let Some((line_no, row)) = lines.next() else {
                return Err(IoError::Truncated {
                    path: path.to_path_buf(),
                    axis,
                    expected: n,
                    got,
                });
            };
            centers.push(parse_row(row, line_no, path)?);
        }

        debug!(%axis, n_points = n, "read axis block");
        axes[axis.index()] = centers;
    }

    let [x1, x2, x3] = axes;
    Grid::new(x1, x2, x3)
}

fn parse_count(raw: &str, line: usize, axis: Axis, path: &Path) -> Result<usize, IoError> {
    let n: usize = raw.trim().parse().map_err(|_| IoError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: format!("expected point count for {axis}, found {:?}", raw.trim()),
    })?;
    if n == 0 {
        return Err(IoError::Malformed {
            path: path.to_path_buf(),
            line,
            reason: format!("{axis} declares zero points"),
        });
    }
    Ok(n)
}

/// Convert one data row into a cell-center coordinate.
fn parse_row(row: &str, line: usize, path: &Path) -> Result<f64, IoError> {
    let fields: Vec<&str> = row.split_whitespace().collect();
    let layout = RowLayout::detect(fields.len()).ok_or_else(|| IoError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: format!("expected 3 or 5 fields, found {}", fields.len()),
    })?;

    let field = |i: usize| -> Result<f64, IoError> {
        fields[i].parse::<f64>().map_err(|e| IoError::Malformed {
            path: path.to_path_buf(),
            line,
            reason: format!("field {} ({:?}): {e}", i + 1, fields[i]),
        })
    };

    match layout {
        RowLayout::Legacy => field(2),
        RowLayout::Current => Ok((field(1)? + field(2)?) / 2.0),
    }
}
