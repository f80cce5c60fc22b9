//! Grid file writer, in either the PLUTO 4 or the PLUTO 3 layout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::error::IoError;
use crate::format::sci12;
use crate::grid::{Axis, Geometry, Grid};

const RULE: &str = "# ******************************************************";

/// On-disk grid layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GridFormat {
    /// PLUTO 4: descriptive header, rows `index left right`.
    #[default]
    Current,
    /// PLUTO 3: no header, rows `index left center right width`.
    Legacy,
}

/// Configuration for writing a grid file.
#[derive(Debug, Clone, Default)]
pub struct GridWriterConfig {
    /// Row layout and header presence.
    format: GridFormat,
    /// Geometry recorded in the header.
    geometry: Geometry,
    /// Header timestamp; the local time at write when `None`.
    timestamp: Option<NaiveDateTime>,
}

impl GridWriterConfig {
    /// Sets the on-disk layout.
    pub fn with_format(mut self, format: GridFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the geometry written to the header.
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Pins the header timestamp instead of using the current local time.
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Returns the configured layout.
    pub fn format(&self) -> GridFormat {
        self.format
    }

    /// Returns the configured geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
}

/// Write `grid` to `path`, creating or truncating the file.
///
/// Cell edges are derived from the centers (see [`Grid::edges`]); degenerate
/// axes are written with the placeholder extent `[0, 1]`.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written. A
/// failed write may leave a partially written file behind.
pub fn write_grid(path: &Path, grid: &Grid, config: &GridWriterConfig) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    render_grid(&mut out, grid, config)
        .and_then(|()| out.flush())
        .map_err(|e| IoError::from_io(path, e))?;

    info!(
        path = %path.display(),
        format = ?config.format,
        ndim = grid.ndim(),
        "grid written"
    );
    Ok(())
}

/// Render the complete grid file into `out`.
pub(crate) fn render_grid<W: Write>(
    out: &mut W,
    grid: &Grid,
    config: &GridWriterConfig,
) -> std::io::Result<()> {
    if config.format == GridFormat::Current {
        let timestamp = config
            .timestamp
            .unwrap_or_else(|| Local::now().naive_local());
        write_header(out, grid, config.geometry, timestamp)?;
    }

    for axis in Axis::ALL {
        let (left, right) = grid.edges(axis);
        writeln!(out, "{}", left.len())?;
        for (i, (&l, &r)) in left.iter().zip(&right).enumerate() {
            match config.format {
                GridFormat::Current => {
                    writeln!(out, " {}\t{}\t{}", i + 1, sci12(l), sci12(r))?;
                }
                GridFormat::Legacy => writeln!(
                    out,
                    " {}\t{}\t{}\t{}\t{}",
                    i + 1,
                    sci12(l),
                    sci12(0.5 * (r + l)),
                    sci12(r),
                    sci12(r - l)
                )?,
            }
        }
        debug!(%axis, n_points = left.len(), "wrote axis block");
    }
    Ok(())
}

fn write_header<W: Write>(
    out: &mut W,
    grid: &Grid,
    geometry: Geometry,
    timestamp: NaiveDateTime,
) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "# PLUTO 4.2 Grid File")?;
    writeln!(out, "# Generated on  {}", timestamp.format("%a %b %e %H:%M:%S %Y"))?;
    writeln!(out, "#")?;
    writeln!(out, "# DIMENSIONS: {}", grid.ndim())?;
    writeln!(out, "# GEOMETRY:   {}", geometry.label())?;
    for axis in grid.active_axes() {
        let centers = grid.axis(axis);
        let (Some(first), Some(last)) = (centers.first(), centers.last()) else {
            continue;
        };
        writeln!(
            out,
            "# {} [{first:.5},  {last:.5}], {} point(s), 3 ghosts",
            axis.name().to_uppercase(),
            centers.len()
        )?;
    }
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, 7, 10)
            .and_then(|d| d.and_hms_opt(10, 10, 10))
            .unwrap()
    }

    fn render(grid: &Grid, config: &GridWriterConfig) -> String {
        let mut buf = Vec::new();
        render_grid(&mut buf, grid, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_config_values() {
        let config = GridWriterConfig::default();
        assert_eq!(config.format(), GridFormat::Current);
        assert_eq!(config.geometry(), Geometry::Cartesian);
        assert!(config.timestamp.is_none());
    }

    #[test]
    fn current_format_for_one_dimensional_grid() {
        let grid = Grid::new(vec![0.5, 1.5, 2.5], vec![0.0], vec![0.0]).unwrap();
        let config = GridWriterConfig::default().with_timestamp(fixed_time());
        let text = render(&grid, &config);

        let expected = "\
# ******************************************************
# PLUTO 4.2 Grid File
# Generated on  Mon Jul 10 10:10:10 2017
#
# DIMENSIONS: 1
# GEOMETRY:   CARTESIAN
# X1 [0.50000,  2.50000], 3 point(s), 3 ghosts
# ******************************************************
3
 1\t0.000000000000e+00\t1.000000000000e+00
 2\t1.000000000000e+00\t2.000000000000e+00
 3\t2.000000000000e+00\t3.000000000000e+00
1
 1\t0.000000000000e+00\t1.000000000000e+00
1
 1\t0.000000000000e+00\t1.000000000000e+00
";
        assert_eq!(text, expected);
    }

    #[test]
    fn legacy_format_has_no_header_and_five_fields() {
        let grid = Grid::new(vec![0.25, 0.75], vec![3.0], vec![3.0]).unwrap();
        let config = GridWriterConfig::default().with_format(GridFormat::Legacy);
        let text = render(&grid, &config);

        assert!(!text.contains('#'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2");
        assert_eq!(
            lines[1],
            " 1\t0.000000000000e+00\t2.500000000000e-01\t5.000000000000e-01\t5.000000000000e-01"
        );
        assert_eq!(
            lines[2],
            " 2\t5.000000000000e-01\t7.500000000000e-01\t1.000000000000e+00\t5.000000000000e-01"
        );
        assert_eq!(lines[3], "1");
        assert_eq!(
            lines[4],
            " 1\t0.000000000000e+00\t5.000000000000e-01\t1.000000000000e+00\t1.000000000000e+00"
        );
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn header_lists_every_active_axis() {
        let grid = Grid::new(vec![1.0, 2.0], vec![-1.0, 0.0, 1.0], vec![5.0]).unwrap();
        let config = GridWriterConfig::default()
            .with_geometry(Geometry::Spherical)
            .with_timestamp(fixed_time());
        let text = render(&grid, &config);

        assert!(text.contains("# DIMENSIONS: 2\n"));
        assert!(text.contains("# GEOMETRY:   SPHERICAL\n"));
        assert!(text.contains("# X1 [1.00000,  2.00000], 2 point(s), 3 ghosts\n"));
        assert!(text.contains("# X2 [-1.00000,  1.00000], 3 point(s), 3 ghosts\n"));
        assert!(!text.contains("# X3"));
    }

    #[test]
    fn single_digit_day_is_space_padded() {
        let grid = Grid::new(vec![0.0], vec![0.0], vec![0.0]).unwrap();
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(8, 0, 9))
            .unwrap();
        let text = render(&grid, &GridWriterConfig::default().with_timestamp(ts));
        assert!(text.contains("# Generated on  Tue Mar  5 08:00:09 2024\n"));
        assert!(text.contains("# DIMENSIONS: 0\n"));
    }
}
