//! Pure conversion functions: TOML config and CLI overrides -> crate API config types.

use anyhow::{Result, bail};

use pluto_io::{Geometry, GridFormat, GridWriterConfig};

use crate::config::GridToml;

/// Parses a grid layout name into the corresponding enum variant.
pub fn parse_grid_format(s: &str) -> Result<GridFormat> {
    match s.to_lowercase().as_str() {
        "current" | "pluto4" | "v4" => Ok(GridFormat::Current),
        "legacy" | "pluto3" | "v3" => Ok(GridFormat::Legacy),
        other => bail!("unknown grid format: {other:?}"),
    }
}

/// Builds a [`GridWriterConfig`] from the TOML grid table.
///
/// `format` and `geometry` come from the command line and take precedence
/// over the file.
pub fn build_grid_writer_config(
    grid: &GridToml,
    format: Option<&str>,
    geometry: Option<&str>,
) -> Result<GridWriterConfig> {
    let format = parse_grid_format(format.unwrap_or(&grid.format))?;
    let geometry: Geometry = geometry.unwrap_or(&grid.geometry).parse()?;
    Ok(GridWriterConfig::default()
        .with_format(format)
        .with_geometry(geometry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_format_names() {
        assert_eq!(parse_grid_format("current").unwrap(), GridFormat::Current);
        assert_eq!(parse_grid_format("Legacy").unwrap(), GridFormat::Legacy);
        assert_eq!(parse_grid_format("v3").unwrap(), GridFormat::Legacy);
        assert!(parse_grid_format("v5").is_err());
    }

    #[test]
    fn file_values_are_used_without_overrides() {
        let toml = GridToml {
            format: "legacy".to_string(),
            geometry: "spherical".to_string(),
        };
        let cfg = build_grid_writer_config(&toml, None, None).unwrap();
        assert_eq!(cfg.format(), GridFormat::Legacy);
        assert_eq!(cfg.geometry(), Geometry::Spherical);
    }

    #[test]
    fn cli_overrides_win() {
        let cfg =
            build_grid_writer_config(&GridToml::default(), Some("legacy"), Some("POLAR")).unwrap();
        assert_eq!(cfg.format(), GridFormat::Legacy);
        assert_eq!(cfg.geometry(), Geometry::Polar);
    }

    #[test]
    fn unknown_geometry_is_reported() {
        let err = build_grid_writer_config(&GridToml::default(), None, Some("toroidal"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown geometry"));
    }
}
