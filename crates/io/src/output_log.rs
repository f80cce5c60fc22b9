//! Output catalog reader (`dbl.out`, `flt.out`, `vtk.out`, ...).

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;

/// Minimum number of whitespace-separated fields on a catalog line.
const MIN_FIELDS: usize = 7;

/// One line of an output catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    /// Simulation time converted to years.
    time_years: f64,
    /// Simulation time in code units.
    time: f64,
    /// Storage label (`single_file`, `multiple_files`, ...).
    format: String,
    /// Variables stored in the output, in file order.
    variables: Vec<String>,
}

impl OutputRecord {
    /// Simulation time in years.
    pub fn time_years(&self) -> f64 {
        self.time_years
    }

    /// Simulation time in code units.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Storage label.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Variable names, in file order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns `true` if the output contains `name`.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }
}

/// Output catalog keyed by output file index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputLog {
    records: BTreeMap<usize, OutputRecord>,
}

impl OutputLog {
    /// Returns the record for output `index`.
    pub fn get(&self, index: usize) -> Option<&OutputRecord> {
        self.records.get(&index)
    }

    /// Number of distinct outputs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over `(index, record)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &OutputRecord)> {
        self.records.iter().map(|(&i, r)| (i, r))
    }

    /// Output indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.records.keys().copied()
    }

    /// Record with the highest index.
    pub fn last(&self) -> Option<(usize, &OutputRecord)> {
        self.records.last_key_value().map(|(&i, r)| (i, r))
    }
}

/// Read an output catalog.
///
/// Each line is `index time dt step format mode var1 var2 ...`. Times are
/// converted to years with [`pluto_units::units`]. A later line with the
/// same index replaces the earlier one.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] / [`IoError::Io`] if the file cannot be
/// read, or [`IoError::Malformed`] if a line has fewer than 7 fields or a
/// non-numeric index or time.
pub fn read_output_log(path: &Path) -> Result<OutputLog, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::from_io(path, e))?;
    let log = parse_output_log(&text, path)?;
    info!(path = %path.display(), n_records = log.len(), "output log loaded");
    Ok(log)
}

pub(crate) fn parse_output_log(text: &str, path: &Path) -> Result<OutputLog, IoError> {
    let time_to_years = pluto_units::units().time_to_years;
    let mut records = BTreeMap::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let malformed = |reason: String| IoError::Malformed {
            path: path.to_path_buf(),
            line: line_no,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(malformed(format!(
                "expected at least {MIN_FIELDS} fields, found {}",
                fields.len()
            )));
        }

        let index: usize = fields[0]
            .parse()
            .map_err(|e| malformed(format!("output index {:?}: {e}", fields[0])))?;
        let time: f64 = fields[1]
            .parse()
            .map_err(|e| malformed(format!("time {:?}: {e}", fields[1])))?;

        let record = OutputRecord {
            time_years: time * time_to_years,
            time,
            format: fields[4].to_string(),
            variables: fields[6..].iter().map(|s| s.to_string()).collect(),
        };
        if records.insert(index, record).is_some() {
            debug!(index, line = line_no, "duplicate output index replaced");
        }
    }

    Ok(OutputLog { records })
}
