//! Sectioned key-value configuration files (`pluto.ini`).
//!
//! The format is line based:
//!
//! ```text
//! [Time]
//!
//! CFL                      0.4
//! tstop                    1.0
//!
//! [Solver]
//!
//! Solver                   hllc
//! ```
//!
//! Values are kept as raw strings; section and key order is preserved so a
//! document can be written back without reshuffling it.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::ValidationCollector;

/// Column at which values start when a document is written.
pub const KEY_WIDTH: usize = 25;

/// Keys of one section, in insertion order.
pub type Section = IndexMap<String, String>;

/// An ordered `pluto.ini` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: IndexMap<String, Section>,
}

impl IniDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh, empty section called `name`.
    ///
    /// An existing section of the same name is cleared but keeps its
    /// position.
    pub fn insert_section(&mut self, name: impl Into<String>) -> &mut Section {
        let name = name.into();
        let section = self.sections.entry(name).or_default();
        section.clear();
        section
    }

    /// Sets `key` in `section`, creating the section at the end if needed.
    ///
    /// Returns the previous value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the entry could not be read back
    /// after a write: the key is empty or contains whitespace, or the value
    /// is empty, spans lines, or has surrounding whitespace.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, IoError> {
        let (key, value) = (key.into(), value.into());
        validate_entry(&key, &value).finish()?;
        Ok(self
            .sections
            .entry(section.into())
            .or_default()
            .insert(key, value))
    }

    /// Returns the raw value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Looks up `key` in `section` and parses it as `T`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidValue`] if the value does not parse.
    pub fn get_parsed<T>(&self, section: &str, key: &str) -> Result<Option<T>, IoError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let Some(raw) = self.get(section, key) else {
            return Ok(None);
        };
        raw.parse::<T>()
            .map(Some)
            .map_err(|e| IoError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the keys of `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterates over sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for IniDocument {
    /// Renders the document exactly as [`write_ini`] stores it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, section) in &self.sections {
            writeln!(f, "[{name}]")?;
            writeln!(f)?;
            for (key, value) in section {
                if key.chars().count() >= KEY_WIDTH {
                    writeln!(f, "{key} {value}")?;
                } else {
                    writeln!(f, "{key:<KEY_WIDTH$}{value}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read a `pluto.ini` style file.
///
/// `[name]` lines open a section, blank lines are ignored, and every other
/// line is split at its first whitespace run into a key and a value. Later
/// keys replace earlier ones; a repeated section header starts that
/// section over.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] / [`IoError::Io`] if the file cannot be
/// read, [`IoError::KeyOutsideSection`] if a key appears before the first
/// header, and [`IoError::Malformed`] for a key without a value.
pub fn read_ini(path: &Path) -> Result<IniDocument, IoError> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::from_io(path, e))?;
    let doc = parse_ini(&text, path)?;
    info!(path = %path.display(), n_sections = doc.len(), "configuration loaded");
    Ok(doc)
}

/// Write `doc` to `path`, creating or truncating the file.
///
/// Each section is written as its header, a blank line, one `key value`
/// line per entry with values aligned at column [`KEY_WIDTH`], and a
/// closing blank line.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn write_ini(path: &Path, doc: &IniDocument) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::from_io(path, e))?;
    let mut out = BufWriter::new(file);
    write!(out, "{doc}")
        .and_then(|()| out.flush())
        .map_err(|e| IoError::from_io(path, e))?;
    info!(path = %path.display(), n_sections = doc.len(), "configuration written");
    Ok(())
}

pub(crate) fn parse_ini(text: &str, path: &Path) -> Result<IniDocument, IoError> {
    let mut doc = IniDocument::new();
    let mut active: Option<String> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        // Only the outermost bracket pair is stripped: `[[a]]` names section `[a]`.
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            if doc.section(name).is_some() {
                debug!(section = name, line = line_no, "section redeclared, starting over");
            }
            doc.insert_section(name);
            active = Some(name.to_string());
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let Some(section) = active.as_deref() else {
            return Err(IoError::KeyOutsideSection {
                path: path.to_path_buf(),
                line: line_no,
            });
        };
        let Some((key, value)) = line.split_once(char::is_whitespace) else {
            return Err(IoError::Malformed {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("key {line:?} has no value"),
            });
        };
        doc.set(section, key, value.trim())?;
    }

    Ok(doc)
}

/// Check that a key-value pair survives a write/read cycle.
fn validate_entry(key: &str, value: &str) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    if key.is_empty() {
        c.push("key is empty");
    } else if key.contains(char::is_whitespace) {
        c.push(format!("key {key:?} contains whitespace"));
    }

    if value.trim().is_empty() {
        c.push(format!("value for key {key:?} is empty"));
    } else if value.contains(['\n', '\r']) {
        c.push(format!("value for key {key:?} spans several lines"));
    } else if value.trim() != value {
        c.push(format!("value for key {key:?} has surrounding whitespace"));
    }

    c
}
