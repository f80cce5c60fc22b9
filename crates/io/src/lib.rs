//! # pluto-io
//!
//! Read and write the plain-text files produced and consumed by the PLUTO
//! code: grid descriptors (`grid.out`), output catalogs (`dbl.out`,
//! `flt.out`, ...) and the `pluto.ini` configuration file.
//!
//! Every operation opens its own file, returns a fully built value or an
//! [`IoError`], and never hands back partially parsed data.

mod error;
mod format;
mod grid;
mod grid_read;
mod grid_write;
mod ini;
mod output_log;
mod validate;

pub use error::IoError;
pub use grid::{Axis, Geometry, Grid};
pub use grid_read::read_grid;
pub use grid_write::{GridFormat, GridWriterConfig, write_grid};
pub use ini::{IniDocument, KEY_WIDTH, Section, read_ini, write_ini};
pub use output_log::{OutputLog, OutputRecord, read_output_log};
