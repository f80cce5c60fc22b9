//! In-memory grid model: axes, cell centers, derived cell edges.

use std::fmt;
use std::str::FromStr;

use crate::error::IoError;
use crate::format::round_decimals;
use crate::validate::{ValidationCollector, validate_axis};

/// Decimal digits kept when deriving cell edges from centers.
const EDGE_DECIMALS: i32 = 12;

/// One of the three grid directions, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X1,
    X2,
    X3,
}

impl Axis {
    /// All axes in the order they appear in a grid file.
    pub const ALL: [Axis; 3] = [Axis::X1, Axis::X2, Axis::X3];

    /// Zero-based position of the axis.
    pub fn index(self) -> usize {
        match self {
            Self::X1 => 0,
            Self::X2 => 1,
            Self::X3 => 2,
        }
    }

    /// Lower-case name (`"x1"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::X3 => "x3",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coordinate system recorded in the grid file header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Geometry {
    #[default]
    Cartesian,
    Cylindrical,
    Polar,
    Spherical,
}

impl Geometry {
    /// Upper-case label as written in the header (`"CARTESIAN"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Cartesian => "CARTESIAN",
            Self::Cylindrical => "CYLINDRICAL",
            Self::Polar => "POLAR",
            Self::Spherical => "SPHERICAL",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Geometry {
    type Err = IoError;

    /// Parses a geometry label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CARTESIAN" => Ok(Self::Cartesian),
            "CYLINDRICAL" => Ok(Self::Cylindrical),
            "POLAR" => Ok(Self::Polar),
            "SPHERICAL" => Ok(Self::Spherical),
            _ => Err(IoError::UnknownGeometry { name: s.to_string() }),
        }
    }
}

/// Cell-center coordinates along the three axes of a PLUTO grid.
///
/// Every axis holds at least one finite value. An axis with a single point
/// is a degenerate (unused) dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    axes: [Vec<f64>; 3],
}

impl Grid {
    /// Creates a grid after validating every axis.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every empty axis and every
    /// non-finite coordinate.
    pub fn new(x1: Vec<f64>, x2: Vec<f64>, x3: Vec<f64>) -> Result<Self, IoError> {
        let axes = [x1, x2, x3];
        let mut c = ValidationCollector::new();
        for axis in Axis::ALL {
            c.merge(validate_axis(axis, &axes[axis.index()]));
        }
        c.finish()?;
        Ok(Self { axes })
    }

    /// Returns the cell centers along `axis`.
    pub fn axis(&self, axis: Axis) -> &[f64] {
        &self.axes[axis.index()]
    }

    /// Returns the cell centers along x1.
    pub fn x1(&self) -> &[f64] {
        self.axis(Axis::X1)
    }

    /// Returns the cell centers along x2.
    pub fn x2(&self) -> &[f64] {
        self.axis(Axis::X2)
    }

    /// Returns the cell centers along x3.
    pub fn x3(&self) -> &[f64] {
        self.axis(Axis::X3)
    }

    /// Point counts of the three axes.
    pub fn shape(&self) -> [usize; 3] {
        [self.axes[0].len(), self.axes[1].len(), self.axes[2].len()]
    }

    /// Axes with more than one point, in axis order.
    pub fn active_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL
            .into_iter()
            .filter(|&a| self.axis(a).len() > 1)
    }

    /// Number of non-degenerate dimensions.
    pub fn ndim(&self) -> usize {
        self.active_axes().count()
    }

    /// Uniform spacing along `axis`, taken from its first two samples.
    ///
    /// `None` for degenerate axes.
    pub fn spacing(&self, axis: Axis) -> Option<f64> {
        match self.axis(axis) {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    /// Left and right cell edges along `axis`.
    ///
    /// Edges are `center -/+ spacing / 2`, rounded to 12 decimals. A
    /// degenerate axis gets the placeholder extent `[0, 1]`, so its center
    /// value does not survive a write.
    pub fn edges(&self, axis: Axis) -> (Vec<f64>, Vec<f64>) {
        let Some(dx) = self.spacing(axis) else {
            return (vec![0.0], vec![1.0]);
        };
        let half = dx / 2.0;
        let centers = self.axis(axis);
        let left = centers
            .iter()
            .map(|&x| round_decimals(x - half, EDGE_DECIMALS))
            .collect();
        let right = centers
            .iter()
            .map(|&x| round_decimals(x + half, EDGE_DECIMALS))
            .collect();
        (left, right)
    }

    /// Consumes the grid and returns the three center arrays.
    pub fn into_axes(self) -> [Vec<f64>; 3] {
        self.axes
    }
}
