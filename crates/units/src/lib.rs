//! # pluto-units
//!
//! Physical constants (cgs) and the code-unit scalars used to convert PLUTO
//! output from dimensionless code units into physical ones.
//!
//! The default unit system is built once on first access and shared
//! read-only for the rest of the process:
//!
//! ```
//! let u = pluto_units::units();
//! assert!(u.time_to_years > 0.0);
//! ```

use std::f64::consts::PI;
use std::sync::LazyLock;

/// Atomic mass unit [g].
pub const CONST_AMU: f64 = 1.66053886e-24;
/// Proton mass [g].
pub const CONST_MP: f64 = 1.67262171e-24;
/// Boltzmann constant [erg / K].
pub const CONST_KB: f64 = 1.3806505e-16;
/// Parsec [cm].
pub const CONST_PC: f64 = 3.0856775807e18;
/// Solar mass [g].
pub const CONST_MSUN: f64 = 2.0e33;

/// Velocity scale of the default unit system: 1 km/s in cm/s.
pub const KM_PER_S: f64 = 1.0e5;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Fallback adiabatic index.
///
/// Deprecated in favour of the value in `pluto.ini`.
pub const DEFAULT_GAMMA: f64 = 5.0 / 3.0;

/// Fallback mean molecular weight.
///
/// Deprecated in favour of the value in `pluto.ini`.
pub const DEFAULT_MU: f64 = 13.0 / 21.0;

/// Code-unit scalars derived from a density, length and velocity unit.
///
/// Multiplying a quantity in code units by the matching field gives the
/// quantity in cgs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeUnits {
    /// Density unit [g / cm^3].
    pub density: f64,
    /// Length unit [cm].
    pub length: f64,
    /// Velocity unit [cm / s].
    pub velocity: f64,
    /// Time unit [s].
    pub time: f64,
    /// Pressure unit [dyn / cm^2].
    pub pressure: f64,
    /// Energy unit [erg].
    pub energy: f64,
    /// Mass unit [g].
    pub mass: f64,
    /// Magnetic field unit [G].
    pub magnetic_field: f64,
    /// Factor turning `p / rho` in code units into a temperature [K]
    /// (before dividing by the mean molecular weight).
    pub kelvin: f64,
    /// Code time to years.
    pub time_to_years: f64,
}

impl CodeUnits {
    /// Derives the full unit set from the three base units.
    pub fn from_base(density: f64, length: f64, velocity: f64) -> Self {
        let time = length / velocity;
        let pressure = density * velocity * velocity;
        let energy = pressure * length.powi(3);
        let mass = energy / (velocity * velocity);
        Self {
            density,
            length,
            velocity,
            time,
            pressure,
            energy,
            mass,
            magnetic_field: (4.0 * PI * density).sqrt() * velocity,
            kelvin: velocity * velocity * CONST_AMU / CONST_KB,
            time_to_years: time / SECONDS_PER_YEAR,
        }
    }

    /// Converts a time in code units into years.
    pub fn years(&self, code_time: f64) -> f64 {
        code_time * self.time_to_years
    }

    /// Mass unit expressed in solar masses.
    pub fn mass_in_msun(&self) -> f64 {
        self.mass / CONST_MSUN
    }
}

impl Default for CodeUnits {
    /// Proton-mass density, parsec length and km/s velocity.
    fn default() -> Self {
        Self::from_base(CONST_MP, CONST_PC, KM_PER_S)
    }
}

static UNITS: LazyLock<CodeUnits> = LazyLock::new(CodeUnits::default);

/// Process-wide default unit system.
pub fn units() -> &'static CodeUnits {
    &UNITS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn base_units_are_passed_through() {
        let u = units();
        assert_eq!(u.density, CONST_MP);
        assert_eq!(u.length, CONST_PC);
        assert_eq!(u.velocity, KM_PER_S);
    }

    #[test]
    fn time_unit_is_about_a_megayear() {
        let u = units();
        assert_relative_eq!(u.time, 3.0856775807e13, max_relative = 1e-12);
        // 1 pc / (1 km/s) ~ 0.978 Myr
        assert_relative_eq!(u.time_to_years, 978_461.94, max_relative = 1e-6);
    }

    #[test]
    fn derived_units_are_consistent() {
        let u = units();
        assert_relative_eq!(u.pressure, CONST_MP * 1.0e10, max_relative = 1e-12);
        assert_relative_eq!(u.energy, u.pressure * CONST_PC.powi(3), max_relative = 1e-12);
        assert_relative_eq!(u.mass, u.density * u.length.powi(3), max_relative = 1e-12);
        assert_relative_eq!(
            u.magnetic_field,
            (4.0 * PI * CONST_MP).sqrt() * 1.0e5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn kelvin_factor() {
        let u = units();
        assert_relative_eq!(u.kelvin, 1.0e10 * CONST_AMU / CONST_KB, max_relative = 1e-12);
        assert_relative_eq!(u.kelvin, 120.27, max_relative = 1e-3);
    }

    #[test]
    fn years_scales_linearly() {
        let u = units();
        assert_relative_eq!(u.years(2.0), 2.0 * u.time_to_years);
        assert_eq!(u.years(0.0), 0.0);
    }

    #[test]
    fn custom_base_units() {
        let u = CodeUnits::from_base(1.0, 2.0, 4.0);
        assert_eq!(u.time, 0.5);
        assert_eq!(u.pressure, 16.0);
        assert_eq!(u.energy, 128.0);
        assert_eq!(u.mass, 8.0);
        assert_relative_eq!(u.time_to_years, 0.5 / SECONDS_PER_YEAR);
    }

    #[test]
    fn mass_in_solar_masses() {
        let u = units();
        // rho_unit * pc^3 ~ 0.025 Msun
        assert_relative_eq!(u.mass_in_msun(), 0.0246, max_relative = 1e-2);
    }

    #[test]
    fn deprecated_gas_defaults() {
        assert_relative_eq!(DEFAULT_GAMMA, 1.666_666_666_666_666_7);
        assert_relative_eq!(DEFAULT_MU, 0.619_047_619_047_619);
    }

    #[test]
    fn shared_instance_is_stable() {
        assert!(std::ptr::eq(units(), units()));
        assert_eq!(*units(), CodeUnits::default());
    }
}
