//! Units command: print the code-unit scalars.

use anyhow::Result;

use pluto_units::{DEFAULT_GAMMA, DEFAULT_MU, units};

/// Run the units command.
pub fn run() -> Result<()> {
    let u = units();
    let rows = [
        ("density", u.density, "g cm^-3"),
        ("length", u.length, "cm"),
        ("velocity", u.velocity, "cm s^-1"),
        ("time", u.time, "s"),
        ("pressure", u.pressure, "dyn cm^-2"),
        ("energy", u.energy, "erg"),
        ("mass", u.mass, "g"),
        ("magnetic_field", u.magnetic_field, "G"),
        ("kelvin", u.kelvin, "K"),
        ("time_to_years", u.time_to_years, "yr"),
    ];
    for (name, value, unit) in rows {
        println!("{name:<16}{value:>14.6e}  {unit}");
    }
    println!("{:<16}{:>14.6e}  Msun", "mass", u.mass_in_msun());
    println!("{:<16}{DEFAULT_GAMMA:>14.6}  (default)", "gamma");
    println!("{:<16}{DEFAULT_MU:>14.6}  (default)", "mu");
    Ok(())
}
