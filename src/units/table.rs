//! Lookup table of the units available for conversion.

use super::{fun, Dimensions, Unit, UnitError};
use crate::constants::{AVOGADRO, G_TO_KG, KCAL_TO_J};
use lazy_static::lazy_static;
use std::collections::HashMap;

const MASS: Dimensions = Dimensions::new(1, 0, 0);
const LENGTH: Dimensions = Dimensions::new(0, 1, 0);
const VOLUME: Dimensions = Dimensions::new(0, 3, 0);
const TIME: Dimensions = Dimensions::new(0, 0, 1);
const FREQUENCY: Dimensions = Dimensions::new(0, 0, -1);
const FORCE: Dimensions = Dimensions::new(1, 1, -2);
const ENERGY: Dimensions = Dimensions::new(1, 2, -2);
const POWER: Dimensions = Dimensions::new(1, 2, -3);
const PRESSURE: Dimensions = Dimensions::new(1, -1, -2);
const VISCOSITY: Dimensions = Dimensions::new(1, -1, -1);

/// Units as (name, magnitude in SI base units, dimensions).
static UNITS: [(&str, fun, Dimensions); 35] = [
    // Base units
    ("kg", 1.0, MASS),
    ("m", 1.0, LENGTH),
    ("s", 1.0, TIME),
    // Mass
    ("g", G_TO_KG, MASS),
    ("mg", 1e-6, MASS),
    ("ug", 1e-9, MASS),
    ("Da", G_TO_KG / AVOGADRO, MASS),
    // Length
    ("km", 1e3, LENGTH),
    ("cm", 1e-2, LENGTH),
    ("mm", 1e-3, LENGTH),
    ("um", 1e-6, LENGTH),
    ("nm", 1e-9, LENGTH),
    ("A", 1e-10, LENGTH),
    // Volume
    ("L", 1e-3, VOLUME),
    ("mL", 1e-6, VOLUME),
    ("uL", 1e-9, VOLUME),
    // Time
    ("ms", 1e-3, TIME),
    ("us", 1e-6, TIME),
    ("ns", 1e-9, TIME),
    ("min", 60.0, TIME),
    ("h", 3600.0, TIME),
    ("d", 86400.0, TIME),
    ("yr", 3.155_76e7, TIME),
    ("Hz", 1.0, FREQUENCY),
    // Mechanics
    ("N", 1.0, FORCE),
    ("J", 1.0, ENERGY),
    ("kJ", 1e3, ENERGY),
    ("cal", KCAL_TO_J * 1e-3, ENERGY),
    ("kcal", KCAL_TO_J, ENERGY),
    ("W", 1.0, POWER),
    ("Pa", 1.0, PRESSURE),
    ("kPa", 1e3, PRESSURE),
    ("bar", 1e5, PRESSURE),
    ("atm", 101_325.0, PRESSURE),
    ("P", 0.1, VISCOSITY),
];

lazy_static! {
    static ref UNIT_TABLE: HashMap<&'static str, Unit> = UNITS
        .iter()
        .map(|&(name, magnitude, dimensions)| (name, Unit::new(magnitude, dimensions)))
        .collect();
}

/// Looks up the unit with the given name.
pub fn lookup_unit(name: &str) -> Result<Unit, UnitError> {
    UNIT_TABLE
        .get(name)
        .copied()
        .ok_or_else(|| UnitError::UnknownUnit(name.to_string()))
}

/// Returns the names of all available units, in table order.
pub fn unit_names() -> impl Iterator<Item = &'static str> {
    UNITS.iter().map(|&(name, _, _)| name)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn unit_names_are_unique() {
        assert_eq!(unit_names().count(), UNIT_TABLE.len());
    }

    #[test]
    fn dalton_is_about_an_atomic_mass_unit() {
        let dalton = lookup_unit("Da").unwrap();
        assert!((dalton.magnitude() - 1.66e-27).abs() < 0.01e-27);
        assert_eq!(dalton.dimensions(), MASS);
    }

    #[test]
    fn lookup_of_missing_unit_fails() {
        assert_eq!(
            lookup_unit("parsec"),
            Err(UnitError::UnknownUnit("parsec".to_string()))
        );
    }
}
