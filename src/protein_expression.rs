//! Biomass of E. coli cultures.

use crate::constants::fcn;

/// Wet cell weight per unit of optical density at 600 nm [g/L].
pub const WET_WEIGHT_PER_OD600: fcn = 1.7;
/// Fraction of the wet cell weight remaining after drying.
pub const DRY_WEIGHT_FRACTION: fcn = 0.2;

/// Converts an OD600 reading to a wet cell density [kg/m^3], which equals g/L.
pub fn od600_to_wet_ecoli_cell_weight(od600: fcn) -> fcn {
    WET_WEIGHT_PER_OD600 * od600
}

/// Converts an E. coli wet cell weight to dry weight, in the same unit.
pub fn ecoli_cell_wet_weight_to_dry_weight(wet_weight: fcn) -> fcn {
    DRY_WEIGHT_FRACTION * wet_weight
}
