//! Physical and mathematical constants.
//!
//! Values are rounded to the precision customarily used for
//! order-of-magnitude estimates.

/// Floating-point precision to use for constants.
#[allow(non_camel_case_types)]
pub type fcn = f64;

// Mathematical constants

pub const PI: fcn = std::f64::consts::PI;
pub const LN_2: fcn = std::f64::consts::LN_2;

// Physical constants

/// Boltzmann constant [J/K].
pub const KBOLTZMANN: fcn = 1.38e-23;
/// Avogadro constant [1/mol].
pub const AVOGADRO: fcn = 6.02e23;
/// Planck constant [J s].
pub const HPLANCK: fcn = 6.626e-34;
/// Elementary charge [C].
pub const Q_ELECTRON: fcn = 1.602_176_5e-19;
/// Vacuum permittivity [F/m].
pub const EPSILON_0: fcn = 8.854_187_812_8e-12;
/// Ion product of water at room temperature [(mol/L)^2].
pub const KW: fcn = 1e-14;
/// Thermal energy kT at roughly 300 K [kcal/mol].
pub const KT_KCAL_PER_MOL: fcn = 0.596;
/// Room temperature [K].
pub const ROOM_TEMPERATURE: fcn = 300.0;

// Properties of water

/// Mass density of water [kg/m^3].
pub const WATER_DENSITY: fcn = 1000.0;
/// Dynamic viscosity of water at 25 C [Pa s].
pub const WATER_VISCOSITY: fcn = 8.9e-4;
/// Surface tension of water at 20 C [N/m].
pub const WATER_SURFACE_TENSION: fcn = 7.28e-2;
/// Standard pressure [Pa].
pub const STANDARD_PRESSURE: fcn = 1e5;

// Unit conversion factors

/// Conversion factor from kilocalories to Joules.
pub const KCAL_TO_J: fcn = 4184.0;
/// Conversion factor from grams to kilograms.
pub const G_TO_KG: fcn = 1e-3;
/// Conversion factor from Angstrom to meters.
pub const ANGSTROM_TO_M: fcn = 1e-10;
/// Conversion factor from square Angstrom to square meters.
pub const ANGSTROM2_TO_M2: fcn = 1e-20;
/// Conversion factor from cubic Angstrom to cubic meters.
pub const ANGSTROM3_TO_M3: fcn = 1e-30;
/// Conversion factor from liters to cubic meters.
pub const L_TO_M3: fcn = 1e-3;
/// Conversion factor from moles per liter to moles per cubic meter.
pub const MOLAR_TO_MOL_PER_M3: fcn = 1e3;
