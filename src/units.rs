//! Dimensional analysis over the SI base units kilogram, meter and second.
//!
//! A compound unit is written as a sequence of unit names separated by `*`
//! (multiply) or `/` (divide), for instance `kg*m/s/s`. A leading `*` may be
//! omitted. Values are converted by passing through their representation in
//! SI base units, where the exponents of kg, m and s are tracked so that a
//! conversion between incompatible units can be detected.

pub mod table;

use std::{
    fmt,
    ops::{Add, Neg, Sub},
};
use thiserror::Error;
use tracing::debug;

pub use table::{lookup_unit, unit_names};

/// Floating-point precision to use for units.
#[allow(non_camel_case_types)]
pub type fun = f64;

/// Names of the base units, in the order their exponents are stored.
pub const BASE_UNIT_NAMES: [&str; 3] = ["kg", "m", "s"];

const MULTIPLY: char = '*';
const DIVIDE: char = '/';

/// Errors that can occur when converting between units.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit `{0}`")]
    UnknownUnit(String),
    #[error("Cannot express a quantity with dimensions [{quantity}] in {target} (residual dimensions [{residual}])")]
    DimensionMismatch {
        quantity: Dimensions,
        target: String,
        residual: Dimensions,
    },
}

/// Exponents of the base units kg, m and s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions([i32; 3]);

impl Dimensions {
    pub const DIMENSIONLESS: Self = Self([0, 0, 0]);

    pub const fn new(mass: i32, length: i32, time: i32) -> Self {
        Self([mass, length, time])
    }

    pub fn mass(&self) -> i32 {
        self.0[0]
    }

    pub fn length(&self) -> i32 {
        self.0[1]
    }

    pub fn time(&self) -> i32 {
        self.0[2]
    }

    pub fn exponents(&self) -> [i32; 3] {
        self.0
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }
}

impl Add for Dimensions {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self([
            self.0[0] + other.0[0],
            self.0[1] + other.0[1],
            self.0[2] + other.0[2],
        ])
    }
}

impl Sub for Dimensions {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Neg for Dimensions {
    type Output = Self;

    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2]])
    }
}

impl fmt::Display for Dimensions {
    /// Writes the canonical base unit string without the leading `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit_string = render_canonical_unit(*self);
        write!(
            f,
            "{}",
            unit_string.strip_prefix(MULTIPLY).unwrap_or(&unit_string)
        )
    }
}

/// A named unit, given by its magnitude in SI base units and its dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit {
    magnitude: fun,
    dimensions: Dimensions,
}

impl Unit {
    pub const fn new(magnitude: fun, dimensions: Dimensions) -> Self {
        Self {
            magnitude,
            dimensions,
        }
    }

    pub fn magnitude(&self) -> fun {
        self.magnitude
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

/// A physical quantity expressed in SI base units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity {
    value: fun,
    dimensions: Dimensions,
}

impl Quantity {
    pub fn new(value: fun, dimensions: Dimensions) -> Self {
        Self { value, dimensions }
    }

    pub fn value(&self) -> fun {
        self.value
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.value, self.dimensions)
    }
}

/// A compound unit split into the units it is multiplied and divided by.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitExpression {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl UnitExpression {
    /// Splits a compound unit string into multiplied and divided unit names.
    ///
    /// Unit names are not validated here; an unknown or empty name is only
    /// reported when the expression is used for a conversion.
    pub fn parse(unit_string: &str) -> Self {
        let mut expression = Self::default();
        if unit_string.is_empty() {
            return expression;
        }

        let padded_unit_string = if unit_string.starts_with(is_delimiter) {
            unit_string.to_string()
        } else {
            format!("{}{}", MULTIPLY, unit_string)
        };

        for (start, delimiter) in padded_unit_string
            .char_indices()
            .filter(|&(_, c)| is_delimiter(c))
        {
            let rest = &padded_unit_string[start + delimiter.len_utf8()..];
            let stop = rest.find(is_delimiter).unwrap_or(rest.len());
            let name = rest[..stop].to_string();
            if delimiter == MULTIPLY {
                expression.positive.push(name);
            } else {
                expression.negative.push(name);
            }
        }
        expression
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Computes the net dimensions of the expression.
    pub fn dimensions(&self) -> Result<Dimensions, UnitError> {
        Ok(to_standard(1.0, self)?.dimensions())
    }
}

impl fmt::Display for UnitExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.positive.join("*"))?;
        for name in &self.negative {
            write!(f, "{}{}", DIVIDE, name)?;
        }
        Ok(())
    }
}

fn is_delimiter(c: char) -> bool {
    c == MULTIPLY || c == DIVIDE
}

/// Converts a value given in the unit described by the expression to SI base units.
pub fn to_standard(value: fun, expression: &UnitExpression) -> Result<Quantity, UnitError> {
    let mut quantity = Quantity::new(value, Dimensions::DIMENSIONLESS);

    for name in &expression.positive {
        let unit = lookup_unit(name)?;
        quantity.value *= unit.magnitude;
        quantity.dimensions = quantity.dimensions + unit.dimensions;
    }
    for name in &expression.negative {
        let unit = lookup_unit(name)?;
        quantity.value /= unit.magnitude;
        quantity.dimensions = quantity.dimensions - unit.dimensions;
    }
    Ok(quantity)
}

/// Expresses a quantity in the unit described by the expression.
///
/// Fails if the dimensions of the expression differ from those of the quantity.
pub fn to_custom(quantity: &Quantity, expression: &UnitExpression) -> Result<fun, UnitError> {
    let mut value = quantity.value;
    let mut residual = quantity.dimensions;

    for name in &expression.positive {
        let unit = lookup_unit(name)?;
        value /= unit.magnitude;
        residual = residual - unit.dimensions;
    }
    for name in &expression.negative {
        let unit = lookup_unit(name)?;
        value *= unit.magnitude;
        residual = residual + unit.dimensions;
    }

    if residual.is_dimensionless() {
        Ok(value)
    } else {
        Err(UnitError::DimensionMismatch {
            quantity: quantity.dimensions,
            target: expression.to_string(),
            residual,
        })
    }
}

/// Renders dimensions as a compound unit of kg, m and s, where each base unit
/// is repeated once per power, for instance `*kg*m/s/s`.
pub fn render_canonical_unit(dimensions: Dimensions) -> String {
    BASE_UNIT_NAMES
        .iter()
        .zip(dimensions.exponents())
        .map(|(name, exponent)| {
            let delimiter = if exponent > 0 { MULTIPLY } else { DIVIDE };
            format!("{}{}", delimiter, name).repeat(exponent.unsigned_abs() as usize)
        })
        .collect()
}

/// Result of converting a value from one unit to another.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub input_value: fun,
    pub input_unit: String,
    pub output_value: fun,
    pub output_unit: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} = {:?} {}",
            self.input_value, self.input_unit, self.output_value, self.output_unit
        )
    }
}

/// Converts a value from the input unit to the output unit, or to SI base
/// units if no output unit is given.
pub fn convert(
    input_value: fun,
    input_unit: &str,
    output_unit: Option<&str>,
) -> Result<Conversion, UnitError> {
    let input_expression = UnitExpression::parse(input_unit);
    debug!(
        "Parsed input unit {}: multiplied by {:?}, divided by {:?}",
        input_unit, input_expression.positive, input_expression.negative
    );
    let quantity = to_standard(input_value, &input_expression)?;
    debug!("Value in SI base units: {}", quantity);

    let output_unit = match output_unit {
        Some(output_unit) if !output_unit.is_empty() => output_unit.to_string(),
        _ => quantity.dimensions().to_string(),
    };
    let output_expression = UnitExpression::parse(&output_unit);
    let output_value = to_custom(&quantity, &output_expression)?;

    Ok(Conversion {
        input_value,
        input_unit: input_unit.to_string(),
        output_value,
        output_unit,
    })
}

#[cfg(test)]
mod tests {

    use super::*;
    use approx::assert_relative_eq;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn parsing_splits_multiplied_and_divided_units() {
        let expression = UnitExpression::parse("kg*m/s/s");
        assert_eq!(expression.positive(), names(&["kg", "m"]).as_slice());
        assert_eq!(expression.negative(), names(&["s", "s"]).as_slice());
    }

    #[test]
    fn parsing_assumes_leading_multiplication() {
        let expression = UnitExpression::parse("m/s");
        assert_eq!(expression.positive(), names(&["m"]).as_slice());
        assert_eq!(expression.negative(), names(&["s"]).as_slice());

        assert_eq!(UnitExpression::parse("*m/s"), expression);
    }

    #[test]
    fn parsing_leading_division_gives_no_positive_units() {
        let expression = UnitExpression::parse("/s");
        assert!(expression.positive().is_empty());
        assert_eq!(expression.negative(), names(&["s"]).as_slice());
    }

    #[test]
    fn parsing_empty_string_gives_empty_expression() {
        let expression = UnitExpression::parse("");
        assert!(expression.is_empty());
    }

    #[test]
    fn consecutive_delimiters_give_empty_unit_name() {
        let expression = UnitExpression::parse("kg**m");
        assert_eq!(expression.positive(), names(&["kg", "", "m"]).as_slice());
        assert_eq!(
            to_standard(1.0, &expression),
            Err(UnitError::UnknownUnit(String::new()))
        );
    }

    #[test]
    fn expression_display_reproduces_input() {
        assert_eq!(UnitExpression::parse("kg*m/s/s").to_string(), "kg*m/s/s");
        assert_eq!(UnitExpression::parse("/s").to_string(), "/s");
    }

    #[test]
    fn newton_has_force_dimensions() {
        let quantity = to_standard(1.0, &UnitExpression::parse("N")).unwrap();
        assert_eq!(quantity.dimensions(), Dimensions::new(1, 1, -2));
        assert_relative_eq!(quantity.value(), 1.0);
    }

    #[test]
    fn canonical_unit_repeats_base_units() {
        assert_eq!(
            render_canonical_unit(Dimensions::new(1, 1, -2)),
            "*kg*m/s/s"
        );
        assert_eq!(render_canonical_unit(Dimensions::new(-1, 0, 3)), "/kg*s*s*s");
        assert_eq!(render_canonical_unit(Dimensions::DIMENSIONLESS), "");
        assert_eq!(Dimensions::new(1, 1, -2).to_string(), "kg*m/s/s");
    }

    #[test]
    fn conversion_without_output_unit_uses_base_units() {
        let conversion = convert(1.0, "N", None).unwrap();
        assert_eq!(conversion.output_unit, "kg*m/s/s");
        assert_relative_eq!(conversion.output_value, 1.0);
        assert_eq!(conversion.to_string(), "1.0 N = 1.0 kg*m/s/s");
    }

    #[test]
    fn grams_convert_to_kilograms() {
        let conversion = convert(1000.0, "g", Some("kg")).unwrap();
        assert_relative_eq!(conversion.output_value, 1.0);
    }

    #[test]
    fn newton_converts_to_gram_meter_per_second_squared() {
        let conversion = convert(1.0, "N", Some("g*m/s/s")).unwrap();
        assert_relative_eq!(conversion.output_value, 1000.0);
    }

    #[test]
    fn empty_output_unit_is_treated_as_missing() {
        let conversion = convert(3.0, "km/h", Some("")).unwrap();
        assert_eq!(conversion.output_unit, "m/s");
        assert_relative_eq!(conversion.output_value, 3000.0 / 3600.0);
    }

    #[test]
    fn every_unit_survives_round_trip() {
        for name in unit_names() {
            let expression = UnitExpression::parse(name);
            let quantity = to_standard(2.5, &expression).unwrap();
            let value = to_custom(&quantity, &expression).unwrap();
            assert_relative_eq!(value, 2.5, max_relative = 1e-12);
        }
    }

    #[test]
    fn every_inverse_unit_survives_round_trip() {
        for name in unit_names() {
            let expression = UnitExpression::parse(&format!("/{}", name));
            let quantity = to_standard(0.4, &expression).unwrap();
            let value = to_custom(&quantity, &expression).unwrap();
            assert_relative_eq!(value, 0.4, max_relative = 1e-12);
        }
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let quantity = to_standard(1.0, &UnitExpression::parse("N")).unwrap();
        let result = to_custom(&quantity, &UnitExpression::parse("kg*m/s"));
        assert_eq!(
            result,
            Err(UnitError::DimensionMismatch {
                quantity: Dimensions::new(1, 1, -2),
                target: "kg*m/s".to_string(),
                residual: Dimensions::new(0, 0, -1),
            })
        );
        assert!(convert(1.0, "J", Some("W")).is_err());
    }

    #[test]
    fn unknown_unit_is_reported() {
        assert_eq!(
            convert(1.0, "furlong", None),
            Err(UnitError::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(
            convert(1.0, "m", Some("m*fortnight/fortnight")),
            Err(UnitError::UnknownUnit("fortnight".to_string()))
        );
    }

    #[test]
    fn compound_units_convert_consistently() {
        let conversion = convert(1.0, "kcal", Some("J")).unwrap();
        assert_relative_eq!(conversion.output_value, 4184.0);

        let conversion = convert(1.0, "atm", Some("kPa")).unwrap();
        assert_relative_eq!(conversion.output_value, 101.325);

        let conversion = convert(1.0, "um*um/s", Some("m*m/s")).unwrap();
        assert_relative_eq!(conversion.output_value, 1e-12, max_relative = 1e-12);
    }
}
