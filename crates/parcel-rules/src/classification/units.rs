//! Turns operator input such as `"12.5 in"` or `3` into canonical numbers.

use serde::{Deserialize, Serialize};

use super::domain::{Measurement, MeasurementError, UnitSystem};

const INCHES_PER_CM: f64 = 0.393700787;
const POUNDS_PER_KG: f64 = 2.20462262;
const CM_PER_INCH: f64 = 2.54;
const KG_PER_POUND: f64 = 0.45359237;

/// Number as typed, optionally carrying a unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Number(f64),
    Text(String),
}

impl From<f64> for RawQuantity {
    fn from(value: f64) -> Self {
        RawQuantity::Number(value)
    }
}

impl From<&str> for RawQuantity {
    fn from(value: &str) -> Self {
        RawQuantity::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub length: RawQuantity,
    pub width: RawQuantity,
    pub height: RawQuantity,
    pub weight: RawQuantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Centimetre,
    Inch,
    Kilogram,
    Pound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Length,
    Weight,
}

fn parse_unit(suffix: &str) -> Option<Unit> {
    match suffix {
        "cm" => Some(Unit::Centimetre),
        "in" | "inch" | "inches" | "\"" => Some(Unit::Inch),
        "kg" | "kgs" => Some(Unit::Kilogram),
        "lb" | "lbs" | "pound" | "pounds" => Some(Unit::Pound),
        _ => None,
    }
}

fn split_suffix(text: &str) -> (&str, &str) {
    let boundary = text
        .char_indices()
        .find(|(_, ch)| !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')))
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    let (number, suffix) = text.split_at(boundary);
    (number.trim(), suffix.trim())
}

/// Converts one quantity into `units`, accepting a suffix of the right kind.
fn canonical(
    field: &'static str,
    kind: Kind,
    raw: &RawQuantity,
    units: UnitSystem,
) -> Result<f64, MeasurementError> {
    let text = match raw {
        RawQuantity::Number(value) => return Ok(*value),
        RawQuantity::Text(text) => text.trim(),
    };

    let (number, suffix) = split_suffix(text);
    let value: f64 = number.parse().map_err(|_| MeasurementError::Unparseable {
        field,
        raw: text.to_string(),
    })?;

    if suffix.is_empty() {
        return Ok(value);
    }

    let unknown = || MeasurementError::UnknownUnit {
        field,
        unit: suffix.to_string(),
    };
    let unit = parse_unit(&suffix.to_ascii_lowercase()).ok_or_else(unknown)?;

    let converted = match (kind, unit, units) {
        (Kind::Length, Unit::Centimetre, UnitSystem::Metric)
        | (Kind::Length, Unit::Inch, UnitSystem::Imperial)
        | (Kind::Weight, Unit::Kilogram, UnitSystem::Metric)
        | (Kind::Weight, Unit::Pound, UnitSystem::Imperial) => value,
        (Kind::Length, Unit::Centimetre, UnitSystem::Imperial) => value * INCHES_PER_CM,
        (Kind::Length, Unit::Inch, UnitSystem::Metric) => value * CM_PER_INCH,
        (Kind::Weight, Unit::Kilogram, UnitSystem::Imperial) => value * POUNDS_PER_KG,
        (Kind::Weight, Unit::Pound, UnitSystem::Metric) => value * KG_PER_POUND,
        (Kind::Length, Unit::Kilogram | Unit::Pound, _)
        | (Kind::Weight, Unit::Centimetre | Unit::Inch, _) => return Err(unknown()),
    };
    Ok(converted)
}

impl RawMeasurement {
    pub fn new(
        length: impl Into<RawQuantity>,
        width: impl Into<RawQuantity>,
        height: impl Into<RawQuantity>,
        weight: impl Into<RawQuantity>,
    ) -> Self {
        Self {
            length: length.into(),
            width: width.into(),
            height: height.into(),
            weight: weight.into(),
        }
    }

    /// Canonical measurement in `units`; bare numbers are already in `units`.
    pub fn normalize(&self, units: UnitSystem) -> Result<Measurement, MeasurementError> {
        Measurement::new(
            canonical("length", Kind::Length, &self.length, units)?,
            canonical("width", Kind::Length, &self.width, units)?,
            canonical("height", Kind::Length, &self.height, units)?,
            canonical("weight", Kind::Weight, &self.weight, units)?,
        )
    }
}
