use std::fmt;

use serde::Serialize;

use super::domain::{Measurement, UnitSystem};

/// Measured quantity referenced by limits and advisories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    Width,
    Height,
    Girth,
    Weight,
    Volume,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Girth => "girth",
            Dimension::Weight => "weight",
            Dimension::Volume => "volume",
        }
    }

    pub fn unit(&self, units: UnitSystem) -> &'static str {
        match self {
            Dimension::Weight => units.weight_unit(),
            Dimension::Volume => "cm3",
            _ => units.length_unit(),
        }
    }
}

/// Optional inclusive envelope for one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bound {
    pub const NONE: Bound = Bound {
        min: None,
        max: None,
    };

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    Minimum,
    Maximum,
}

/// First hard-limit breach found for a measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectionReason {
    pub dimension: Dimension,
    pub kind: BoundKind,
    pub limit: f64,
    pub actual: f64,
    pub unit: &'static str,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.kind {
            BoundKind::Minimum => "is below the program minimum of",
            BoundKind::Maximum => "exceeds the program maximum of",
        };
        write!(
            f,
            "{} {:.2} {} {} {} {}",
            self.dimension.label(),
            self.actual,
            self.unit,
            relation,
            self.limit,
            self.unit
        )
    }
}

/// Absolute envelope of a program; any breach blocks every channel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HardLimitSpec {
    pub length: Bound,
    pub width: Bound,
    pub height: Bound,
    pub girth: Bound,
    pub weight: Bound,
}

impl HardLimitSpec {
    /// Checks length, width, height, girth, then weight and stops at the first breach.
    pub fn check(&self, measurement: &Measurement, units: UnitSystem) -> Option<RejectionReason> {
        let checks = [
            (Dimension::Length, self.length, measurement.length),
            (Dimension::Width, self.width, measurement.width),
            (Dimension::Height, self.height, measurement.height),
            (Dimension::Girth, self.girth, measurement.girth()),
            (Dimension::Weight, self.weight, measurement.weight),
        ];

        checks.into_iter().find_map(|(dimension, bound, actual)| {
            let reject = |kind, limit| RejectionReason {
                dimension,
                kind,
                limit,
                actual,
                unit: dimension.unit(units),
            };

            match (bound.min, bound.max) {
                (Some(min), _) if actual < min => Some(reject(BoundKind::Minimum, min)),
                (_, Some(max)) if actual > max => Some(reject(BoundKind::Maximum, max)),
                _ => None,
            }
        })
    }
}
