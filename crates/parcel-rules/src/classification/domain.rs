use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::ClassifyError;

/// Country and fulfilment-mode pair that owns a channel catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProgramId {
    #[serde(rename = "US-FBM")]
    UsFbm,
    #[serde(rename = "DE-FBM")]
    DeFbm,
    #[serde(rename = "UK-FBM")]
    UkFbm,
    #[serde(rename = "JP-FBM")]
    JpFbm,
    #[serde(rename = "CA-FBA")]
    CaFba,
    #[serde(rename = "US-FBA")]
    UsFba,
    #[serde(rename = "DE-FBA")]
    DeFba,
    #[serde(rename = "UK-FBA")]
    UkFba,
    #[serde(rename = "JP-FBA")]
    JpFba,
}

impl ProgramId {
    pub const ALL: [ProgramId; 9] = [
        ProgramId::UsFbm,
        ProgramId::DeFbm,
        ProgramId::UkFbm,
        ProgramId::JpFbm,
        ProgramId::CaFba,
        ProgramId::UsFba,
        ProgramId::DeFba,
        ProgramId::UkFba,
        ProgramId::JpFba,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ProgramId::UsFbm => "US-FBM",
            ProgramId::DeFbm => "DE-FBM",
            ProgramId::UkFbm => "UK-FBM",
            ProgramId::JpFbm => "JP-FBM",
            ProgramId::CaFba => "CA-FBA",
            ProgramId::UsFba => "US-FBA",
            ProgramId::DeFba => "DE-FBA",
            ProgramId::UkFba => "UK-FBA",
            ProgramId::JpFba => "JP-FBA",
        }
    }

    /// Imperial for the US and Canada programs, metric everywhere else.
    pub fn units(&self) -> UnitSystem {
        match self {
            ProgramId::UsFbm | ProgramId::UsFba | ProgramId::CaFba => UnitSystem::Imperial,
            _ => UnitSystem::Metric,
        }
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProgramId {
    type Err = ClassifyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace('_', "-");
        ProgramId::ALL
            .into_iter()
            .find(|program| program.code() == normalized)
            .ok_or_else(|| ClassifyError::UnknownProgram(value.trim().to_string()))
    }
}

/// Canonical unit system a program evaluates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Inches and pounds.
    Imperial,
    /// Centimetres and kilograms.
    Metric,
}

pub const CM_PER_INCH: f64 = 2.54;
pub const KG_PER_POUND: f64 = 0.45359237;

impl UnitSystem {
    pub fn length_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "cm",
        }
    }

    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "lb",
            UnitSystem::Metric => "kg",
        }
    }

    /// Multiplier turning one canonical length unit into centimetres.
    pub fn centimetres_per_unit(&self) -> f64 {
        match self {
            UnitSystem::Imperial => CM_PER_INCH,
            UnitSystem::Metric => 1.0,
        }
    }

    /// Multiplier turning one canonical weight unit into kilograms.
    pub fn kilograms_per_unit(&self) -> f64 {
        match self {
            UnitSystem::Imperial => KG_PER_POUND,
            UnitSystem::Metric => 1.0,
        }
    }
}

/// Destination region for channels whose volumetric factor depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    #[default]
    #[serde(alias = "OTHER")]
    Other,
    #[serde(alias = "at", alias = "AT")]
    Austria,
    #[serde(alias = "hr", alias = "HR")]
    Croatia,
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "other" => Ok(Destination::Other),
            "at" | "austria" => Ok(Destination::Austria),
            "hr" | "croatia" => Ok(Destination::Croatia),
            other => Err(format!(
                "unknown destination '{other}' (expected other, at, or hr)"
            )),
        }
    }
}

/// Per-request knobs that are not part of the measurement itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    #[serde(default)]
    pub destination: Destination,
}

/// Measurement problems detected before any rule runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    #[error("{field} is missing a numeric value (got '{raw}')")]
    Unparseable { field: &'static str, raw: String },
    #[error("{field} uses unsupported unit '{unit}'")]
    UnknownUnit { field: &'static str, unit: String },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
}

/// Package dimensions and weight expressed in a program's canonical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl Measurement {
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
    ) -> Result<Self, MeasurementError> {
        for (field, value) in [
            ("length", length),
            ("width", width),
            ("height", height),
            ("weight", weight),
        ] {
            if !value.is_finite() {
                return Err(MeasurementError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(MeasurementError::Negative { field, value });
            }
        }

        Ok(Self {
            length,
            width,
            height,
            weight,
        })
    }

    pub fn girth(&self) -> f64 {
        self.length + 2.0 * (self.width + self.height)
    }

    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Per-channel classification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub channel: String,
    pub eligible: bool,
    pub tier: String,
    #[serde(serialize_with = "two_decimals")]
    pub dimensional_weight: f64,
    #[serde(serialize_with = "two_decimals")]
    pub chargeable_weight: f64,
    pub reason: String,
}

pub const NOT_APPLICABLE: &str = "-";

impl ClassificationResult {
    pub fn eligible(
        channel: &str,
        tier: &str,
        dimensional_weight: f64,
        chargeable_weight: f64,
        note: Option<&str>,
    ) -> Self {
        Self {
            channel: channel.to_string(),
            eligible: true,
            tier: tier.to_string(),
            dimensional_weight,
            chargeable_weight,
            reason: note.unwrap_or(NOT_APPLICABLE).to_string(),
        }
    }

    pub fn ineligible(
        channel: &str,
        reason: &str,
        dimensional_weight: f64,
        chargeable_weight: f64,
    ) -> Self {
        Self {
            channel: channel.to_string(),
            eligible: false,
            tier: NOT_APPLICABLE.to_string(),
            dimensional_weight,
            chargeable_weight,
            reason: reason.to_string(),
        }
    }
}

/// Rounds to the two decimals shown to operators.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn two_decimals<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round2(*value))
}

/// Everything the presenter needs for one classification request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResponse {
    pub program: ProgramId,
    pub units: UnitSystem,
    pub measurement: Measurement,
    #[serde(serialize_with = "two_decimals")]
    pub girth: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub results: Vec<ClassificationResult>,
    pub advisories: Vec<String>,
    pub recommended: Option<String>,
}

impl ClassificationResponse {
    pub fn eligible(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.results.iter().filter(|result| result.eligible)
    }

    pub fn ineligible(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.results.iter().filter(|result| !result.eligible)
    }

    pub fn result_for(&self, channel: &str) -> Option<&ClassificationResult> {
        self.results.iter().find(|result| result.channel == channel)
    }
}
