use serde::{Deserialize, Serialize};

use super::catalog::ProgramProfile;
use super::domain::{Destination, Measurement, UnitSystem};
use super::limits::Dimension;

/// Float slack on the lower window edge.
const EDGE_EPSILON: f64 = 1e-9;

/// Named boundary a measurement may sit just below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub value: f64,
    pub label: &'static str,
}

/// Which derived weight of a channel a [`BillingThreshold`] watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BilledWeight {
    Chargeable,
    Volumetric,
}

impl BilledWeight {
    pub fn label(&self) -> &'static str {
        match self {
            BilledWeight::Chargeable => "chargeable weight",
            BilledWeight::Volumetric => "volumetric weight",
        }
    }
}

/// Boundary on a weight one named channel derives from the measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillingThreshold {
    pub channel: &'static str,
    pub measure: BilledWeight,
    pub value: f64,
    pub label: &'static str,
}

/// Boundaries per dimension class; volume boundaries are in cubic centimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdTable {
    pub length: &'static [Threshold],
    pub width: &'static [Threshold],
    pub height: &'static [Threshold],
    pub girth: &'static [Threshold],
    pub weight: &'static [Threshold],
    pub volume: &'static [Threshold],
    /// Evaluated against the channel's own weight formula at the default destination.
    pub billing: &'static [BillingThreshold],
}

impl ThresholdTable {
    pub const EMPTY: ThresholdTable = ThresholdTable {
        length: &[],
        width: &[],
        height: &[],
        girth: &[],
        weight: &[],
        volume: &[],
        billing: &[],
    };

    pub fn classes(&self) -> [(Dimension, &'static [Threshold]); 6] {
        [
            (Dimension::Length, self.length),
            (Dimension::Width, self.width),
            (Dimension::Height, self.height),
            (Dimension::Girth, self.girth),
            (Dimension::Weight, self.weight),
            (Dimension::Volume, self.volume),
        ]
    }
}

/// Base tolerances expressed in metric terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryTolerance {
    pub length_cm: f64,
    pub weight_kg: f64,
    /// Fraction of the boundary used as the volume window.
    pub volume_ratio: f64,
}

impl Default for AdvisoryTolerance {
    fn default() -> Self {
        Self {
            length_cm: 2.0,
            weight_kg: 0.5,
            volume_ratio: 0.01,
        }
    }
}

impl AdvisoryTolerance {
    /// Window below `boundary` for a dimension class, in the program's units.
    pub fn window(&self, dimension: Dimension, units: UnitSystem, boundary: f64) -> f64 {
        match dimension {
            Dimension::Length | Dimension::Width | Dimension::Height | Dimension::Girth => {
                self.length_cm / units.centimetres_per_unit()
            }
            Dimension::Weight => self.weight_kg / units.kilograms_per_unit(),
            Dimension::Volume => boundary * self.volume_ratio,
        }
    }
}

/// Source of non-blocking boundary warnings.
pub trait Advisor: Send + Sync {
    fn advise(&self, profile: &ProgramProfile, measurement: &Measurement) -> Vec<String>;
}

/// Window approaches the boundary from below only.
fn within(value: f64, boundary: f64, window: f64) -> bool {
    value >= boundary - window - EDGE_EPSILON && value <= boundary
}

/// Warns when a value sits in `[boundary - tolerance, boundary]`.
#[derive(Debug, Clone, Default)]
pub struct ThresholdAdvisor {
    tolerance: AdvisoryTolerance,
}

impl ThresholdAdvisor {
    pub fn new(tolerance: AdvisoryTolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> &AdvisoryTolerance {
        &self.tolerance
    }
}

fn measured(dimension: Dimension, measurement: &Measurement, units: UnitSystem) -> f64 {
    match dimension {
        Dimension::Length => measurement.length,
        Dimension::Width => measurement.width,
        Dimension::Height => measurement.height,
        Dimension::Girth => measurement.girth(),
        Dimension::Weight => measurement.weight,
        Dimension::Volume => measurement.volume() * units.centimetres_per_unit().powi(3),
    }
}

impl Advisor for ThresholdAdvisor {
    fn advise(&self, profile: &ProgramProfile, measurement: &Measurement) -> Vec<String> {
        let units = profile.units;
        let mut advisories = Vec::new();

        for (dimension, thresholds) in profile.thresholds.classes() {
            let value = measured(dimension, measurement, units);
            let unit = dimension.unit(units);

            for threshold in thresholds {
                let window = self.tolerance.window(dimension, units, threshold.value);
                if within(value, threshold.value, window) {
                    advisories.push(format!(
                        "{} {:.2} {unit} is within {:.2} {unit} of the {} {unit} boundary ({})",
                        dimension.label(),
                        value,
                        window,
                        threshold.value,
                        threshold.label
                    ));
                }
            }
        }

        let channels = profile.channels();
        let unit = units.weight_unit();
        for threshold in profile.thresholds.billing {
            let Some(channel) = channels
                .iter()
                .find(|channel| channel.name() == threshold.channel)
            else {
                continue;
            };
            let result = channel.evaluate(measurement, Destination::default());
            let value = match threshold.measure {
                BilledWeight::Chargeable => result.chargeable_weight,
                BilledWeight::Volumetric => result.dimensional_weight,
            };
            let window = self.tolerance.window(Dimension::Weight, units, threshold.value);
            if within(value, threshold.value, window) {
                advisories.push(format!(
                    "{} {:.2} {unit} on {} is within {:.2} {unit} of the {} {unit} boundary ({})",
                    threshold.measure.label(),
                    value,
                    threshold.channel,
                    window,
                    threshold.value,
                    threshold.label
                ));
            }
        }

        advisories
    }
}

/// Advisor that never warns.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAdvisor;

impl Advisor for SilentAdvisor {
    fn advise(&self, _profile: &ProgramProfile, _measurement: &Measurement) -> Vec<String> {
        Vec::new()
    }
}
