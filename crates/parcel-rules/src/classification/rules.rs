//! Channel rules: weight formulas and first-match tier ladders.
//!
//! Every channel is static data. A [`TieredChannel`] walks its tiers top to
//! bottom and the first [`Rule`] that holds decides the outcome; a
//! [`SurchargeChannel`] never rejects and instead sums the fee of every
//! boundary the parcel breaches.

use super::domain::{round2, ClassificationResult, Destination, Measurement, UnitSystem};

pub const NO_MATCHING_RULE: &str = "no matching rule";

/// Quantity a predicate can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Length,
    Width,
    Height,
    Girth,
    Weight,
    /// Dimensional (volumetric) weight reported by the channel.
    DimWeight,
    Chargeable,
    /// Chargeable weight under a channel's secondary divisor.
    AltChargeable,
    /// Volume in cubic centimetres, whatever the program's units.
    VolumeCm3,
    WidthPlusHeight,
    /// Area of the two largest sides, in square metres.
    FaceAreaM2,
}

/// Boolean condition over [`Metrics`]. Ranges are `lo < x <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Always,
    All(&'static [Rule]),
    Any(&'static [Rule]),
    Above(Metric, f64),
    AtLeast(Metric, f64),
    Below(Metric, f64),
    AtMost(Metric, f64),
    Between(Metric, f64, f64),
}

impl Rule {
    pub fn holds(&self, metrics: &Metrics) -> bool {
        match *self {
            Rule::Always => true,
            Rule::All(rules) => rules.iter().all(|rule| rule.holds(metrics)),
            Rule::Any(rules) => rules.iter().any(|rule| rule.holds(metrics)),
            Rule::Above(metric, bound) => metrics.value(metric) > bound,
            Rule::AtLeast(metric, bound) => metrics.value(metric) >= bound,
            Rule::Below(metric, bound) => metrics.value(metric) < bound,
            Rule::AtMost(metric, bound) => metrics.value(metric) <= bound,
            Rule::Between(metric, lo, hi) => {
                let value = metrics.value(metric);
                lo < value && value <= hi
            }
        }
    }
}

/// Derived quantities a channel's ladder is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub girth: f64,
    pub weight: f64,
    pub dim_weight: f64,
    pub chargeable: f64,
    pub alt_chargeable: f64,
    pub volume_cm3: f64,
    pub face_area_m2: f64,
}

impl Metrics {
    /// Metrics of the measurement as entered, with no channel formula applied.
    pub fn raw(measurement: &Measurement, units: UnitSystem) -> Self {
        Self::from_dimensions(
            Dimensions::exact(measurement),
            measurement.weight,
            units,
        )
    }

    fn from_dimensions(dims: Dimensions, weight: f64, units: UnitSystem) -> Self {
        let cm = units.centimetres_per_unit();
        let volume_cm3 = dims.volume * cm * cm * cm;

        let mut sides = [dims.length * cm, dims.width * cm, dims.height * cm];
        sides.sort_by(|a, b| b.total_cmp(a));
        let face_area_m2 = (sides[0] / 100.0) * (sides[1] / 100.0);

        Self {
            length: dims.length,
            width: dims.width,
            height: dims.height,
            girth: dims.girth,
            weight,
            dim_weight: 0.0,
            chargeable: weight,
            alt_chargeable: weight,
            volume_cm3,
            face_area_m2,
        }
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Length => self.length,
            Metric::Width => self.width,
            Metric::Height => self.height,
            Metric::Girth => self.girth,
            Metric::Weight => self.weight,
            Metric::DimWeight => self.dim_weight,
            Metric::Chargeable => self.chargeable,
            Metric::AltChargeable => self.alt_chargeable,
            Metric::VolumeCm3 => self.volume_cm3,
            Metric::WidthPlusHeight => self.width + self.height,
            Metric::FaceAreaM2 => self.face_area_m2,
        }
    }
}

/// Whether a catalog measures parcels as entered or rounded up to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensioning {
    Exact,
    RoundUp,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Dimensions {
    length: f64,
    width: f64,
    height: f64,
    girth: f64,
    volume: f64,
}

impl Dimensions {
    fn exact(measurement: &Measurement) -> Self {
        Self {
            length: measurement.length,
            width: measurement.width,
            height: measurement.height,
            girth: measurement.girth(),
            volume: measurement.volume(),
        }
    }

    fn rounded_up(measurement: &Measurement) -> Self {
        let length = measurement.length.ceil();
        let width = measurement.width.ceil();
        let height = measurement.height.ceil();
        Self {
            length,
            width,
            height,
            girth: (length + 2.0 * (width + height)).ceil(),
            volume: length * width * height,
        }
    }

    fn resolve(mode: Dimensioning, measurement: &Measurement) -> Self {
        match mode {
            Dimensioning::Exact => Self::exact(measurement),
            Dimensioning::RoundUp => Self::rounded_up(measurement),
        }
    }
}

/// Flat chargeable-weight floor applied inside a girth/weight window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorStep {
    pub weight_below: f64,
    pub girth_from: f64,
    pub girth_below: f64,
    pub floor: f64,
}

/// Volumetric factors per destination, in kilograms per cubic metre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestinationFactors {
    pub other: f64,
    pub austria: f64,
    pub croatia: f64,
}

impl DestinationFactors {
    fn factor(&self, destination: Destination) -> f64 {
        match destination {
            Destination::Other => self.other,
            Destination::Austria => self.austria,
            Destination::Croatia => self.croatia,
        }
    }
}

/// How a channel derives dimensional and chargeable weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightBasis {
    Divisor(f64),
    /// Reports the primary divisor; the secondary only feeds `AltChargeable`.
    DualDivisor { primary: f64, secondary: f64 },
    /// Divisor picked by volume in cubic centimetres.
    VolumeSwitchedDivisor {
        volume_above_cm3: f64,
        large: f64,
        small: f64,
    },
    /// Divisor rule with flat floors; the first step whose window holds wins.
    SteppedFloor {
        divisor: f64,
        steps: &'static [FloorStep],
    },
    /// Billed on actual weight, no dimensional figure.
    ActualOnly,
    /// Actual weight rounded to two decimals before the ladder reads it.
    ActualToCents,
    /// Billed on actual weight, reporting volume in cubic centimetres.
    ActualWithVolume,
    PerCubicMetre(f64),
    PerCubicMetreByDestination(DestinationFactors),
}

impl WeightBasis {
    /// True when chargeable weight is always `max(dimensional, actual)`.
    pub fn honors_max_rule(&self) -> bool {
        matches!(
            self,
            WeightBasis::Divisor(_)
                | WeightBasis::DualDivisor { .. }
                | WeightBasis::VolumeSwitchedDivisor { .. }
                | WeightBasis::PerCubicMetre(_)
                | WeightBasis::PerCubicMetreByDestination(_)
        )
    }

    fn apply(&self, metrics: &mut Metrics, volume: f64, destination: Destination) {
        let weight = metrics.weight;
        match *self {
            WeightBasis::Divisor(divisor) => {
                metrics.dim_weight = volume / divisor;
                metrics.chargeable = metrics.dim_weight.max(weight);
                metrics.alt_chargeable = metrics.chargeable;
            }
            WeightBasis::DualDivisor { primary, secondary } => {
                metrics.dim_weight = volume / primary;
                metrics.chargeable = metrics.dim_weight.max(weight);
                metrics.alt_chargeable = (volume / secondary).max(weight);
            }
            WeightBasis::VolumeSwitchedDivisor {
                volume_above_cm3,
                large,
                small,
            } => {
                let divisor = if metrics.volume_cm3 > volume_above_cm3 {
                    large
                } else {
                    small
                };
                metrics.dim_weight = volume / divisor;
                metrics.chargeable = metrics.dim_weight.max(weight);
                metrics.alt_chargeable = metrics.chargeable;
            }
            WeightBasis::SteppedFloor { divisor, steps } => {
                let dim = volume / divisor;
                metrics.dim_weight = dim;
                metrics.chargeable = steps
                    .iter()
                    .find(|step| {
                        weight < step.weight_below
                            && step.girth_from <= metrics.girth
                            && metrics.girth < step.girth_below
                            && dim < step.floor
                    })
                    .map(|step| step.floor)
                    .unwrap_or_else(|| dim.max(weight));
                metrics.alt_chargeable = metrics.chargeable;
            }
            WeightBasis::ActualOnly => {
                metrics.dim_weight = 0.0;
                metrics.chargeable = weight;
                metrics.alt_chargeable = weight;
            }
            WeightBasis::ActualToCents => {
                let rounded = round2(weight);
                metrics.weight = rounded;
                metrics.dim_weight = 0.0;
                metrics.chargeable = rounded;
                metrics.alt_chargeable = rounded;
            }
            WeightBasis::ActualWithVolume => {
                metrics.dim_weight = metrics.volume_cm3;
                metrics.chargeable = weight;
                metrics.alt_chargeable = weight;
            }
            WeightBasis::PerCubicMetre(factor) => {
                metrics.dim_weight = metrics.volume_cm3 / 1_000_000.0 * factor;
                metrics.chargeable = metrics.dim_weight.max(weight);
                metrics.alt_chargeable = metrics.chargeable;
            }
            WeightBasis::PerCubicMetreByDestination(factors) => {
                metrics.dim_weight =
                    metrics.volume_cm3 / 1_000_000.0 * factors.factor(destination);
                metrics.chargeable = metrics.dim_weight.max(weight);
                metrics.alt_chargeable = metrics.chargeable;
            }
        }
    }
}

/// Decision attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Eligible(&'static str),
    /// Eligible, with a note (surcharge level, fee) carried in the reason field.
    EligibleWithNote(&'static str, &'static str),
    Ineligible(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub when: Rule,
    pub outcome: Outcome,
}

/// Channel classified by an ordered tier ladder.
#[derive(Debug)]
pub struct TieredChannel {
    pub name: &'static str,
    pub units: UnitSystem,
    pub dimensioning: Dimensioning,
    pub basis: WeightBasis,
    pub tiers: &'static [Tier],
}

impl TieredChannel {
    pub fn metrics(&self, measurement: &Measurement, destination: Destination) -> Metrics {
        let dims = Dimensions::resolve(self.dimensioning, measurement);
        let volume = dims.volume;
        let mut metrics = Metrics::from_dimensions(dims, measurement.weight, self.units);
        self.basis.apply(&mut metrics, volume, destination);
        metrics
    }

    pub fn evaluate(
        &self,
        measurement: &Measurement,
        destination: Destination,
    ) -> ClassificationResult {
        let metrics = self.metrics(measurement, destination);
        let dim = metrics.dim_weight;
        let charge = metrics.chargeable;

        let matched = self.tiers.iter().find(|tier| tier.when.holds(&metrics));
        match matched.map(|tier| tier.outcome) {
            Some(Outcome::Eligible(tier)) => {
                ClassificationResult::eligible(self.name, tier, dim, charge, None)
            }
            Some(Outcome::EligibleWithNote(tier, note)) => {
                ClassificationResult::eligible(self.name, tier, dim, charge, Some(note))
            }
            Some(Outcome::Ineligible(reason)) => {
                ClassificationResult::ineligible(self.name, reason, dim, charge)
            }
            None => ClassificationResult::ineligible(self.name, NO_MATCHING_RULE, dim, charge),
        }
    }
}

/// Fee added when a parcel breaches one boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surcharge {
    pub code: &'static str,
    pub when: Rule,
    pub fee: f64,
}

/// Channel that always ships and accumulates flat surcharges.
#[derive(Debug)]
pub struct SurchargeChannel {
    pub name: &'static str,
    pub units: UnitSystem,
    pub currency: &'static str,
    pub base_tier: &'static str,
    pub surcharged_tier: &'static str,
    pub surcharges: &'static [Surcharge],
}

impl SurchargeChannel {
    pub fn triggered(&self, measurement: &Measurement) -> Vec<&Surcharge> {
        let metrics = Metrics::raw(measurement, self.units);
        self.surcharges
            .iter()
            .filter(|surcharge| surcharge.when.holds(&metrics))
            .collect()
    }

    pub fn evaluate(&self, measurement: &Measurement) -> ClassificationResult {
        let volume = measurement.volume();
        let triggered = self.triggered(measurement);
        if triggered.is_empty() {
            return ClassificationResult::eligible(
                self.name,
                self.base_tier,
                volume,
                measurement.weight,
                None,
            );
        }

        let codes: Vec<&str> = triggered.iter().map(|surcharge| surcharge.code).collect();
        let total: f64 = triggered.iter().map(|surcharge| surcharge.fee).sum();
        let note = format!(
            "triggered: {}; surcharge total {} {:.2}",
            codes.join(","),
            self.currency,
            total
        );
        ClassificationResult::eligible(
            self.name,
            self.surcharged_tier,
            volume,
            measurement.weight,
            Some(&note),
        )
    }
}

/// Closed set of channel families registered in the program tables.
#[derive(Debug, Clone, Copy)]
pub enum ChannelRule {
    Tiered(&'static TieredChannel),
    Surcharge(&'static SurchargeChannel),
}

impl ChannelRule {
    pub fn name(&self) -> &'static str {
        match self {
            ChannelRule::Tiered(channel) => channel.name,
            ChannelRule::Surcharge(channel) => channel.name,
        }
    }

    pub fn units(&self) -> UnitSystem {
        match self {
            ChannelRule::Tiered(channel) => channel.units,
            ChannelRule::Surcharge(channel) => channel.units,
        }
    }

    /// Whether eligible results always satisfy `chargeable >= max(dim, actual)`.
    pub fn honors_max_rule(&self) -> bool {
        match self {
            ChannelRule::Tiered(channel) => channel.basis.honors_max_rule(),
            ChannelRule::Surcharge(_) => false,
        }
    }

    pub fn evaluate(
        &self,
        measurement: &Measurement,
        destination: Destination,
    ) -> ClassificationResult {
        match self {
            ChannelRule::Tiered(channel) => channel.evaluate(measurement, destination),
            ChannelRule::Surcharge(channel) => channel.evaluate(measurement),
        }
    }
}
