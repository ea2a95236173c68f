//! Parcel channel classification.
//!
//! A measurement is gated against the program's hard limits, narrowed to the
//! candidate channels of its band, classified per channel by first-match tier
//! ladders, and ranked by displayed chargeable weight. Boundary advisories run
//! alongside and never change a result.

pub mod advisory;
pub mod catalog;
pub mod domain;
mod engine;
pub mod limits;
mod ranking;
pub mod router;
pub mod rules;
pub mod units;

#[cfg(test)]
mod tests;

pub use advisory::{Advisor, AdvisoryTolerance, SilentAdvisor, ThresholdAdvisor};
pub use catalog::{CandidateSet, Catalog, ProgramProfile};
pub use domain::{
    round2, ClassificationResponse, ClassificationResult, ClassifyOptions, Destination,
    Measurement, MeasurementError, ProgramId, UnitSystem, NOT_APPLICABLE,
};
pub use engine::ClassificationEngine;
pub use limits::{HardLimitSpec, RejectionReason};
pub use ranking::recommend;
pub use router::classification_router;
pub use rules::{ChannelRule, NO_MATCHING_RULE};
pub use units::{RawMeasurement, RawQuantity};

/// Failures that stop a classification before any channel is evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("unknown program '{0}'")]
    UnknownProgram(String),
    #[error("invalid measurement: {0}")]
    Measurement(#[from] MeasurementError),
}
