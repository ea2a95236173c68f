use std::sync::Arc;

use tracing::{debug, info};

use super::advisory::{Advisor, AdvisoryTolerance, ThresholdAdvisor};
use super::catalog::{CandidateSet, Catalog, ProgramProfile};
use super::domain::{
    ClassificationResponse, ClassificationResult, ClassifyOptions, Measurement, ProgramId,
};
use super::limits::RejectionReason;
use super::ranking::recommend;
use super::units::RawMeasurement;
use super::ClassifyError;

/// Stateless classifier over a shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct ClassificationEngine<A = ThresholdAdvisor> {
    catalog: Arc<Catalog>,
    advisor: A,
    default_program: ProgramId,
}

impl ClassificationEngine<ThresholdAdvisor> {
    pub fn new(catalog: Arc<Catalog>, tolerance: AdvisoryTolerance) -> Self {
        Self::with_advisor(catalog, ThresholdAdvisor::new(tolerance))
    }

    /// Built-in catalog with default advisory tolerances.
    pub fn standard() -> Self {
        Self::new(Catalog::standard(), AdvisoryTolerance::default())
    }
}

impl<A: Advisor> ClassificationEngine<A> {
    pub fn with_advisor(catalog: Arc<Catalog>, advisor: A) -> Self {
        Self {
            catalog,
            advisor,
            default_program: ProgramId::UsFbm,
        }
    }

    /// Program used when a request does not name one.
    pub fn with_default_program(mut self, program: ProgramId) -> Self {
        self.default_program = program;
        self
    }

    pub fn default_program(&self) -> ProgramId {
        self.default_program
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn profile(&self, program: ProgramId) -> Result<&ProgramProfile, ClassifyError> {
        self.catalog
            .profile(program)
            .ok_or_else(|| ClassifyError::UnknownProgram(program.code().to_string()))
    }

    pub fn check_limits(
        &self,
        program: ProgramId,
        measurement: &Measurement,
    ) -> Result<Option<RejectionReason>, ClassifyError> {
        let profile = self.profile(program)?;
        Ok(profile.limits.check(measurement, profile.units))
    }

    pub fn candidates(
        &self,
        program: ProgramId,
        measurement: &Measurement,
    ) -> Result<CandidateSet, ClassifyError> {
        Ok(self.profile(program)?.select(measurement))
    }

    pub fn advise(
        &self,
        program: ProgramId,
        measurement: &Measurement,
    ) -> Result<Vec<String>, ClassifyError> {
        let profile = self.profile(program)?;
        Ok(self.advisor.advise(profile, measurement))
    }

    /// Gate, select, evaluate, rank and merge advisories for one measurement.
    pub fn classify(
        &self,
        program: ProgramId,
        measurement: &Measurement,
        options: &ClassifyOptions,
    ) -> Result<ClassificationResponse, ClassifyError> {
        let profile = self.profile(program)?;
        let mut response = ClassificationResponse {
            program,
            units: profile.units,
            measurement: *measurement,
            girth: measurement.girth(),
            rejected: None,
            band: None,
            notice: None,
            results: Vec::new(),
            advisories: Vec::new(),
            recommended: None,
        };

        if let Some(reason) = profile.limits.check(measurement, profile.units) {
            info!(program = %program, reason = %reason, "measurement rejected by hard limits");
            response.rejected = Some(reason.to_string());
            return Ok(response);
        }

        let candidates = profile.select(measurement);
        response.band = candidates.band.map(str::to_string);
        response.notice = candidates.note.map(str::to_string);
        if candidates.is_empty() {
            info!(
                program = %program,
                notice = candidates.note.unwrap_or_default(),
                "no candidate channels for measurement"
            );
        }

        response.results = candidates
            .channels
            .iter()
            .map(|channel| {
                let result = channel.evaluate(measurement, options.destination);
                log_result(program, &result);
                result
            })
            .collect();
        response.recommended = recommend(&response.results);
        response.advisories = self.advisor.advise(profile, measurement);

        Ok(response)
    }

    /// Parses the program code and unit-suffixed quantities, then classifies.
    pub fn classify_raw(
        &self,
        program: &str,
        raw: &RawMeasurement,
        options: &ClassifyOptions,
    ) -> Result<ClassificationResponse, ClassifyError> {
        let program: ProgramId = program.parse()?;
        let units = self.profile(program)?.units;
        let measurement = raw.normalize(units)?;
        self.classify(program, &measurement, options)
    }
}

fn log_result(program: ProgramId, result: &ClassificationResult) {
    debug!(
        program = %program,
        channel = %result.channel,
        eligible = result.eligible,
        tier = %result.tier,
        chargeable = result.chargeable_weight,
        "channel evaluated"
    );
}
