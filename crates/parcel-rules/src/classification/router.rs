use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::advisory::Advisor;
use super::catalog::{CandidateSource, ProgramProfile};
use super::domain::{ClassifyOptions, Destination, ProgramId, UnitSystem};
use super::engine::ClassificationEngine;
use super::units::{RawMeasurement, RawQuantity};
use crate::error::AppError;

/// Body of `POST /api/v1/classify`; quantities accept unit suffixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub program: Option<String>,
    pub length: RawQuantity,
    pub width: RawQuantity,
    pub height: RawQuantity,
    pub weight: RawQuantity,
    #[serde(default)]
    pub destination: Destination,
}

impl ClassifyRequest {
    fn measurement(&self) -> RawMeasurement {
        RawMeasurement::new(
            self.length.clone(),
            self.width.clone(),
            self.height.clone(),
            self.weight.clone(),
        )
    }
}

/// Catalog entry served by `GET /api/v1/programs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramSummary {
    pub program: ProgramId,
    pub units: UnitSystem,
    pub length_unit: &'static str,
    pub weight_unit: &'static str,
    pub banded: bool,
    pub channels: Vec<&'static str>,
}

impl From<&ProgramProfile> for ProgramSummary {
    fn from(profile: &ProgramProfile) -> Self {
        Self {
            program: profile.id,
            units: profile.units,
            length_unit: profile.units.length_unit(),
            weight_unit: profile.units.weight_unit(),
            banded: matches!(profile.candidates, CandidateSource::Banded { .. }),
            channels: profile
                .channels()
                .iter()
                .map(|channel| channel.name())
                .collect(),
        }
    }
}

/// Router exposing classification and catalog endpoints.
pub fn classification_router<A>(engine: Arc<ClassificationEngine<A>>) -> Router
where
    A: Advisor + 'static,
{
    Router::new()
        .route("/api/v1/classify", post(classify_handler::<A>))
        .route("/api/v1/programs", get(programs_handler::<A>))
        .with_state(engine)
}

pub(crate) async fn classify_handler<A>(
    State(engine): State<Arc<ClassificationEngine<A>>>,
    axum::Json(request): axum::Json<ClassifyRequest>,
) -> Response
where
    A: Advisor + 'static,
{
    let program = request
        .program
        .clone()
        .unwrap_or_else(|| engine.default_program().code().to_string());
    let options = ClassifyOptions {
        destination: request.destination,
    };

    match engine.classify_raw(&program, &request.measurement(), &options) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn programs_handler<A>(
    State(engine): State<Arc<ClassificationEngine<A>>>,
) -> Response
where
    A: Advisor + 'static,
{
    let programs: Vec<ProgramSummary> = engine
        .catalog()
        .profiles()
        .map(ProgramSummary::from)
        .collect();
    (
        StatusCode::OK,
        axum::Json(json!({
            "default_program": engine.default_program(),
            "programs": programs,
        })),
    )
        .into_response()
}
