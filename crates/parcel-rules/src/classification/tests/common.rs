use axum::response::Response;
use serde_json::Value;

use crate::classification::{
    Catalog, ChannelRule, ClassificationEngine, ClassificationResponse, ClassificationResult,
    ClassifyOptions, Measurement, ProgramId,
};

pub(super) fn engine() -> ClassificationEngine {
    ClassificationEngine::standard()
}

pub(super) fn measurement(length: f64, width: f64, height: f64, weight: f64) -> Measurement {
    Measurement::new(length, width, height, weight).expect("valid measurement")
}

pub(super) fn classify(program: ProgramId, measurement: Measurement) -> ClassificationResponse {
    engine()
        .classify(program, &measurement, &ClassifyOptions::default())
        .expect("program is registered")
}

pub(super) fn channel(program: ProgramId, name: &str) -> ChannelRule {
    Catalog::standard()
        .profile(program)
        .expect("program is registered")
        .channels()
        .into_iter()
        .find(|channel| channel.name() == name)
        .unwrap_or_else(|| panic!("{name} is not a {program} channel"))
}

pub(super) fn result_for<'a>(
    response: &'a ClassificationResponse,
    channel: &str,
) -> &'a ClassificationResult {
    response
        .result_for(channel)
        .unwrap_or_else(|| panic!("no result for {channel}"))
}

pub(super) fn eligible_result(
    channel: &str,
    chargeable: f64,
    dimensional: f64,
) -> ClassificationResult {
    ClassificationResult::eligible(channel, "standard", dimensional, chargeable, None)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// Grid of parcels from letter-sized to freight-sized, in whatever units a program uses.
pub(super) fn measurement_grid() -> Vec<Measurement> {
    let sides = [0.5, 3.2, 11.0, 17.5, 24.0, 47.9, 60.0, 97.0, 130.0];
    let weights = [0.2, 0.9, 4.0, 9.5, 24.0, 31.0, 55.0, 120.0];
    let mut grid = Vec::new();
    for &length in &sides {
        for &width in sides.iter().filter(|&&side| side <= length) {
            for &height in sides.iter().filter(|&&side| side <= width) {
                for &weight in &weights {
                    grid.push(measurement(length, width, height, weight));
                }
            }
        }
    }
    grid
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
