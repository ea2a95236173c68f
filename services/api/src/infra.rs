use metrics_exporter_prometheus::PrometheusHandle;
use parcel_rules::classification::{Catalog, ClassificationEngine};
use parcel_rules::config::ClassifierConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine over the built-in catalog, tuned by the classifier settings.
pub(crate) fn build_engine(config: &ClassifierConfig) -> ClassificationEngine {
    ClassificationEngine::new(Catalog::standard(), config.tolerance)
        .with_default_program(config.default_program)
}
