use listing_risk::error::AppError;
use listing_risk::listings::assessment::{ListingRiskService, RiskAssessmentEngine};
use listing_risk::listings::baseline::BaselineImporter;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the baseline once and wires it to a standard engine.
pub(crate) fn load_service(baseline_csv: &Path) -> Result<ListingRiskService, AppError> {
    let baseline = BaselineImporter::from_path(baseline_csv)?;
    if baseline.is_empty() {
        warn!(
            path = %baseline_csv.display(),
            "baseline has no usable rows; price risk will never be scored"
        );
    }

    Ok(ListingRiskService::new(
        Arc::new(RiskAssessmentEngine::standard()),
        Arc::new(baseline),
    ))
}
