use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use super::domain::{RawListing, RiskAssessment};
use super::service::ListingRiskService;
use crate::listings::capture::ListingPage;

/// Router builder exposing the assessment endpoints.
pub fn assessment_router(service: Arc<ListingRiskService>) -> Router {
    Router::new()
        .route("/api/v1/listings/assess", post(assess_handler))
        .route("/api/v1/listings/assess/page", post(assess_page_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<ListingRiskService>>,
    Json(raw): Json<RawListing>,
) -> Json<RiskAssessment> {
    Json(service.assess(&raw))
}

pub(crate) async fn assess_page_handler(
    State(service): State<Arc<ListingRiskService>>,
    Json(page): Json<ListingPage>,
) -> Json<RiskAssessment> {
    Json(service.assess_page(&page))
}
