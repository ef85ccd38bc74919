use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{RawListing, RiskAssessment};
use super::evaluation::RiskAssessmentEngine;
use crate::listings::baseline::NeighborhoodBaseline;
use crate::listings::capture::ListingPage;

/// Service pairing the assessment engine with the loaded neighborhood baseline.
pub struct ListingRiskService {
    engine: Arc<RiskAssessmentEngine>,
    baseline: Arc<NeighborhoodBaseline>,
}

impl ListingRiskService {
    pub fn new(engine: Arc<RiskAssessmentEngine>, baseline: Arc<NeighborhoodBaseline>) -> Self {
        Self { engine, baseline }
    }

    pub fn standard(baseline: NeighborhoodBaseline) -> Self {
        Self::new(
            Arc::new(RiskAssessmentEngine::standard()),
            Arc::new(baseline),
        )
    }

    pub fn baseline(&self) -> &NeighborhoodBaseline {
        &self.baseline
    }

    pub fn assess(&self, raw: &RawListing) -> RiskAssessment {
        let assessment = self.engine.assess(raw, &self.baseline);

        match assessment.listing.neighborhood.as_deref() {
            Some(neighborhood) if !self.baseline.contains(neighborhood) => {
                debug!(neighborhood, "no baseline averages; price risk not scored");
            }
            None => debug!("address has no recognizable neighborhood"),
            Some(_) => {}
        }

        let breakdown = &assessment.breakdown;
        info!(
            neighborhood = assessment.listing.neighborhood.as_deref().unwrap_or("-"),
            grade = ?breakdown.grade,
            total_score = breakdown.total_score,
            price_score = breakdown.price_score,
            keyword_count = breakdown.keyword_count,
            fee_score = breakdown.fee_score,
            "listing assessed"
        );

        assessment
    }

    pub fn assess_page(&self, page: &ListingPage) -> RiskAssessment {
        self.assess(&page.to_raw_listing())
    }
}
