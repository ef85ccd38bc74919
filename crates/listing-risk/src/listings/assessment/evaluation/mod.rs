mod config;
mod fee;
mod grade;
mod price;

pub use config::{AssessmentConfig, InclusionCategory, PriceThresholds};
pub use grade::grade_for;

use super::domain::{RawListing, RiskAssessment};
use super::explanation::explain;
use super::keywords::KeywordScanner;
use super::normalizer::normalize_listing;
use crate::listings::baseline::NeighborhoodBaseline;
use fee::FeeRiskEvaluator;
use price::{price_ratios, PriceRiskEvaluator};

/// Stateless engine that turns one raw listing into an explained risk verdict.
///
/// The phrase tables are fixed at construction, so a single engine can be
/// shared across threads and reused for any number of listings.
#[derive(Debug, Clone)]
pub struct RiskAssessmentEngine {
    keywords: KeywordScanner,
    prices: PriceRiskEvaluator,
    fees: FeeRiskEvaluator,
}

impl RiskAssessmentEngine {
    pub fn new(config: AssessmentConfig) -> Self {
        let AssessmentConfig {
            suspicious_keywords,
            inclusion_categories,
            price_thresholds,
        } = config;

        Self {
            keywords: KeywordScanner::new(suspicious_keywords),
            prices: PriceRiskEvaluator::new(price_thresholds),
            fees: FeeRiskEvaluator::new(inclusion_categories),
        }
    }

    pub fn standard() -> Self {
        Self::new(AssessmentConfig::standard())
    }

    pub fn assess(&self, raw: &RawListing, baseline: &NeighborhoodBaseline) -> RiskAssessment {
        let listing = normalize_listing(raw);
        let averages = listing
            .neighborhood
            .as_deref()
            .and_then(|neighborhood| baseline.lookup(neighborhood));

        let ratios = price_ratios(&listing, averages);
        let price_score = self.prices.score(&ratios);
        let keywords = self.keywords.scan(listing.description_text.as_deref());
        let fee = self.fees.evaluate(
            listing.management_fee_amount,
            listing.description_text.as_deref(),
        );

        let breakdown = grade::aggregate(price_score, keywords, fee);
        let statements = explain(&listing, &ratios, &breakdown);

        RiskAssessment {
            raw: raw.clone(),
            grade_label: breakdown.grade.label(),
            fee_verdict_label: breakdown.fee_verdict.label(),
            listing,
            ratios,
            breakdown,
            statements,
        }
    }
}

impl Default for RiskAssessmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}
