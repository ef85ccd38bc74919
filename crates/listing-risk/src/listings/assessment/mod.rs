//! Risk assessment of a single rental listing.
//!
//! Raw fields are normalized, then scored independently on price (against the
//! neighborhood baseline), suspicious phrasing and maintenance-fee disclosure.
//! The sub-scores are summed into a graded total and explained in plain text.

pub mod domain;
pub(crate) mod evaluation;
pub mod explanation;
pub mod keywords;
pub mod normalizer;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    FeeVerdict, NormalizedListing, RatioSet, RawListing, RiskAssessment, RiskBreakdown, RiskGrade,
};
pub use evaluation::{
    grade_for, AssessmentConfig, InclusionCategory, PriceThresholds, RiskAssessmentEngine,
};
pub use keywords::{KeywordScan, KeywordScanner};
pub use normalizer::ParseError;
pub use router::assessment_router;
pub use service::ListingRiskService;
