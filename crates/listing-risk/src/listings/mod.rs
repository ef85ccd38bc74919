//! Rental listing intake and fraud-risk assessment.

pub mod assessment;
pub mod baseline;
pub mod capture;

pub use assessment::{RawListing, RiskAssessment, RiskAssessmentEngine};
pub use baseline::{BaselineImporter, NeighborhoodBaseline};
