use super::super::domain::{RiskBreakdown, RiskGrade};
use super::super::keywords::KeywordScan;
use super::fee::FeeAssessment;

/// Inclusive upper bound of each grade; anything above the last bound is `Risk`.
const GRADE_BOUNDARIES: [(u32, RiskGrade); 3] = [
    (3, RiskGrade::Low),
    (7, RiskGrade::Moderate),
    (12, RiskGrade::Caution),
];

pub fn grade_for(total_score: u32) -> RiskGrade {
    GRADE_BOUNDARIES
        .iter()
        .find(|(upper, _)| total_score <= *upper)
        .map(|(_, grade)| *grade)
        .unwrap_or(RiskGrade::Risk)
}

pub(crate) fn aggregate(
    price_score: u32,
    keywords: KeywordScan,
    fee: FeeAssessment,
) -> RiskBreakdown {
    let total_score = price_score + keywords.count + fee.score;

    RiskBreakdown {
        price_score,
        keyword_count: keywords.count,
        found_keywords: keywords.found,
        fee_score: fee.score,
        fee_verdict: fee.verdict,
        fee_included_categories: fee.included_categories,
        total_score,
        grade: grade_for(total_score),
    }
}
