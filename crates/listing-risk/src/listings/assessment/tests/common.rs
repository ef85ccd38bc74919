use crate::listings::assessment::{RawListing, RiskAssessmentEngine};
use crate::listings::baseline::{NeighborhoodAverages, NeighborhoodBaseline};

pub(super) const ADDRESS: &str = "서울시 성북구 상월곡동";

pub(super) fn engine() -> RiskAssessmentEngine {
    RiskAssessmentEngine::standard()
}

/// 상월곡동 averages 1,100 / 60 (만원).
pub(super) fn baseline() -> NeighborhoodBaseline {
    vec![
        (
            "상월곡동",
            NeighborhoodAverages {
                average_deposit: 1100.0,
                average_rent: 60.0,
            },
        ),
        (
            "종암동",
            NeighborhoodAverages {
                average_deposit: 1000.0,
                average_rent: 50.0,
            },
        ),
    ]
    .into_iter()
    .collect()
}

pub(super) fn listing(
    deposit: &str,
    rent: &str,
    fee: Option<&str>,
    description: Option<&str>,
) -> RawListing {
    RawListing {
        address: Some(ADDRESS.to_string()),
        management_fee_text: fee.map(str::to_string),
        deposit_text: Some(deposit.to_string()),
        rent_text: Some(rent.to_string()),
        area_text: Some("21.45".to_string()),
        description_text: description.map(str::to_string),
    }
}

/// Deposit 1,000 / rent 50 against the 상월곡동 averages, fee 9.5만원, bland description.
pub(super) fn fair_listing() -> RawListing {
    listing(
        "1,000",
        "50",
        Some("관리비 9.5만원"),
        Some("상세 설명\n채광 좋은 남향 원룸입니다."),
    )
}
