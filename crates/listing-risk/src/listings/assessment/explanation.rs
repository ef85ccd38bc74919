use super::domain::{FeeVerdict, NormalizedListing, RatioSet, RiskBreakdown};

/// Price gaps smaller than this percentage are not worth mentioning.
const NOTABLE_PRICE_GAP_PCT: f64 = 10.0;

/// Renders the justification for an assessment.
///
/// Statements are produced in a fixed order and consumers render them as-is:
/// neighborhood/price gaps, fee verdict, included fee services, suspicious
/// phrases, then the score summary which is always present.
pub fn explain(
    listing: &NormalizedListing,
    ratios: &RatioSet,
    breakdown: &RiskBreakdown,
) -> Vec<String> {
    let mut statements = Vec::new();

    match listing.neighborhood.as_deref() {
        None => statements.push("주소에서 동 정보를 추출하지 못했습니다.".to_string()),
        Some(neighborhood) => {
            let gaps = [
                ("보증금이", "평균 보증금보다", ratios.deposit_ratio),
                ("월세가", "평균 월세보다", ratios.rent_ratio),
            ];
            statements.extend(gaps.into_iter().filter_map(|(subject, comparison, ratio)| {
                price_gap_statement(subject, comparison, neighborhood, ratio)
            }));
        }
    }

    match breakdown.fee_verdict {
        FeeVerdict::Risk => match listing.management_fee_amount {
            Some(won) => statements.push(format!(
                "관리비가 {}원으로 높은 편이며, 포함 항목이 적어 '{}' 판정입니다.",
                format_won(won),
                FeeVerdict::Risk.label()
            )),
            None => statements.push(
                "관리비를 확인할 수 없어('확인불가' 또는 미표기) 위험도가 높습니다.".to_string(),
            ),
        },
        FeeVerdict::Caution => statements.push(format!(
            "관리비가 다소 높은 편이거나 포함 항목이 충분하지 않아 '{}' 판정입니다.",
            FeeVerdict::Caution.label()
        )),
        FeeVerdict::Normal => {}
    }

    if !breakdown.fee_included_categories.is_empty() {
        statements.push(format!(
            "관리비에 포함된 항목: {}",
            breakdown.fee_included_categories.join(", ")
        ));
    }

    if !breakdown.found_keywords.is_empty() {
        statements.push(format!(
            "상세 설명에서 다음 위험 키워드가 발견되었습니다: {}",
            breakdown.found_keywords.join(", ")
        ));
    }

    statements.push(format!(
        "가격위험점수: {}, 키워드위험개수: {}, 관리비위험점수: {}, 총위험점수: {}점",
        breakdown.price_score, breakdown.keyword_count, breakdown.fee_score, breakdown.total_score
    ));

    statements
}

fn price_gap_statement(
    subject: &str,
    comparison: &str,
    neighborhood: &str,
    ratio: Option<f64>,
) -> Option<String> {
    // compared at the one-decimal precision the statement prints
    let gap_pct = ((1.0 - ratio?) * 1000.0).round() / 10.0;
    if gap_pct.abs() < NOTABLE_PRICE_GAP_PCT {
        return None;
    }

    let direction = if gap_pct > 0.0 { "저렴합니다" } else { "비쌉니다" };
    Some(format!(
        "{subject} {neighborhood} {comparison} 약 {:.1}% {direction}.",
        gap_pct.abs()
    ))
}

/// Whole won with thousands separators, e.g. `95,000`.
pub(crate) fn format_won(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn won_amounts_are_grouped_by_thousands() {
        assert_eq!(format_won(0.0), "0");
        assert_eq!(format_won(950.0), "950");
        assert_eq!(format_won(95_000.0), "95,000");
        assert_eq!(format_won(1_250_000.9), "1,250,000");
    }

    #[test]
    fn small_price_gaps_are_suppressed() {
        assert_eq!(
            price_gap_statement("보증금이", "평균 보증금보다", "상월곡동", Some(1000.0 / 1100.0)),
            None
        );
        assert_eq!(
            price_gap_statement("보증금이", "평균 보증금보다", "상월곡동", None),
            None
        );
    }

    #[test]
    fn exact_ten_percent_gaps_are_reported_both_ways() {
        assert_eq!(
            price_gap_statement("보증금이", "평균 보증금보다", "상월곡동", Some(990.0 / 1100.0))
                .as_deref(),
            Some("보증금이 상월곡동 평균 보증금보다 약 10.0% 저렴합니다.")
        );
        assert_eq!(
            price_gap_statement("월세가", "평균 월세보다", "상월곡동", Some(66.0 / 60.0))
                .as_deref(),
            Some("월세가 상월곡동 평균 월세보다 약 10.0% 비쌉니다.")
        );
        assert_eq!(
            price_gap_statement("월세가", "평균 월세보다", "상월곡동", Some(0.906)),
            None
        );
    }

    #[test]
    fn price_gaps_name_direction_and_magnitude() {
        assert_eq!(
            price_gap_statement("월세가", "평균 월세보다", "상월곡동", Some(50.0 / 60.0))
                .as_deref(),
            Some("월세가 상월곡동 평균 월세보다 약 16.7% 저렴합니다.")
        );
        assert_eq!(
            price_gap_statement("월세가", "평균 월세보다", "상월곡동", Some(1.25)).as_deref(),
            Some("월세가 상월곡동 평균 월세보다 약 25.0% 비쌉니다.")
        );
    }
}
