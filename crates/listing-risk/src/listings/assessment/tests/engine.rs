use super::common::*;
use crate::listings::assessment::{
    AssessmentConfig, FeeVerdict, RawListing, RiskAssessmentEngine, RiskGrade,
};

#[test]
fn fair_listing_with_modest_fee_grades_low() {
    let assessment = engine().assess(&fair_listing(), &baseline());
    let breakdown = &assessment.breakdown;

    let deposit_ratio = assessment.ratios.deposit_ratio.expect("deposit ratio");
    let rent_ratio = assessment.ratios.rent_ratio.expect("rent ratio");
    assert!((deposit_ratio - 0.909).abs() < 0.001);
    assert!((rent_ratio - 0.833).abs() < 0.001);

    assert_eq!(assessment.listing.management_fee_amount, Some(95_000.0));
    assert_eq!(breakdown.price_score, 0);
    assert_eq!(breakdown.keyword_count, 0);
    assert_eq!(breakdown.fee_score, 1);
    assert_eq!(breakdown.fee_verdict, FeeVerdict::Caution);
    assert_eq!(breakdown.total_score, 1);
    assert_eq!(breakdown.grade, RiskGrade::Low);
    assert_eq!(assessment.grade_label, "낮음");
    assert_eq!(assessment.fee_verdict_label, "주의");
}

#[test]
fn missing_fee_is_maximal_fee_risk_regardless_of_other_fields() {
    let raw = listing(
        "1,000",
        "50",
        None,
        Some("수도, 인터넷, 전기, 가스, 청소, 엘리베이터 모두 포함"),
    );

    let assessment = engine().assess(&raw, &baseline());

    assert_eq!(assessment.breakdown.fee_score, 3);
    assert_eq!(assessment.breakdown.fee_verdict, FeeVerdict::Risk);
    assert_eq!(assessment.breakdown.fee_included_categories.len(), 6);
}

#[test]
fn unverifiable_fee_marker_counts_as_missing() {
    let raw = listing("1,000", "50", Some("관리비 확인불가"), None);

    let assessment = engine().assess(&raw, &baseline());

    assert_eq!(assessment.listing.management_fee_amount, None);
    assert_eq!(assessment.breakdown.fee_score, 3);
    assert_eq!(assessment.breakdown.fee_verdict, FeeVerdict::Risk);
}

#[test]
fn keywords_are_reported_in_configured_order() {
    let raw = listing(
        "1,000",
        "50",
        Some("관리비 5만원"),
        Some("실입주금 300만원이면 입주 가능! 단기임대도 문의 주세요."),
    );

    let assessment = engine().assess(&raw, &baseline());

    assert_eq!(assessment.breakdown.keyword_count, 2);
    assert_eq!(
        assessment.breakdown.found_keywords,
        vec!["단기임대", "실입주금"]
    );
}

#[test]
fn empty_listing_still_produces_a_complete_verdict() {
    let assessment = engine().assess(&RawListing::default(), &baseline());
    let breakdown = &assessment.breakdown;

    assert_eq!(assessment.ratios.deposit_ratio, None);
    assert_eq!(assessment.ratios.rent_ratio, None);
    assert_eq!(breakdown.price_score, 0);
    assert_eq!(breakdown.keyword_count, 0);
    assert_eq!(breakdown.fee_score, 3);
    assert_eq!(breakdown.fee_verdict, FeeVerdict::Risk);
    assert_eq!(breakdown.total_score, 3);
    assert_eq!(breakdown.grade, RiskGrade::Low);
}

#[test]
fn unknown_neighborhood_contributes_no_price_risk() {
    let mut raw = listing("300", "20", Some("관리비 5만원"), None);
    raw.address = Some("서울시 성북구 하월곡동".to_string());

    let assessment = engine().assess(&raw, &baseline());

    assert_eq!(assessment.listing.neighborhood.as_deref(), Some("하월곡동"));
    assert_eq!(assessment.ratios.deposit_ratio, None);
    assert_eq!(assessment.breakdown.price_score, 0);
}

#[test]
fn ratio_thresholds_are_inclusive() {
    let mut at_edges = listing("700", "40", Some("관리비 5만원"), None);
    at_edges.address = Some("서울시 성북구 종암동".to_string());
    let assessment = engine().assess(&at_edges, &baseline());
    assert_eq!(assessment.ratios.deposit_ratio, Some(0.7));
    assert_eq!(assessment.ratios.rent_ratio, Some(0.8));
    assert_eq!(assessment.breakdown.price_score, 6);

    let mut just_above = listing("810", "50", Some("관리비 5만원"), None);
    just_above.address = Some("서울시 성북구 종암동".to_string());
    let assessment = engine().assess(&just_above, &baseline());
    assert_eq!(assessment.breakdown.price_score, 0);
}

#[test]
fn bait_listing_reaches_the_top_grade() {
    let raw = listing(
        "500",
        "40",
        Some("관리비 16만원"),
        Some("단기임대 가능, 실입주금 100만원, 당일계약 시 할인. 수도 포함"),
    );

    let assessment = engine().assess(&raw, &baseline());
    let breakdown = &assessment.breakdown;

    assert_eq!(breakdown.price_score, 8);
    assert_eq!(breakdown.keyword_count, 3);
    assert_eq!(breakdown.fee_included_categories, vec!["수도"]);
    assert_eq!(breakdown.fee_score, 3);
    assert_eq!(breakdown.total_score, 14);
    assert_eq!(breakdown.grade, RiskGrade::Risk);
    assert_eq!(assessment.grade_label, "위험");
}

#[test]
fn total_is_always_the_sum_of_sub_scores() {
    let listings = [
        fair_listing(),
        RawListing::default(),
        listing("500", "40", Some("관리비 12만원"), Some("저금리 대출이자 지원, 난방 포함")),
        listing("문의", "문의", Some("관리비 20만원"), Some("수도 인터넷 전기 가스 청소")),
    ];

    for raw in &listings {
        let breakdown = engine().assess(raw, &baseline()).breakdown;
        assert_eq!(
            breakdown.total_score,
            breakdown.price_score + breakdown.keyword_count + breakdown.fee_score
        );
    }
}

#[test]
fn repeated_assessments_are_identical() {
    let engine = engine();
    let baseline = baseline();
    let raw = listing(
        "500",
        "40",
        Some("관리비 12만원"),
        Some("보증금 대납 가능, 계약 서두르세요"),
    );

    let first = engine.assess(&raw, &baseline);
    let second = engine.assess(&raw, &baseline);

    assert_eq!(first, second);
    assert_eq!(first.breakdown.found_keywords, vec!["보증금 대납", "계약 서두르세요"]);
}

#[test]
fn custom_configuration_replaces_the_phrase_tables() {
    let mut config = AssessmentConfig::standard();
    config.suspicious_keywords = vec!["급매".to_string()];
    let engine = RiskAssessmentEngine::new(config);

    let raw = listing("1,000", "50", Some("관리비 5만원"), Some("급매! 단기임대"));
    let assessment = engine.assess(&raw, &baseline());

    assert_eq!(assessment.breakdown.found_keywords, vec!["급매"]);
}
