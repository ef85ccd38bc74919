use super::common::*;
use crate::listings::assessment::RawListing;

#[test]
fn fair_listing_explains_rent_gap_and_fee_caution() {
    let assessment = engine().assess(&fair_listing(), &baseline());

    assert_eq!(
        assessment.statements,
        vec![
            "월세가 상월곡동 평균 월세보다 약 16.7% 저렴합니다.".to_string(),
            "관리비가 다소 높은 편이거나 포함 항목이 충분하지 않아 '주의' 판정입니다.".to_string(),
            "가격위험점수: 0, 키워드위험개수: 0, 관리비위험점수: 1, 총위험점수: 1점".to_string(),
        ]
    );
}

#[test]
fn missing_neighborhood_skips_price_statements() {
    let mut raw = listing("300", "20", Some("관리비 5만원"), None);
    raw.address = Some("성북구 어딘가".to_string());

    let statements = engine().assess(&raw, &baseline()).statements;

    assert_eq!(statements[0], "주소에서 동 정보를 추출하지 못했습니다.");
    assert!(statements.iter().all(|statement| !statement.contains('%')));
}

#[test]
fn empty_listing_reports_unknowns_and_summary() {
    let statements = engine().assess(&RawListing::default(), &baseline()).statements;

    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0], "주소에서 동 정보를 추출하지 못했습니다.");
    assert!(statements[1].contains("확인할 수 없어"));
    assert_eq!(
        statements[2],
        "가격위험점수: 0, 키워드위험개수: 0, 관리비위험점수: 3, 총위험점수: 3점"
    );
}

#[test]
fn statements_follow_the_fixed_order() {
    let raw = listing(
        "500",
        "80",
        Some("관리비 16만원"),
        Some("인터넷, 수도 포함. 단기임대 가능"),
    );

    let statements = engine().assess(&raw, &baseline()).statements;

    assert_eq!(
        statements,
        vec![
            "보증금이 상월곡동 평균 보증금보다 약 54.5% 저렴합니다.".to_string(),
            "월세가 상월곡동 평균 월세보다 약 33.3% 비쌉니다.".to_string(),
            "관리비가 160,000원으로 높은 편이며, 포함 항목이 적어 '위험' 판정입니다.".to_string(),
            "관리비에 포함된 항목: 수도, 인터넷/TV".to_string(),
            "상세 설명에서 다음 위험 키워드가 발견되었습니다: 단기임대".to_string(),
            "가격위험점수: 4, 키워드위험개수: 1, 관리비위험점수: 3, 총위험점수: 8점".to_string(),
        ]
    );
}

#[test]
fn normal_fee_produces_no_fee_verdict_statement() {
    let raw = listing("1,000", "58", Some("관리비 5만원"), Some("수도 포함"));

    let statements = engine().assess(&raw, &baseline()).statements;

    assert_eq!(
        statements,
        vec![
            "관리비에 포함된 항목: 수도".to_string(),
            "가격위험점수: 0, 키워드위험개수: 0, 관리비위험점수: 0, 총위험점수: 0점".to_string(),
        ]
    );
}

#[test]
fn ten_percent_discount_on_both_prices_is_explained() {
    let raw = listing("990", "54", Some("관리비 5만원"), None);

    let statements = engine().assess(&raw, &baseline()).statements;

    assert_eq!(
        statements,
        vec![
            "보증금이 상월곡동 평균 보증금보다 약 10.0% 저렴합니다.".to_string(),
            "월세가 상월곡동 평균 월세보다 약 10.0% 저렴합니다.".to_string(),
            "가격위험점수: 0, 키워드위험개수: 0, 관리비위험점수: 0, 총위험점수: 0점".to_string(),
        ]
    );
}
