const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "단기임대",
    "저금리",
    "대출이자",
    "대출 알선",
    "실입주금",
    "실입주 금액",
    "보증금 대납",
    "당일계약",
    "계약 서두르세요",
];

const INCLUSION_CATEGORIES: &[(&str, &[&str])] = &[
    ("수도", &["수도", "수도료"]),
    ("인터넷/TV", &["인터넷", "IPTV", "와이파이", "wifi"]),
    ("전기", &["전기세", "전기 요금", "전기", "공용전기"]),
    ("가스/난방", &["가스", "도시가스", "난방"]),
    ("청소/관리", &["청소", "청소비", "일반관리비", "관리비 포함"]),
    ("주차", &["주차 포함", "주차비 포함"]),
    ("엘리베이터/건물", &["엘리베이터", "건물유지비", "공용관리비"]),
];

/// Phrase tables and thresholds the engine is built from.
///
/// List order matters: matched keywords and included categories are reported
/// in the order they are configured here.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentConfig {
    pub suspicious_keywords: Vec<String>,
    pub inclusion_categories: Vec<InclusionCategory>,
    pub price_thresholds: PriceThresholds,
}

impl AssessmentConfig {
    pub fn standard() -> Self {
        Self {
            suspicious_keywords: SUSPICIOUS_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
            inclusion_categories: INCLUSION_CATEGORIES
                .iter()
                .map(|(label, triggers)| InclusionCategory {
                    label: label.to_string(),
                    triggers: triggers.iter().map(|trigger| trigger.to_string()).collect(),
                })
                .collect(),
            price_thresholds: PriceThresholds::default(),
        }
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A service a maintenance fee may cover, detected through any of its trigger phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionCategory {
    pub label: String,
    pub triggers: Vec<String>,
}

impl InclusionCategory {
    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| text.contains(trigger.as_str()))
    }
}

/// Price-to-average ratios at or below which a listing scores as suspiciously cheap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceThresholds {
    pub severe_ratio: f64,
    pub elevated_ratio: f64,
}

impl Default for PriceThresholds {
    fn default() -> Self {
        Self {
            severe_ratio: 0.70,
            elevated_ratio: 0.80,
        }
    }
}
