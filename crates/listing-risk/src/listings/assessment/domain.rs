use serde::{Deserialize, Serialize};

/// Loosely formatted listing fields as captured from a listing page.
///
/// Every field is optional; a fetcher that fails part-way still hands over
/// whatever it managed to read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawListing {
    pub address: Option<String>,
    pub management_fee_text: Option<String>,
    pub deposit_text: Option<String>,
    pub rent_text: Option<String>,
    pub area_text: Option<String>,
    pub description_text: Option<String>,
}

/// Typed view of a [`RawListing`]; `None` means the field was missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedListing {
    pub neighborhood: Option<String>,
    /// Deposit in the listing's own unit (만원).
    pub deposit_amount: Option<f64>,
    /// Monthly rent in the listing's own unit (만원).
    pub rent_amount: Option<f64>,
    /// Monthly maintenance fee in won.
    pub management_fee_amount: Option<f64>,
    /// Exclusive area in square meters.
    pub area_value: Option<f64>,
    pub description_text: Option<String>,
}

/// Listing prices relative to the neighborhood averages; below 1.0 is cheaper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatioSet {
    pub deposit_ratio: Option<f64>,
    pub rent_ratio: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeVerdict {
    Normal,
    Caution,
    Risk,
}

impl FeeVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "정상",
            Self::Caution => "주의",
            Self::Risk => "위험",
        }
    }
}

/// Ordinal classification of the total risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskGrade {
    Low,
    Moderate,
    Caution,
    Risk,
}

impl RiskGrade {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::Caution, Self::Risk]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "낮음",
            Self::Moderate => "보통",
            Self::Caution => "주의",
            Self::Risk => "위험",
        }
    }
}

/// Sub-scores and the grade derived from them.
///
/// Only the engine builds one, so the total always equals the sum of the
/// sub-scores and the grade always matches the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBreakdown {
    pub(crate) price_score: u32,
    pub(crate) keyword_count: u32,
    pub(crate) found_keywords: Vec<String>,
    pub(crate) fee_score: u32,
    pub(crate) fee_verdict: FeeVerdict,
    pub(crate) fee_included_categories: Vec<String>,
    pub(crate) total_score: u32,
    pub(crate) grade: RiskGrade,
}

impl RiskBreakdown {
    pub fn price_score(&self) -> u32 {
        self.price_score
    }

    pub fn keyword_count(&self) -> u32 {
        self.keyword_count
    }

    pub fn found_keywords(&self) -> &[String] {
        &self.found_keywords
    }

    pub fn fee_score(&self) -> u32 {
        self.fee_score
    }

    pub fn fee_verdict(&self) -> FeeVerdict {
        self.fee_verdict
    }

    /// Fee services named in the description, in configured order.
    pub fn fee_included_categories(&self) -> &[String] {
        &self.fee_included_categories
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn grade(&self) -> RiskGrade {
        self.grade
    }
}

/// Everything a presentation layer needs to render one assessed listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub raw: RawListing,
    pub listing: NormalizedListing,
    pub ratios: RatioSet,
    pub breakdown: RiskBreakdown,
    pub grade_label: &'static str,
    pub fee_verdict_label: &'static str,
    pub statements: Vec<String>,
}
