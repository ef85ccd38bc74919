//! Turns the visible text of a listing page into a [`RawListing`].
//!
//! Fetching and rendering the page is left to the caller; this module only
//! reads the two pieces of text a fetcher hands over: the location line shown
//! under the title (`<address> · 관리비 <fee>`) and the full body text.

use crate::listings::assessment::RawListing;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const LOCATION_SEPARATOR: &str = " · ";
const DESCRIPTION_HEADINGS: [&str; 2] = ["상세 설명", "특징 및 기타 사항"];
const DESCRIPTION_TRUNCATION_MARKER: &str = "더보기";

static PRICE_PATTERN: OnceLock<Regex> = OnceLock::new();
static AREA_PATTERN: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingPage {
    pub location: String,
    pub body: String,
}

impl ListingPage {
    pub fn new(location: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            body: body.into(),
        }
    }

    pub fn to_raw_listing(&self) -> RawListing {
        let (address, management_fee_text) = split_location(&self.location);
        let (deposit_text, rent_text) = monthly_terms(&self.body);

        RawListing {
            address,
            management_fee_text,
            deposit_text,
            rent_text,
            area_text: exclusive_area(&self.body),
            description_text: description(&self.body),
        }
    }
}

/// Splits `<address> · <fee text>` on the first separator.
pub fn split_location(location: &str) -> (Option<String>, Option<String>) {
    let (address, fee) = match location.split_once(LOCATION_SEPARATOR) {
        Some((address, fee)) => (address, Some(fee)),
        None => (location, None),
    };

    (non_empty(address), fee.and_then(non_empty))
}

/// Deposit and rent from `월세 1,000/53`.
fn monthly_terms(body: &str) -> (Option<String>, Option<String>) {
    let pattern = PRICE_PATTERN.get_or_init(|| {
        Regex::new(r"월세\s*([\d,]+)\s*/\s*([\d,]+)").expect("monthly terms pattern")
    });

    match pattern.captures(body) {
        Some(captures) => (
            captures.get(1).map(|deposit| deposit.as_str().to_string()),
            captures.get(2).map(|rent| rent.as_str().to_string()),
        ),
        None => (None, None),
    }
}

/// Bare number from `전용 21.45m²`.
fn exclusive_area(body: &str) -> Option<String> {
    let pattern = AREA_PATTERN
        .get_or_init(|| Regex::new(r"전용\s*(\d+(?:\.\d+)?)\s*m²").expect("area pattern"));

    pattern
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|area| area.as_str().to_string())
}

/// Text from the first known heading up to the "더보기" fold, heading included.
fn description(body: &str) -> Option<String> {
    let start = DESCRIPTION_HEADINGS
        .iter()
        .find_map(|heading| body.find(*heading))?;
    let section = &body[start..];
    let section = match section.find(DESCRIPTION_TRUNCATION_MARKER) {
        Some(end) => &section[..end],
        None => section,
    };

    non_empty(section)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = concat!(
        "원룸 | 월세 1,000/53\n",
        "전용 21.45m²\n",
        "옵션 에어컨 냉장고\n",
        "상세 설명\n",
        "수도, 인터넷 포함. 단기임대 가능\n",
        "더보기\n",
        "중개사 정보",
    );

    #[test]
    fn location_line_splits_address_and_fee() {
        assert_eq!(
            split_location("서울시 성북구 상월곡동  · 관리비 9.5만원"),
            (
                Some("서울시 성북구 상월곡동".to_string()),
                Some("관리비 9.5만원".to_string())
            )
        );
        assert_eq!(
            split_location("서울시 성북구 상월곡동"),
            (Some("서울시 성북구 상월곡동".to_string()), None)
        );
        assert_eq!(split_location(""), (None, None));
    }

    #[test]
    fn page_text_yields_raw_fields() {
        let page = ListingPage::new("서울시 성북구 상월곡동 · 관리비 9.5만원", BODY);
        let raw = page.to_raw_listing();

        assert_eq!(raw.address.as_deref(), Some("서울시 성북구 상월곡동"));
        assert_eq!(raw.management_fee_text.as_deref(), Some("관리비 9.5만원"));
        assert_eq!(raw.deposit_text.as_deref(), Some("1,000"));
        assert_eq!(raw.rent_text.as_deref(), Some("53"));
        assert_eq!(raw.area_text.as_deref(), Some("21.45"));
        assert_eq!(
            raw.description_text.as_deref(),
            Some("상세 설명\n수도, 인터넷 포함. 단기임대 가능")
        );
    }

    #[test]
    fn heading_priority_follows_configured_order() {
        let body = "특징 및 기타 사항\n역세권\n상세 설명\n풀옵션";
        assert_eq!(description(body).as_deref(), Some("상세 설명\n풀옵션"));
    }

    #[test]
    fn empty_page_yields_empty_listing() {
        assert_eq!(ListingPage::default().to_raw_listing(), RawListing::default());
    }
}
