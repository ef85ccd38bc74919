use super::domain::{NormalizedListing, RawListing};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const NEIGHBORHOOD_SUFFIX: char = '동';
/// Marks a maintenance fee the listing site could not confirm.
const FEE_UNVERIFIABLE_MARKER: &str = "확인불가";
/// Won per 만원.
const FEE_UNIT_MULTIPLIER: f64 = 10_000.0;

static NEIGHBORHOOD_PATTERN: OnceLock<Regex> = OnceLock::new();
static FEE_PATTERN: OnceLock<Regex> = OnceLock::new();
static AREA_PATTERN: OnceLock<Regex> = OnceLock::new();

/// A raw field that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("'{0}' is not a number")]
    NotNumeric(String),
}

pub fn normalize_listing(raw: &RawListing) -> NormalizedListing {
    NormalizedListing {
        neighborhood: raw.address.as_deref().and_then(extract_neighborhood),
        deposit_amount: recover_price("deposit", raw.deposit_text.as_deref()),
        rent_amount: recover_price("rent", raw.rent_text.as_deref()),
        management_fee_amount: raw
            .management_fee_text
            .as_deref()
            .and_then(parse_management_fee),
        area_value: raw.area_text.as_deref().and_then(parse_area),
        description_text: raw.description_text.clone(),
    }
}

/// First address token ending in `동`, so `성동구 성수동` yields `성수동`.
///
/// Without such a token the first whitespace-free run ending in `동` is used.
pub fn extract_neighborhood(address: &str) -> Option<String> {
    address
        .split_whitespace()
        .find(|token| token.ends_with(NEIGHBORHOOD_SUFFIX))
        .or_else(|| neighborhood_pattern().find(address).map(|found| found.as_str()))
        .map(str::to_string)
}

/// Parses a price such as `1,000` into a number.
pub fn parse_price(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    let stripped: String = trimmed.chars().filter(|ch| *ch != ',').collect();
    parse_decimal(&stripped).ok_or_else(|| ParseError::NotNumeric(trimmed.to_string()))
}

/// Converts `관리비 9.5만원` into won; `None` when unverifiable or unreadable.
pub fn parse_management_fee(text: &str) -> Option<f64> {
    if text.contains(FEE_UNVERIFIABLE_MARKER) {
        return None;
    }

    let captures = fee_pattern().captures(text)?;
    let amount = parse_decimal(captures.get(1)?.as_str())?;
    Some(amount * FEE_UNIT_MULTIPLIER)
}

/// Reads `21.45m²`, or a bare `21.45` as produced by page capture.
pub fn parse_area(text: &str) -> Option<f64> {
    match area_pattern().captures(text) {
        Some(captures) => parse_decimal(captures.get(1)?.as_str()),
        None => parse_decimal(text.trim()),
    }
}

fn recover_price(field: &'static str, text: Option<&str>) -> Option<f64> {
    match parse_price(text?) {
        Ok(amount) => Some(amount),
        Err(error) => {
            debug!(field, %error, "price field treated as unknown");
            None
        }
    }
}

fn parse_decimal(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn neighborhood_pattern() -> &'static Regex {
    NEIGHBORHOOD_PATTERN.get_or_init(|| Regex::new(r"\S+동").expect("neighborhood pattern"))
}

fn fee_pattern() -> &'static Regex {
    FEE_PATTERN.get_or_init(|| Regex::new(r"([\d.]+)\s*만원").expect("fee pattern"))
}

fn area_pattern() -> &'static Regex {
    AREA_PATTERN
        .get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:m²|㎡)").expect("area pattern"))
}
