/// Canonical lookup key for a neighborhood name.
///
/// Spreadsheet exports often carry a byte-order mark or zero-width spaces
/// that are invisible but break exact matching against scraped addresses.
pub(crate) fn normalize_neighborhood(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join("")
}
