//! Skip-to-page translation for catalog requests.

/// Items requested from AniList per catalog page
pub const PER_PAGE: u32 = 50;

/// One-based upstream page for a zero-based result offset.
///
/// Absent or non-finite offsets count as 0. Negative and fractional offsets
/// are used as given, so a negative skip can yield page 0 or below. Offsets
/// beyond the `i64` range saturate at `i64::MAX` or `i64::MIN + 1`.
pub fn page_from_skip(skip: Option<f64>, per_page: u32) -> i64 {
    let skip = skip.filter(|s| s.is_finite()).unwrap_or(0.0);
    ((skip / f64::from(per_page.max(1))).floor() as i64).saturating_add(1)
}

/// Parse the raw `skip` extra value
///
/// Returns `None` for missing or unparseable input.
pub fn parse_skip(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse().ok()
}
