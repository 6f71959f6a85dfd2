use once_cell::sync::Lazy;
use regex::Regex;

// Leading decimal number, the same prefix a lenient float parser accepts
static NUMBER_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("Invalid number regex")
});

/// Parse a currency-formatted price such as `$1,234.50` into whole units.
///
/// Rounds half up. Absent, unparseable or out-of-range input yields 0.
pub fn clean_price(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };

    let cleaned = raw.replace(|c: char| c == '$' || c == ',', "");
    let value = NUMBER_PREFIX_REGEX
        .find(cleaned.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite());

    // `i64::MAX as f64` rounds up to 2^63, which is already out of range
    match value.map(|v| (v + 0.5).floor()) {
        Some(v) if v >= i64::MIN as f64 && v < i64::MAX as f64 => v as i64,
        _ => 0,
    }
}

/// Format a whole price the way cards display it
pub fn format_nightly_price(price: i64) -> String {
    format!("${}/night", price)
}
