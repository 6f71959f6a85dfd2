use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RawAmenities;

static UNICODE_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\u[0-9a-fA-F]{4}")
        .expect("Invalid unicode escape regex")
});

const ENTRY_SEPARATOR: &str = "\", \"";

/// Turn the amenities field into an ordered list of labels.
///
/// The text form looks like `["Wifi", "Kitchen"]` but is not guaranteed to be
/// valid JSON, so it is split on the `", "` separator instead of parsed. A
/// label that itself contains `", "` is split in two. Empty labels are dropped.
pub fn parse_amenities(raw: Option<&RawAmenities>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(RawAmenities::List(items)) => items
            .iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Some(RawAmenities::Text(text)) => parse_amenity_text(text),
    }
}

fn parse_amenity_text(text: &str) -> Vec<String> {
    let text = text.trim();
    let text = text.strip_prefix('[').unwrap_or(text);
    let text = text.strip_suffix(']').unwrap_or(text);
    let text = UNICODE_ESCAPE_REGEX.replace_all(text, "");

    text.split(ENTRY_SEPARATOR)
        .map(|piece| {
            let piece = piece.trim();
            let piece = piece.strip_prefix('"').unwrap_or(piece);
            let piece = piece.strip_suffix('"').unwrap_or(piece);
            piece.trim().to_string()
        })
        .filter(|label| !label.is_empty())
        .collect()
}
