use super::{collapse_whitespace, escape_html, strip_tags};
use crate::models::NO_DESCRIPTION;

/// Plain-text, HTML-escaped description cut to at most `limit` characters.
pub fn clean_description(raw: Option<&str>, limit: usize) -> String {
    let Some(raw) = raw else {
        return escape_html(NO_DESCRIPTION);
    };

    let text = collapse_whitespace(&strip_tags(raw));
    let text = if text.chars().count() > limit {
        format!("{}...", text.chars().take(limit).collect::<String>())
    } else {
        text
    };

    escape_html(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_DESCRIPTION_LIMIT;

    #[test]
    fn absent_gives_placeholder() {
        assert_eq!(clean_description(None, DEFAULT_DESCRIPTION_LIMIT), NO_DESCRIPTION);
    }

    #[test]
    fn tags_and_whitespace_are_cleaned() {
        assert_eq!(
            clean_description(Some("<b>Great</b>   place<br/>\n near   the bay "), 150),
            "Great place near the bay"
        );
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let raw = "a".repeat(200);
        let cleaned = clean_description(Some(&raw), 150);
        assert_eq!(cleaned, format!("{}...", "a".repeat(150)));
    }

    #[test]
    fn text_at_the_limit_is_kept_whole() {
        let raw = "é".repeat(150);
        assert_eq!(clean_description(Some(&raw), 150), raw);
    }

    #[test]
    fn output_is_escaped() {
        let cleaned = clean_description(Some("Fish & chips <script>x</script> \"fresh\""), 150);
        assert!(cleaned.contains("&amp;"));
        assert!(!cleaned.contains('"'));
        assert!(!cleaned.contains("<script>"));
    }
}
