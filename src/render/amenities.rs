use crate::models::NO_AMENITIES;
use crate::parsers::escape_html;

/// The amenity badges shown on a card: up to a cap of labels plus an overflow count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityBadges {
    pub labels: Vec<String>,
    pub hidden: usize,
}

impl AmenityBadges {
    pub fn new(amenities: &[String], max_shown: usize) -> Self {
        let shown = amenities.len().min(max_shown);
        Self {
            labels: amenities[..shown].to_vec(),
            hidden: amenities.len() - shown,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.hidden == 0
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }

    /// Total badges rendered, the overflow badge included
    pub fn badge_count(&self) -> usize {
        self.labels.len() + usize::from(self.hidden > 0)
    }

    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return format!(
                r#"<div class="amenities"><small class="text-muted">{}</small></div>"#,
                NO_AMENITIES
            );
        }

        let mut badges: Vec<String> = self
            .labels
            .iter()
            .map(|label| format!(r#"<span class="amenity-badge">{}</span>"#, escape_html(label)))
            .collect();

        if let Some(more) = self.overflow_label() {
            badges.push(format!(r#"<span class="amenity-badge amenity-more">{}</span>"#, more));
        }

        format!(r#"<div class="amenities">{}</div>"#, badges.join(""))
    }
}
