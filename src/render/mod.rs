pub mod amenities;
pub mod card;
pub mod list;
pub mod stats;

pub use amenities::AmenityBadges;
pub use card::Card;
pub use list::render_list;
pub use stats::{render_stats, Stats};

use chrono::Local;

use crate::config::Config;
use crate::models::{SortMode, DEFAULT_DESCRIPTION_LIMIT, DEFAULT_FEATURED_COUNT, DEFAULT_MAX_AMENITIES};
use crate::parsers::escape_html;

/// Knobs that shape how cards are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub featured_count: usize,
    pub max_amenities: usize,
    pub description_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            featured_count: DEFAULT_FEATURED_COUNT,
            max_amenities: DEFAULT_MAX_AMENITIES,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            featured_count: config.featured_count,
            max_amenities: config.max_amenities,
            description_limit: config.description_limit,
        }
    }
}

/// An image address paired with the address to swap in when it fails to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    pub fallback: String,
}

impl ImageSource {
    pub fn new(src: &str, fallback: &str) -> Self {
        Self {
            src: src.to_string(),
            fallback: fallback.to_string(),
        }
    }

    /// Address to show after a load failure
    pub fn on_error(&self) -> &str {
        &self.fallback
    }

    /// `<img>` element; the fallback is bound by the page script, not inline markup.
    pub fn to_html(&self, class: &str, alt: &str) -> String {
        format!(
            r#"<img src="{}" class="{}" alt="{}" data-fallback="{}">"#,
            escape_html(&self.src),
            class,
            escape_html(alt),
            escape_html(&self.fallback),
        )
    }
}

const SORT_OPTIONS: [(SortMode, &str); 4] = [
    (SortMode::Unsorted, "Sort by"),
    (SortMode::PriceLow, "Price: Low to High"),
    (SortMode::PriceHigh, "Price: High to Low"),
    (SortMode::Name, "Name"),
];

// Binds the load-failure fallback for every image that declares one
const IMAGE_FALLBACK_SCRIPT: &str = r#"document.querySelectorAll('img[data-fallback]').forEach((img) => {
  img.addEventListener('error', () => {
    if (img.src !== img.dataset.fallback) {
      img.src = img.dataset.fallback;
    }
  }, { once: true });
});"#;

/// The document surface the renderers write into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub listings_html: String,
    pub card_count: usize,
    pub no_results_visible: bool,
    pub total_listings: usize,
    pub average_price: i64,
    pub host_count: usize,
    pub loading: bool,
    pub error_message: Option<String>,
    pub search_term: String,
    pub sort_value: String,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error_message = None;
    }

    pub fn clear_listings(&mut self) {
        self.listings_html.clear();
        self.card_count = 0;
    }

    pub fn append_card(&mut self, card: &Card) {
        self.listings_html.push_str(&card.to_html());
        self.card_count += 1;
    }

    pub fn set_no_results(&mut self, visible: bool) {
        self.no_results_visible = visible;
    }

    /// Sort control options with the current choice marked `selected`
    fn sort_options_html(&self) -> String {
        let current = SortMode::from_key(&self.sort_value);
        SORT_OPTIONS
            .iter()
            .map(|(mode, label)| {
                let selected = if *mode == current { " selected" } else { "" };
                format!("    <option value=\"{}\"{}>{}</option>\n", mode.key(), selected, label)
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        let hidden = |visible: bool| if visible { "" } else { " d-none" };
        let error = self
            .error_message
            .as_deref()
            .map(escape_html)
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Listings</title>
</head>
<body>
<div class="container">
  <div class="stats">
    <span id="totalListings">{total}</span>
    <span id="avgPrice">${average}</span>
    <span id="totalHosts">{hosts}</span>
  </div>
  <input type="text" id="searchInput" value="{term}" placeholder="Search listings...">
  <select id="sortSelect">
{sort_options}  </select>
  <div id="loading" class="loading{loading_hidden}">Loading listings...</div>
  <div id="errorMessage" class="alert alert-danger{error_hidden}">{error}</div>
  <div id="noResults" class="no-results{no_results_hidden}">No listings match your search.</div>
  <div id="listingsContainer" class="row">
{cards}  </div>
  <footer>Showing {shown} listings - Rendered: {rendered}</footer>
</div>
<script>
{script}
</script>
</body>
</html>
"#,
            total = self.total_listings,
            average = self.average_price,
            hosts = self.host_count,
            term = escape_html(&self.search_term),
            sort_options = self.sort_options_html(),
            loading_hidden = hidden(self.loading),
            error_hidden = hidden(self.error_message.is_some()),
            error = error,
            no_results_hidden = hidden(self.no_results_visible),
            cards = self.listings_html,
            shown = self.card_count,
            rendered = Local::now().format("%Y-%m-%d %H:%M:%S"),
            script = IMAGE_FALLBACK_SCRIPT,
        )
    }
}
