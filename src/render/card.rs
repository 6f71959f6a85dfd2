use crate::models::{Listing, HOST_PLACEHOLDER_IMAGE, LISTING_PLACEHOLDER_IMAGE};
use crate::parsers::{clean_description, clean_price, escape_html, format_nightly_price, parse_amenities};

use super::{AmenityBadges, ImageSource, RenderOptions};

/// Display-ready projection of one listing at a given position in the view.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub neighbourhood: Option<String>,
    pub rating: Option<f64>,
    pub photo: ImageSource,
    pub host_name: String,
    pub host_photo: ImageSource,
    pub price: i64,
    pub amenities: AmenityBadges,
    pub featured: bool,
}

impl Card {
    pub fn build(listing: &Listing, index: usize, options: &RenderOptions) -> Self {
        let neighbourhood = match listing.raw_neighbourhood() {
            "" => None,
            name => Some(name.to_string()),
        };
        let rating = Some(listing.rating()).filter(|r| *r > 0.0);
        let amenities = parse_amenities(listing.amenities.as_ref());

        Self {
            title: listing.display_title().to_string(),
            description: clean_description(listing.raw_description(), options.description_limit),
            neighbourhood,
            rating,
            photo: ImageSource::new(listing.photo_url(), LISTING_PLACEHOLDER_IMAGE),
            host_name: listing.host_display_name().to_string(),
            host_photo: ImageSource::new(listing.host_photo_url(), HOST_PLACEHOLDER_IMAGE),
            price: clean_price(listing.price.as_deref()),
            amenities: AmenityBadges::new(&amenities, options.max_amenities),
            featured: index < options.featured_count,
        }
    }

    pub fn price_tag(&self) -> String {
        format_nightly_price(self.price)
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(&self.title);
        let host_name = escape_html(&self.host_name);

        let featured = if self.featured {
            r#"<span class="featured-badge">⭐ Featured</span>"#
        } else {
            ""
        };

        let mut badges = String::new();
        if let Some(neighbourhood) = &self.neighbourhood {
            badges.push_str(&format!(
                r#"<span class="badge neighbourhood-badge">{}</span>"#,
                escape_html(neighbourhood)
            ));
        }
        if let Some(rating) = self.rating {
            badges.push_str(&format!(r#"<span class="badge rating-badge">⭐ {}</span>"#, rating));
        }

        format!(
            r#"<div class="col-md-6 col-lg-4">
  <div class="listing-card">
    <div style="position: relative;">
      {photo}
      {featured}
    </div>
    <div class="listing-body">
      <h5 class="listing-title">{title}</h5>
      <p class="listing-description">{description}</p>
      <div class="listing-badges">{badges}</div>
      <div class="host-section">
        {host_photo}
        <div>
          <div class="host-name">{host_name}</div>
          <small class="text-muted">Host</small>
        </div>
      </div>
      <div class="price-tag">{price}</div>
      {amenities}
    </div>
  </div>
</div>
"#,
            photo = self.photo.to_html("listing-image", &self.title),
            featured = featured,
            title = title,
            description = self.description,
            badges = badges,
            host_photo = self.host_photo.to_html("host-photo", &self.host_name),
            host_name = host_name,
            price = self.price_tag(),
            amenities = self.amenities.to_html(),
        )
    }
}
