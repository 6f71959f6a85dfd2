use crate::models::Listing;

use super::{Card, Page, RenderOptions};

/// Replace the rendered cards with one card per listing, in order.
pub fn render_list(page: &mut Page, listings: &[Listing], options: &RenderOptions) {
    page.clear_listings();

    if listings.is_empty() {
        page.set_no_results(true);
        return;
    }
    page.set_no_results(false);

    for (index, listing) in listings.iter().enumerate() {
        page.append_card(&Card::build(listing, index, options));
    }
}
