use std::collections::HashSet;

use crate::models::Listing;
use crate::parsers::clean_price;

use super::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub average_price: i64,
    pub host_count: usize,
}

impl Stats {
    pub fn compute(listings: &[Listing]) -> Self {
        let total = listings.len();

        let average_price = if total == 0 {
            0
        } else {
            // Summed as f64, an i64 sum can overflow
            let sum: f64 = listings
                .iter()
                .map(|listing| clean_price(listing.price.as_deref()) as f64)
                .sum();
            (sum / total as f64 + 0.5).floor() as i64
        };

        let host_count = listings
            .iter()
            .filter_map(Listing::host_identifier)
            .collect::<HashSet<_>>()
            .len();

        Self {
            total,
            average_price,
            host_count,
        }
    }
}

pub fn render_stats(page: &mut Page, listings: &[Listing]) -> Stats {
    let stats = Stats::compute(listings);
    page.total_listings = stats.total;
    page.average_price = stats.average_price;
    page.host_count = stats.host_count;
    stats
}
