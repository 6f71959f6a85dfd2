use std::cmp::Ordering;

use tracing::debug;

use crate::models::{Listing, SortMode};
use crate::parsers::clean_price;

/// Owns the loaded dataset and the currently visible subset of it.
///
/// `full` is fixed once loaded. `search` always starts over from `full`, while
/// `sort` reorders whatever the last search left in `view`.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    full: Vec<Listing>,
    view: Vec<Listing>,
}

impl QueryEngine {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            view: listings.clone(),
            full: listings,
        }
    }

    pub fn full(&self) -> &[Listing] {
        &self.full
    }

    pub fn view(&self) -> &[Listing] {
        &self.view
    }

    /// Keep the listings whose title, description or neighbourhood contains `term`,
    /// ignoring case. A blank term restores the full dataset.
    pub fn search(&mut self, term: &str) -> &[Listing] {
        let term = term.trim().to_lowercase();

        self.view = if term.is_empty() {
            self.full.clone()
        } else {
            self.full
                .iter()
                .filter(|listing| matches_term(listing, &term))
                .cloned()
                .collect()
        };

        debug!("Search {:?} matched {} of {} listings", term, self.view.len(), self.full.len());
        &self.view
    }

    /// Reorder the current view. Stable, so ties keep their previous order.
    pub fn sort(&mut self, mode: SortMode) -> &[Listing] {
        let mut sorted = self.view.clone();

        match mode {
            SortMode::PriceLow => sorted.sort_by_key(|listing| clean_price(listing.price.as_deref())),
            SortMode::PriceHigh => {
                sorted.sort_by_key(|listing| std::cmp::Reverse(clean_price(listing.price.as_deref())))
            }
            SortMode::Name => sorted.sort_by(|a, b| compare_titles(a.raw_title(), b.raw_title())),
            SortMode::Unsorted => {}
        }

        debug!("Sorted {} listings by {}", sorted.len(), mode);
        self.view = sorted;
        &self.view
    }
}

fn matches_term(listing: &Listing, term: &str) -> bool {
    let fields = [
        listing.raw_title(),
        listing.raw_description().unwrap_or(""),
        listing.raw_neighbourhood(),
    ];
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Case-insensitive title order; titles equal ignoring case fall back to a
/// plain comparison so the order stays total.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn listing(name: &str, price: &str, neighbourhood: &str) -> Listing {
        serde_json::from_value(json!({
            "name": name,
            "price": price,
            "description": format!("<p>{} description</p>", name),
            "neighbourhood_cleansed": neighbourhood,
        }))
        .unwrap()
    }

    fn dataset() -> Vec<Listing> {
        vec![
            listing("Sunny Loft", "$150.00", "Mission"),
            listing("cozy Studio", "$80.00", "SoMa"),
            listing("Bay View House", "$1,200.00", "Marina"),
            listing("Garden Cottage", "$80.00", "Mission Bay"),
        ]
    }

    fn titles(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(Listing::raw_title).collect()
    }

    fn prices(listings: &[Listing]) -> Vec<i64> {
        listings.iter().map(|l| clean_price(l.price.as_deref())).collect()
    }

    #[test]
    fn starts_with_view_equal_to_full() {
        let engine = QueryEngine::new(dataset());
        assert_eq!(engine.view(), engine.full());
    }

    #[test]
    fn search_matches_any_of_three_fields_ignoring_case() {
        let mut engine = QueryEngine::new(dataset());
        assert_eq!(titles(engine.search("MISSION")), vec!["Sunny Loft", "Garden Cottage"]);
        assert_eq!(titles(engine.search("studio")), vec!["cozy Studio"]);
        assert_eq!(titles(engine.search("house description")), vec!["Bay View House"]);
    }

    #[test]
    fn search_results_are_drawn_from_full_and_contain_term() {
        let mut engine = QueryEngine::new(dataset());
        let term = "bay";
        let results = engine.search(term).to_vec();
        assert!(!results.is_empty());
        for listing in &results {
            assert!(engine.full().contains(listing));
            assert!(matches_term(listing, term));
        }
    }

    #[test]
    fn search_without_matches_is_empty() {
        let mut engine = QueryEngine::new(dataset());
        assert!(engine.search("penthouse").is_empty());
    }

    #[test]
    fn blank_search_restores_full_regardless_of_prior_state() {
        let mut engine = QueryEngine::new(dataset());
        engine.search("mission");
        engine.sort(SortMode::PriceHigh);
        engine.search("   ");
        assert_eq!(engine.view(), engine.full());
        engine.search("loft");
        engine.search("");
        assert_eq!(engine.view(), engine.full());
    }

    #[test]
    fn price_sorts_are_monotonic() {
        let mut engine = QueryEngine::new(dataset());
        let ascending = prices(engine.sort(SortMode::PriceLow));
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));
        let descending = prices(engine.sort(SortMode::PriceHigh));
        assert!(descending.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut engine = QueryEngine::new(dataset());
        assert_eq!(
            titles(engine.sort(SortMode::Name)),
            vec!["Bay View House", "cozy Studio", "Garden Cottage", "Sunny Loft"]
        );
    }

    #[test]
    fn name_sort_puts_untitled_first() {
        let untitled: Listing = serde_json::from_value(json!({ "price": "$10" })).unwrap();
        let mut engine = QueryEngine::new(vec![listing("Alpha", "$1", "X"), untitled]);
        assert_eq!(titles(engine.sort(SortMode::Name)), vec!["", "Alpha"]);
    }

    #[test]
    fn unsorted_keeps_current_order() {
        let mut engine = QueryEngine::new(dataset());
        engine.sort(SortMode::PriceLow);
        let before = titles(engine.view()).join("|");
        let after = titles(engine.sort(SortMode::Unsorted)).join("|");
        assert_eq!(before, after);
    }

    #[test]
    fn sort_applies_on_top_of_search_and_new_search_discards_it() {
        let mut engine = QueryEngine::new(dataset());
        engine.search("mission");
        assert_eq!(titles(engine.sort(SortMode::PriceLow)), vec!["Garden Cottage", "Sunny Loft"]);
        assert_eq!(titles(engine.search("mission")), vec!["Sunny Loft", "Garden Cottage"]);
    }

    #[test]
    fn full_is_never_mutated() {
        let mut engine = QueryEngine::new(dataset());
        let original = engine.full().to_vec();
        engine.sort(SortMode::PriceHigh);
        engine.search("loft");
        engine.sort(SortMode::Name);
        assert_eq!(engine.full(), original.as_slice());
    }
}
