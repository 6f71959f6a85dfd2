use serde::{Deserialize, Serialize};
use std::fmt;

/// Orderings offered by the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    PriceLow,
    PriceHigh,
    Name,
    #[default]
    Unsorted,
}

impl SortMode {
    pub fn key(&self) -> &'static str {
        match self {
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
            SortMode::Name => "name",
            SortMode::Unsorted => "default",
        }
    }

    /// Maps a sort control value to a mode. Unknown values leave the order untouched.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "price-low" => SortMode::PriceLow,
            "price-high" => SortMode::PriceHigh,
            "name" => SortMode::Name,
            _ => SortMode::Unsorted,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_control_values_map_to_modes() {
        assert_eq!(SortMode::from_key("price-low"), SortMode::PriceLow);
        assert_eq!(SortMode::from_key("price-high"), SortMode::PriceHigh);
        assert_eq!(SortMode::from_key(" name "), SortMode::Name);
    }

    #[test]
    fn anything_else_is_unsorted() {
        assert_eq!(SortMode::from_key(""), SortMode::Unsorted);
        assert_eq!(SortMode::from_key("rating"), SortMode::Unsorted);
        assert_eq!(SortMode::from_key("PRICE-LOW"), SortMode::Unsorted);
    }
}
