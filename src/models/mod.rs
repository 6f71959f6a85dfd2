pub mod listing;
pub mod sort;

pub use listing::*;
pub use sort::*;

// Display fallbacks for absent listing fields
pub const UNTITLED_LISTING: &str = "Untitled Listing";
pub const NO_DESCRIPTION: &str = "No description available";
pub const ANONYMOUS_HOST: &str = "Anonymous Host";
pub const NO_AMENITIES: &str = "No amenities listed";

pub const LISTING_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";
pub const HOST_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/50?text=Host";

pub const DEFAULT_MAX_LISTINGS: usize = 50;
pub const DEFAULT_FEATURED_COUNT: usize = 10;
pub const DEFAULT_MAX_AMENITIES: usize = 5;
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 150;
