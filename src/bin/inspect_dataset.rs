use anyhow::Result;

use listing_browser::config::Config;
use listing_browser::loader::{load_dataset, source_for};
use listing_browser::models::Listing;
use listing_browser::parsers::{clean_price, parse_amenities};

fn count(listings: &[Listing], present: impl Fn(&Listing) -> bool) -> usize {
    listings.iter().filter(|listing| present(listing)).count()
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let source = source_for(&config)?;

    println!("Loading {}...", source.location());
    let listings = load_dataset(source.as_ref(), config.max_listings).await?;
    let total = listings.len();
    println!("Loaded {} listings (cap {})", total, config.max_listings);

    let fields: Vec<(&str, usize)> = vec![
        ("name/title", count(&listings, |l| !l.raw_title().is_empty())),
        ("description/summary", count(&listings, |l| l.raw_description().is_some())),
        ("price", count(&listings, |l| l.price.is_some())),
        ("picture", count(&listings, |l| l.picture_url.is_some() || l.thumbnail_url.is_some() || l.medium_url.is_some())),
        ("host name", count(&listings, |l| l.host_name.is_some() || l.host.is_some())),
        ("host id", count(&listings, |l| l.host_identifier().is_some())),
        ("amenities", count(&listings, |l| l.amenities.is_some())),
        ("neighbourhood", count(&listings, |l| !l.raw_neighbourhood().is_empty())),
        ("rating", count(&listings, |l| l.rating() > 0.0)),
    ];

    println!("\nField coverage:");
    for (field, present) in fields {
        println!("  {:<22} {:>4}/{}", field, present, total);
    }

    let zero_prices = count(&listings, |l| clean_price(l.price.as_deref()) == 0);
    let no_amenities = count(&listings, |l| parse_amenities(l.amenities.as_ref()).is_empty());
    println!("\nNormalized to defaults:");
    println!("  {:<22} {:>4}/{}", "price = 0", zero_prices, total);
    println!("  {:<22} {:>4}/{}", "no amenities", no_amenities, total);

    Ok(())
}
