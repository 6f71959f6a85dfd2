use anyhow::{ensure, Context, Result};
use ::config::{Environment, File};
use serde::{Deserialize, Serialize};

use crate::models::{
    DEFAULT_DESCRIPTION_LIMIT, DEFAULT_FEATURED_COUNT, DEFAULT_MAX_AMENITIES, DEFAULT_MAX_LISTINGS,
};

pub const CONFIG_FILE_STEM: &str = "listings";
pub const ENV_PREFIX: &str = "LISTINGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `http(s)://` URL or local path of the JSON dataset
    pub data_source: String,
    pub output_path: String,
    pub max_listings: usize,
    pub featured_count: usize,
    pub max_amenities: usize,
    pub description_limit: usize,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: "airbnb_sf_listings_500.json".to_string(),
            output_path: "listings.html".to_string(),
            max_listings: DEFAULT_MAX_LISTINGS,
            featured_count: DEFAULT_FEATURED_COUNT,
            max_amenities: DEFAULT_MAX_AMENITIES,
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            request_timeout_seconds: 25,
            user_agent: concat!("listing-browser/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `listings.toml` if present, then `LISTINGS_*` environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE_STEM)
    }

    pub fn load_from(file_stem: &str) -> Result<Self> {
        let defaults = Config::default();

        let settings = ::config::Config::builder()
            .set_default("data_source", defaults.data_source)?
            .set_default("output_path", defaults.output_path)?
            .set_default("max_listings", defaults.max_listings as i64)?
            .set_default("featured_count", defaults.featured_count as i64)?
            .set_default("max_amenities", defaults.max_amenities as i64)?
            .set_default("description_limit", defaults.description_limit as i64)?
            .set_default("request_timeout_seconds", defaults.request_timeout_seconds as i64)?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.data_source.trim().is_empty(), "data_source must not be empty");
        ensure!(!self.output_path.trim().is_empty(), "output_path must not be empty");
        ensure!(self.request_timeout_seconds > 0, "request_timeout_seconds must be positive");
        Ok(())
    }
}
