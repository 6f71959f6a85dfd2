use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::models::Listing;
use crate::utils::http::create_client;

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    Status(reqwest::StatusCode),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a JSON array of listings, found {0}")]
    NotAnArray(&'static str),
}

/// Where the dataset comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<String, LoadError>;
    fn location(&self) -> &str;
}

/// Pick a source for `data_source`: http(s) URLs are fetched, anything else is a local file.
pub fn source_for(config: &Config) -> Result<Box<dyn DatasetSource>> {
    let location = config.data_source.trim();

    let source: Box<dyn DatasetSource> = match Url::parse(location) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            Box::new(HttpSource::new(create_client(config)?, url.as_str()))
        }
        Ok(url) if url.scheme() == "file" => match url.to_file_path() {
            Ok(path) => Box::new(FileSource::new(path)),
            Err(()) => Box::new(FileSource::new(PathBuf::from(location))),
        },
        _ => Box::new(FileSource::new(PathBuf::from(location))),
    };

    Ok(source)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse the top-level array and keep the first `max_listings` records in source order.
pub fn parse_dataset(body: &str, max_listings: usize) -> Result<Vec<Listing>, LoadError> {
    let records = match serde_json::from_str::<Value>(body)? {
        Value::Array(records) => records,
        other => return Err(LoadError::NotAnArray(json_kind(&other))),
    };

    let listings = records
        .into_iter()
        .take(max_listings)
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<Listing>(record).unwrap_or_else(|e| {
                warn!("Record {} is not a listing object ({}), using empty listing", index, e);
                Listing::default()
            })
        })
        .collect();

    Ok(listings)
}

pub async fn load_dataset(source: &dyn DatasetSource, max_listings: usize) -> Result<Vec<Listing>, LoadError> {
    info!("Loading listings from {}", source.location());
    let body = source.fetch().await?;
    parse_dataset(&body, max_listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_first_records_in_order() {
        let records: Vec<Value> = (0..60).map(|i| json!({ "name": format!("Listing {}", i) })).collect();
        let listings = parse_dataset(&Value::Array(records).to_string(), 50).unwrap();
        assert_eq!(listings.len(), 50);
        assert_eq!(listings[0].raw_title(), "Listing 0");
        assert_eq!(listings[49].raw_title(), "Listing 49");
    }

    #[test]
    fn non_object_records_become_empty_listings() {
        let listings = parse_dataset(r#"[{"name": "Loft"}, 42, null]"#, 50).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[1], Listing::default());
        assert_eq!(listings[2], Listing::default());
    }

    #[test]
    fn non_array_top_level_is_an_error() {
        let err = parse_dataset(r#"{"listings": []}"#, 50).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray("an object")));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_dataset("[{", 50).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn picks_source_by_location() {
        let http = source_for(&Config {
            data_source: "https://example.com/listings.json".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert_eq!(http.location(), "https://example.com/listings.json");

        let file = source_for(&Config {
            data_source: "data/listings.json".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert_eq!(file.location(), "data/listings.json");
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_become_local_paths() {
        let file_url = source_for(&Config {
            data_source: "file:///tmp/listings.json".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert_eq!(file_url.location(), "/tmp/listings.json");
    }
}
