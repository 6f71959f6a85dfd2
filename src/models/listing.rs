use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{ANONYMOUS_HOST, HOST_PLACEHOLDER_IMAGE, LISTING_PLACEHOLDER_IMAGE, UNTITLED_LISTING};

// NewType pattern for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostId(pub String);

/// Host details some datasets nest under a `host` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    #[serde(default, deserialize_with = "loose_text")]
    pub host_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub host_picture_url: Option<String>,
}

/// Amenities arrive either as a bracketed pseudo-list string or as a real array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmenities {
    Text(String),
    List(Vec<String>),
}

/// One source record. Every field is optional and leniently typed: a value of
/// the wrong shape is treated as absent rather than failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub picture_url: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub medium_url: Option<String>,
    #[serde(default, deserialize_with = "loose_host")]
    pub host: Option<HostInfo>,
    #[serde(default, deserialize_with = "loose_text")]
    pub host_name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub host_picture_url: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub host_thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub host_id: Option<String>,
    #[serde(default, deserialize_with = "loose_amenities")]
    pub amenities: Option<RawAmenities>,
    #[serde(default, deserialize_with = "loose_text")]
    pub neighbourhood_cleansed: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub review_scores_rating: Option<f64>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl Listing {
    /// Title as stored in the record, used for searching and name ordering.
    pub fn raw_title(&self) -> &str {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.title))
            .unwrap_or("")
    }

    pub fn display_title(&self) -> &str {
        match self.raw_title() {
            "" => UNTITLED_LISTING,
            title => title,
        }
    }

    /// Description as stored in the record, markup included.
    pub fn raw_description(&self) -> Option<&str> {
        non_empty(&self.description).or_else(|| non_empty(&self.summary))
    }

    pub fn raw_neighbourhood(&self) -> &str {
        non_empty(&self.neighbourhood_cleansed).unwrap_or("")
    }

    pub fn photo_url(&self) -> &str {
        non_empty(&self.picture_url)
            .or_else(|| non_empty(&self.thumbnail_url))
            .or_else(|| non_empty(&self.medium_url))
            .unwrap_or(LISTING_PLACEHOLDER_IMAGE)
    }

    pub fn host_display_name(&self) -> &str {
        self.host
            .as_ref()
            .and_then(|host| non_empty(&host.host_name))
            .or_else(|| non_empty(&self.host_name))
            .unwrap_or(ANONYMOUS_HOST)
    }

    pub fn host_photo_url(&self) -> &str {
        self.host
            .as_ref()
            .and_then(|host| non_empty(&host.host_picture_url))
            .or_else(|| non_empty(&self.host_picture_url))
            .or_else(|| non_empty(&self.host_thumbnail_url))
            .unwrap_or(HOST_PLACEHOLDER_IMAGE)
    }

    pub fn host_identifier(&self) -> Option<HostId> {
        non_empty(&self.host_id).map(|id| HostId(id.trim().to_string()))
    }

    /// Review score, 0 when the record carries none.
    pub fn rating(&self) -> f64 {
        self.review_scores_rating.unwrap_or(0.0)
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn loose_amenities<'de, D>(deserializer: D) -> Result<Option<RawAmenities>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(RawAmenities::Text(s)),
        Some(Value::Array(items)) => Some(RawAmenities::List(
            items.into_iter().filter_map(text_from_value).collect(),
        )),
        _ => None,
    })
}

fn loose_host<'de, D>(deserializer: D) -> Result<Option<HostInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}
