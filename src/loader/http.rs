use async_trait::async_trait;
use reqwest::Client;

use super::{DatasetSource, LoadError};
use crate::utils::http::fetch_text;

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        fetch_text(&self.client, &self.url).await
    }

    fn location(&self) -> &str {
        &self.url
    }
}
