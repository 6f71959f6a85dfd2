use async_trait::async_trait;
use std::path::PathBuf;

use super::{DatasetSource, LoadError};

pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.display.clone(),
                source,
            })
    }

    fn location(&self) -> &str {
        &self.display
    }
}
