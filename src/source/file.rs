//! FileSource: graph payload read from a JSON file

use super::{GraphSource, SourceError, SourceResult};
use crate::graph::GraphPayload;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads the payload from disk on every fetch. A missing file means the
/// graph has not been generated.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GraphSource for FileSource {
    async fn fetch(&self) -> SourceResult<GraphPayload> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(SourceError::NotGenerated),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
