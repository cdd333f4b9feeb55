//! Graph sources
//!
//! The engine's one asynchronous boundary: fetching the graph payload.
//!
//! Implemented by:
//! - [`FileSource`]: a JSON payload on disk
//! - [`HttpSource`]: the backend's `GET /ideas/graph` endpoint
//! - [`MemoizedSource`]: wraps either and reuses a payload for a bounded window

pub mod cache;
pub mod file;
pub mod http;

pub use cache::MemoizedSource;
pub use file::FileSource;
pub use http::HttpSource;

use crate::graph::GraphPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a graph payload
#[derive(Error, Debug)]
pub enum SourceError {
    /// The backend has not generated a graph yet
    #[error("Graph not generated yet")]
    NotGenerated,

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected HTTP status
    #[error("Graph endpoint returned status {0}")]
    Status(u16),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload did not parse
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Anything that can produce a graph payload
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Fetch the full graph payload
    async fn fetch(&self) -> SourceResult<GraphPayload>;

    /// Human-readable origin, for logs and status output
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: GraphSource + ?Sized> GraphSource for Box<S> {
    async fn fetch(&self) -> SourceResult<GraphPayload> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
