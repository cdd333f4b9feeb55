//! HttpSource: graph payload from the backend API

use super::{GraphSource, SourceError, SourceResult};
use crate::graph::GraphPayload;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Fetches `GET {base}/ideas/graph`.
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    /// # Example
    /// ```no_run
    /// # use ideagraph::source::HttpSource;
    /// let source = HttpSource::new("http://localhost:8000").unwrap();
    /// ```
    pub fn new(base_url: &str) -> SourceResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> SourceResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn graph_url(&self) -> String {
        format!("{}/ideas/graph", self.base_url)
    }
}

#[async_trait]
impl GraphSource for HttpSource {
    async fn fetch(&self) -> SourceResult<GraphPayload> {
        let url = self.graph_url();
        debug!("Fetching graph from {}", url);
        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(SourceError::NotGenerated),
            status => Err(SourceError::Status(status.as_u16())),
        }
    }

    fn describe(&self) -> String {
        self.graph_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned response on a local port and return its base URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_missing_graph_maps_to_not_generated() {
        let base = serve_once("404 Not Found", r#"{"detail":"Graph not generated yet"}"#).await;
        let source = HttpSource::new(&base).unwrap();
        assert!(matches!(source.fetch().await, Err(SourceError::NotGenerated)));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let base = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
        let source = HttpSource::new(&base).unwrap();
        assert!(matches!(source.fetch().await, Err(SourceError::Status(500))));
    }

    #[tokio::test]
    async fn test_success_decodes_payload() {
        let base = serve_once(
            "200 OK",
            r#"{"nodes":[{"id":"i1","summary":"Pull beats push","idea_type":"strategic","cluster_id":"c1"}],
                "edges":[],"clusters":[{"id":"c1","name":"PMF"}],"total_ideas":1,"total_connections":0}"#,
        )
        .await;
        let source = HttpSource::new(&base).unwrap();
        let payload = source.fetch().await.unwrap();
        assert_eq!(payload.nodes.len(), 1);
        assert_eq!(payload.nodes[0].id, "i1");
        assert_eq!(payload.clusters[0].name, "PMF");
    }

    #[test]
    fn test_graph_url_trims_slash() {
        let source = HttpSource::new("http://localhost:8000/").unwrap();
        assert_eq!(source.describe(), "http://localhost:8000/ideas/graph");
    }
}
