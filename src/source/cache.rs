//! MemoizedSource: reuse a fetched payload for a bounded window

use super::{GraphSource, SourceResult};
use crate::graph::GraphPayload;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Wraps a source so repeated fetches within `ttl` share one payload.
///
/// The lock is held across the inner fetch, so concurrent callers wait for
/// the single in-flight request instead of issuing their own. Failures are
/// returned to the caller and never stored.
pub struct MemoizedSource<S> {
    inner: S,
    ttl: Duration,
    cached: Mutex<Option<(Instant, Arc<GraphPayload>)>>,
}

impl<S: GraphSource> MemoizedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: Mutex::new(None),
        }
    }

    /// Fetch, or return the payload fetched within the last `ttl`
    pub async fn fetch_shared(&self) -> SourceResult<Arc<GraphPayload>> {
        let mut cached = self.cached.lock().await;
        if let Some((fetched_at, payload)) = cached.as_ref() {
            if fetched_at.elapsed() < self.ttl {
                debug!("Reusing graph payload from {}", self.inner.describe());
                return Ok(Arc::clone(payload));
            }
        }

        let payload = Arc::new(self.inner.fetch().await?);
        *cached = Some((Instant::now(), Arc::clone(&payload)));
        Ok(payload)
    }

    /// Drop the memoized payload so the next fetch goes to the inner source
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: GraphSource> GraphSource for MemoizedSource<S> {
    async fn fetch(&self) -> SourceResult<GraphPayload> {
        Ok(self.fetch_shared().await?.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("{} (memoized {}s)", self.inner.describe(), self.ttl.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        fail_first: bool,
    }

    #[async_trait]
    impl GraphSource for Counting {
        async fn fetch(&self) -> SourceResult<GraphPayload> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && n == 0 {
                return Err(SourceError::NotGenerated);
            }
            Ok(GraphPayload::default())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn counting(fail_first: bool) -> Counting {
        Counting {
            calls: AtomicUsize::new(0),
            fail_first,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reuses_within_window() {
        let source = MemoizedSource::new(counting(false), Duration::from_secs(60));
        let a = source.fetch_shared().await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;
        let b = source.fetch_shared().await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(31)).await;
        source.fetch_shared().await.unwrap();
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_errors_not_cached() {
        let source = MemoizedSource::new(counting(true), Duration::from_secs(60));
        assert!(source.fetch().await.is_err());
        assert!(source.fetch().await.is_ok());
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_forces_refetch() {
        let source = MemoizedSource::new(counting(false), Duration::from_secs(60));
        source.fetch_shared().await.unwrap();
        source.invalidate().await;
        source.fetch_shared().await.unwrap();
        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 2);
    }
}
