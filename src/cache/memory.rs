use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::CacheHandler;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// In-memory cache with a fixed time-to-live per entry.
///
/// Cloning shares the underlying store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    map: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl MemoryCache {
    /// Creates an empty cache whose entries expire `ttl` after being stored.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            map: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }

    /// Drops every entry.
    pub async fn clear(&self) {
        self.map.write().await.clear();
    }

    /// Drops expired entries.
    pub async fn purge_expired(&self) {
        let now = Instant::now();
        self.map.write().await.retain(|_, e| e.expires_at > now);
    }
}

impl CacheHandler for MemoryCache {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<String>> {
        Box::pin(async move {
            let guard = self.map.read().await;
            guard
                .get(key)
                .filter(|entry| Instant::now() <= entry.expires_at)
                .map(|entry| entry.body.clone())
        })
    }

    fn set<'a>(&'a self, key: &'a str, payload: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            let entry = CacheEntry {
                body: payload.to_string(),
                expires_at: Instant::now() + self.ttl,
            };
            self.map.write().await.insert(key.to_string(), entry);
        })
    }
}
