//! Response caching around network fetches.
//!
//! The client talks to a cache through [`CacheHandler`], a two-operation capability keyed by
//! the full request URL. The storage medium is entirely the handler's business; two handlers
//! ship with the crate: [`MemoryCache`] and [`FileCache`].

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;

use futures::future::BoxFuture;

use crate::core::QuandlError;
use crate::transport::Transport;

/// A response cache keyed by request URL.
///
/// `set` is fire-and-forget: a handler that fails to store an entry should log or swallow the
/// failure, never surface it to the call.
///
/// ```
/// use futures::future::BoxFuture;
/// use quandl_rs::CacheHandler;
///
/// struct NoCache;
///
/// impl CacheHandler for NoCache {
///     fn get<'a>(&'a self, _key: &'a str) -> BoxFuture<'a, Option<String>> {
///         Box::pin(async { None })
///     }
///
///     fn set<'a>(&'a self, _key: &'a str, _payload: &'a str) -> BoxFuture<'a, ()> {
///         Box::pin(async {})
///     }
/// }
/// ```
pub trait CacheHandler: Send + Sync {
    /// Returns the stored payload for `key`, if any.
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<String>>;

    /// Stores `payload` under `key`.
    fn set<'a>(&'a self, key: &'a str, payload: &'a str) -> BoxFuture<'a, ()>;
}

/// Result of one intercepted fetch: the body (or failure) and whether the cache served it.
pub(crate) struct Intercepted {
    pub(crate) body: Result<String, QuandlError>,
    pub(crate) was_cached: bool,
}

/// Serves `url` from `cache` when it holds a non-empty entry; otherwise downloads it and, if
/// the body is non-empty, stores it.
pub(crate) async fn fetch(
    url: &str,
    cache: Option<&dyn CacheHandler>,
    transport: &Transport,
) -> Intercepted {
    let Some(cache) = cache else {
        return Intercepted {
            body: transport.download(url).await,
            was_cached: false,
        };
    };

    if let Some(hit) = cache.get(url).await.filter(|body| !body.is_empty()) {
        #[cfg(feature = "tracing")]
        tracing::debug!(url, "cache hit");
        return Intercepted {
            body: Ok(hit),
            was_cached: true,
        };
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(url, "cache miss");
    let body = transport.download(url).await;
    if let Ok(text) = &body
        && !text.is_empty()
    {
        cache.set(url, text).await;
    }
    Intercepted {
        body,
        was_cached: false,
    }
}
