//! quandl-rs: async client for the Quandl financial data API.
//!
//! The client builds request URLs for datasets, multisets, search, listings, metadata,
//! database catalogs and bulk archives, negotiates the response format, optionally serves
//! responses from a pluggable cache, and fetches through one of two transport strategies.
//!
//! ```no_run
//! # async fn run() {
//! use quandl_rs::{Format, MemoryCache, Params, QuandlClient};
//! use std::time::Duration;
//!
//! let client = QuandlClient::builder()
//!     .api_key("YOUR_KEY")
//!     .format(Format::Object)
//!     .cache(MemoryCache::new(Duration::from_secs(600)))
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! let res = client.get_symbol("WIKI/AAPL", &Params::new().trim_start("today-30 days")).await;
//! println!("{} (cached: {})", res.url(), res.was_cached());
//! if let Some(obj) = res.data().and_then(|p| p.as_object()) {
//!     println!("{}", obj["dataset"]["name"]);
//! }
//! # }
//! ```
//!
//! Calls never return `Err`: a failure leaves [`Fetched::data`] empty and sets
//! [`Fetched::error`].

pub mod cache;
pub mod core;
mod databases;
mod datasets;
pub mod endpoint;
pub mod params;
mod search;
pub mod transport;

pub use cache::{CacheHandler, FileCache, MemoryCache};
pub use crate::core::{Fetched, Format, Payload, QuandlClient, QuandlClientBuilder, QuandlError, WireFormat};
pub use endpoint::Endpoint;
pub use params::Params;
pub use transport::{Strategy, TransportCaps};

#[cfg(feature = "tracing-subscriber")]
/// Installs a `tracing` subscriber filtered by `RUST_LOG` (default `quandl_rs=debug`).
/// Dev-only convenience for demos and tests; a second call is a no-op.
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quandl_rs=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
