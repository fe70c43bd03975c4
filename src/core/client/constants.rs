//! Centralized constants for default endpoints and UA.

/// Default user agent sent by both transport strategies.
pub(crate) const USER_AGENT: &str = concat!("quandl-rs/", env!("CARGO_PKG_VERSION"));

/// Quandl API root; endpoint paths are appended.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.quandl.com/api/v3";

/// Default page size for dataset search and database listings.
pub(crate) const DEFAULT_SEARCH_PER_PAGE: u32 = 300;

/// Default page size for the database catalog.
pub(crate) const DEFAULT_DATABASES_PER_PAGE: u32 = 100;
