//! Public client surface + builder.
//! Internals are split into `fetch` (the request pipeline) and `constants` (UA + defaults).

pub(crate) mod constants;
mod fetch;

use crate::cache::CacheHandler;
use crate::core::{Format, QuandlError};
use crate::params::Params;
use crate::transport::{Transport, TransportCaps};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Quandl API.
///
/// Configuration is fixed at [`QuandlClientBuilder::build`]; every call reports its own URL,
/// cache status and error through [`Fetched`](crate::Fetched), so one client can serve many
/// tasks at once. Cloning is cheap.
#[derive(Clone)]
pub struct QuandlClient {
    transport: Transport,
    base_url: Url,
    api_key: Option<String>,
    format: Format,
    default_params: Params,
    cache: Option<Arc<dyn CacheHandler>>,
    timezone: Tz,
}

impl Default for QuandlClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl fmt::Debug for QuandlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuandlClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("format", &self.format)
            .field("default_params", &self.default_params)
            .field("cache_enabled", &self.cache.is_some())
            .field("timezone", &self.timezone)
            .field("transport", &self.transport)
            .finish()
    }
}

impl QuandlClient {
    /// Create a new builder.
    pub fn builder() -> QuandlClientBuilder {
        QuandlClientBuilder::default()
    }

    /// Shorthand for a client with a token and every other setting at its default.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, QuandlError> {
        Self::builder().api_key(api_key).build()
    }

    /// The output format of this client's calls.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// A copy of this client that answers in `format`.
    ///
    /// Transport, cache and parameters are shared with `self`.
    ///
    /// ```no_run
    /// # async fn run(client: quandl_rs::QuandlClient) {
    /// use quandl_rs::{Format, Params};
    ///
    /// let csv = client.get_symbol("WIKI/AAPL", &Params::new()).await;
    /// let obj = client.with_format(Format::Object).get_search("crude oil", None, None).await;
    /// # }
    /// ```
    #[must_use]
    pub fn with_format(&self, format: Format) -> Self {
        Self {
            format,
            ..self.clone()
        }
    }

    /// Parameters sent with every call unless the call sets the same key.
    pub const fn default_params(&self) -> &Params {
        &self.default_params
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
    pub(crate) fn cache(&self) -> Option<&dyn CacheHandler> {
        self.cache.as_deref()
    }

    /// The current calendar date in the configured time zone.
    pub(crate) fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QuandlClientBuilder {
    api_key: Option<String>,
    format: Option<Format>,
    default_params: Params,
    cache: Option<Arc<dyn CacheHandler>>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timezone: Option<Tz>,
    transport_caps: Option<TransportCaps>,
    force_client: bool,
    no_ssl_verify: bool,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl QuandlClientBuilder {
    /// Token appended to every request as `auth_token`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Output format for every call. Default: [`Format::Object`].
    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Parameters added to every call, e.g. a fixed `trim_end` or `collapse`.
    ///
    /// A call that passes the same key wins. Date keys are resolved per call, so
    /// `"yesterday"` stays relative.
    pub fn default_params(mut self, params: Params) -> Self {
        self.default_params = params;
        self
    }

    /// Route requests through a cache.
    pub fn cache(mut self, cache: impl CacheHandler + 'static) -> Self {
        self.cache = Some(Arc::new(cache));
        self
    }

    /// Route requests through a cache the caller keeps a handle to.
    pub fn shared_cache(mut self, cache: Arc<dyn CacheHandler>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Override the API root (e.g., `https://www.quandl.com/api/v3`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Time zone in which `today` is evaluated for `trim_start`/`trim_end`. Default: UTC.
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.timezone = Some(tz);
        self
    }

    /// Restrict the transport strategies the client may use.
    /// Strategies not compiled into this build stay unavailable.
    pub const fn transport_caps(mut self, caps: TransportCaps) -> Self {
        self.transport_caps = Some(caps);
        self
    }

    /// Always use the full HTTP client strategy, even when the simple fetch is available.
    pub const fn force_client(mut self, yes: bool) -> Self {
        self.force_client = yes;
        self
    }

    /// Disable TLS certificate verification on the HTTP client strategy.
    ///
    /// **Insecure**: any certificate is accepted, so responses can be intercepted or forged.
    /// Only meant for broken corporate proxies and test servers. The simple strategy always
    /// verifies; combine with [`force_client`](Self::force_client) to make sure the setting
    /// takes effect.
    pub const fn no_ssl_verify(mut self, yes: bool) -> Self {
        self.no_ssl_verify = yes;
        self
    }

    /// Set a request timeout (overall), applied by both strategies. Default: none.
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout for the HTTP client strategy. Default: none.
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<QuandlClient, QuandlError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        let mut httpb = reqwest::Client::builder()
            .user_agent(user_agent.as_str())
            .danger_accept_invalid_certs(self.no_ssl_verify);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        let caps = self
            .transport_caps
            .map_or_else(TransportCaps::probe, |c| c.intersect(TransportCaps::probe()));

        Ok(QuandlClient {
            transport: Transport::new(http, caps, self.force_client, self.timeout, user_agent),
            base_url,
            api_key: self.api_key,
            format: self.format.unwrap_or_default(),
            default_params: self.default_params,
            cache: self.cache,
            timezone: self.timezone.unwrap_or(Tz::UTC),
        })
    }
}
