//! Network fetches with two interchangeable strategies.
//!
//! - [`Strategy::Simple`]: a one-shot blocking fetch run on tokio's blocking pool
//!   (requires the `blocking` feature). Honors the timeout only.
//! - [`Strategy::Client`]: the shared async `reqwest::Client` built by the client builder,
//!   with user agent, compression, timeouts and the optional TLS-verification override.
//!
//! Both classify failures the same way: 404 becomes [`QuandlError::InvalidUrl`], other
//! non-2xx statuses [`QuandlError::Status`], deadline overruns [`QuandlError::Timeout`], and
//! anything else [`QuandlError::Transport`] with the transport's own message.

mod client;
#[cfg(feature = "blocking")]
mod simple;

use std::path::Path;
use std::time::Duration;

use crate::core::QuandlError;

/// Which strategies can run in this build/environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportCaps {
    /// The blocking fetch is available.
    pub simple: bool,
    /// The async HTTP client is available.
    pub client: bool,
}

impl TransportCaps {
    /// Capabilities compiled into this build.
    #[must_use]
    pub const fn probe() -> Self {
        Self {
            simple: cfg!(feature = "blocking"),
            client: true,
        }
    }

    /// Capabilities present in both `self` and `other`.
    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        Self {
            simple: self.simple && other.simple,
            client: self.client && other.client,
        }
    }
}

impl Default for TransportCaps {
    fn default() -> Self {
        Self::probe()
    }
}

/// A fetch implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Simple,
    Client,
}

/// Picks the strategy for a call.
///
/// `Simple` is preferred unless `force_client` is set; either one stands in for the other when
/// it is missing.
///
/// # Errors
///
/// Returns `QuandlError::TransportUnavailable` when neither strategy is available.
pub fn select(caps: TransportCaps, force_client: bool) -> Result<Strategy, QuandlError> {
    match (caps.simple, caps.client, force_client) {
        (true, _, false) | (true, false, true) => Ok(Strategy::Simple),
        (_, true, _) => Ok(Strategy::Client),
        (false, false, _) => Err(QuandlError::TransportUnavailable),
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    caps: TransportCaps,
    force_client: bool,
    #[cfg_attr(not(feature = "blocking"), allow(dead_code))]
    timeout: Option<Duration>,
    #[cfg_attr(not(feature = "blocking"), allow(dead_code))]
    user_agent: String,
}

impl Transport {
    pub(crate) const fn new(
        http: reqwest::Client,
        caps: TransportCaps,
        force_client: bool,
        timeout: Option<Duration>,
        user_agent: String,
    ) -> Self {
        Self {
            http,
            caps,
            force_client,
            timeout,
            user_agent,
        }
    }

    pub(crate) async fn download(&self, url: &str) -> Result<String, QuandlError> {
        let strategy = select(self.caps, self.force_client)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?strategy, url, "download");

        match strategy {
            #[cfg(feature = "blocking")]
            Strategy::Simple => simple::download(url, self.timeout, &self.user_agent).await,
            #[cfg(not(feature = "blocking"))]
            Strategy::Simple => Err(QuandlError::TransportUnavailable),
            Strategy::Client => client::download(&self.http, url).await,
        }
    }

    /// Streams the body to `path`, returning the number of bytes written.
    ///
    /// A file created by a failed download is removed.
    pub(crate) async fn download_to_file(&self, url: &str, path: &Path) -> Result<u64, QuandlError> {
        let strategy = select(self.caps, self.force_client)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?strategy, url, path = %path.display(), "download to file");

        match strategy {
            #[cfg(feature = "blocking")]
            Strategy::Simple => {
                simple::download_to_file(url, path, self.timeout, &self.user_agent).await
            }
            #[cfg(not(feature = "blocking"))]
            Strategy::Simple => Err(QuandlError::TransportUnavailable),
            Strategy::Client => client::download_to_file(&self.http, url, path).await,
        }
    }
}

fn check_status(status: u16, url: &str) -> Result<(), QuandlError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(QuandlError::InvalidUrl { url: url.to_string() }),
        _ => Err(QuandlError::Status {
            status,
            url: url.to_string(),
        }),
    }
}

fn classify(e: &reqwest::Error, url: &str) -> QuandlError {
    if e.is_timeout() {
        return QuandlError::Timeout { url: url.to_string() };
    }
    if let Some(status) = e.status()
        && let Err(mapped) = check_status(status.as_u16(), url)
    {
        return mapped;
    }
    QuandlError::Transport(e.to_string())
}
