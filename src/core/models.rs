use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::QuandlError;

/* ----- PAYLOAD (shared by every endpoint module) ----- */

/// The data returned by a successful call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Raw CSV, JSON or XML text, exactly as the server sent it.
    Text(String),
    /// A decoded JSON document (`Format::Object`).
    Object(serde_json::Value),
}

impl Payload {
    /// The raw text, if this payload was not decoded.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Object(_) => None,
        }
    }

    /// The decoded JSON document, if `Format::Object` was used.
    pub fn as_object(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Object(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// Deserializes the payload into a caller-defined type.
    ///
    /// Text payloads are parsed as JSON, so this also works for `Format::Json`.
    ///
    /// # Errors
    ///
    /// Returns `QuandlError::Decode` if the payload does not match `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, QuandlError> {
        match self {
            Self::Text(s) => Ok(serde_json::from_str(s)?),
            Self::Object(v) => Ok(T::deserialize(v)?),
        }
    }
}

/* ----- CALL OUTCOME ----- */

/// The outcome of one API call.
///
/// Carries what used to be per-client observation state: the URL that was requested,
/// whether the body came from the cache, and the error if the call failed. `data` and
/// `error` are never both set.
#[derive(Debug)]
pub struct Fetched<T = Payload> {
    url: String,
    was_cached: bool,
    data: Option<T>,
    error: Option<QuandlError>,
}

impl<T> Fetched<T> {
    pub(crate) fn new(url: String, was_cached: bool, outcome: Result<Option<T>, QuandlError>) -> Self {
        let (data, error) = match outcome {
            Ok(data) => (data, None),
            Err(e) => (None, Some(e)),
        };
        Self {
            url,
            was_cached,
            data,
            error,
        }
    }

    pub(crate) fn failed(url: String, error: QuandlError) -> Self {
        Self::new(url, false, Err(error))
    }

    /// The fully-built request URL (empty if the URL could not be built).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `true` if the body was served by the cache handler.
    pub const fn was_cached(&self) -> bool {
        self.was_cached
    }

    /// The data, or `None` on failure or an empty response.
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// The reason the call failed, if it did.
    pub const fn error(&self) -> Option<&QuandlError> {
        self.error.as_ref()
    }

    /// `true` if the call failed.
    pub const fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Consumes the outcome, keeping only the data.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Converts into a `Result`; an empty response is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns the error captured by the call.
    pub fn into_result(self) -> Result<Option<T>, QuandlError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.data),
        }
    }
}
