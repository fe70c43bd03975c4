//! Request parameters and their normalization into a query string.

mod dates;

pub use dates::resolve_date;

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::core::QuandlError;

/// Keys whose values are date expressions resolved to `YYYY-MM-DD`.
const DATE_KEYS: [&str; 2] = ["trim_start", "trim_end"];

/// Name of the parameter carrying the client's token.
pub(crate) const AUTH_KEY: &str = "auth_token";

/// An ordered set of query parameters.
///
/// Setting a key that is already present replaces its value without moving it, so the
/// query string follows first-insertion order.
///
/// ```
/// use quandl_rs::Params;
///
/// let p = Params::new()
///     .trim_start("today-30 days")
///     .trim_end("today")
///     .set("collapse", "weekly");
/// assert_eq!(p.get("collapse"), Some("weekly"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets an arbitrary endpoint parameter, passed through verbatim.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// In-place form of [`Params::set`].
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Start of the date range, as a free-form expression (`"2014-01-01"`, `"today-30 days"`).
    #[must_use]
    pub fn trim_start(self, expr: impl ToString) -> Self {
        self.set("trim_start", expr)
    }

    /// End of the date range, as a free-form expression.
    #[must_use]
    pub fn trim_end(self, expr: impl ToString) -> Self {
        self.set("trim_end", expr)
    }

    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.set("page", page)
    }

    #[must_use]
    pub fn per_page(self, per_page: u32) -> Self {
        self.set("per_page", per_page)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `self` overlaid with `other`: shared keys take `other`'s value and keep `self`'s
    /// position, new keys follow in `other`'s order.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in other.iter() {
            out.insert(k, v);
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Produces the query string for a request.
///
/// Injects `auth_token` (overriding a caller-supplied one), resolves `trim_start`/`trim_end`
/// relative to `today`, and form-encodes the pairs in order. An empty set yields `""`.
///
/// # Errors
///
/// Returns `QuandlError::InvalidDateExpression` if a date key cannot be resolved.
pub fn normalize(
    params: &Params,
    auth_token: Option<&str>,
    today: NaiveDate,
) -> Result<String, QuandlError> {
    let mut params = params.clone();
    if let Some(token) = auth_token {
        params.insert(AUTH_KEY, token);
    }
    if params.is_empty() {
        return Ok(String::new());
    }

    for (key, value) in &mut params.pairs {
        if DATE_KEYS.contains(&key.as_str()) {
            *value = resolve_date(value, today)?.format("%Y-%m-%d").to_string();
        }
    }

    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in params.iter() {
        ser.append_pair(k, v);
    }
    Ok(ser.finish())
}
