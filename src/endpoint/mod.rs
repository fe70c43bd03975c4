//! Endpoint kinds and URL construction.

use url::Url;

use crate::core::WireFormat;

/// A remote resource family, with the arguments its URL needs.
///
/// The set is closed: every variant carries exactly the values its template consumes, so a
/// URL can always be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Any path under the API root, for endpoints not otherwise modeled (`{path}.{fmt}`).
    Direct { path: String },
    /// A single dataset (`datasets/{symbol}.{fmt}`).
    Symbol { symbol: String },
    /// Several datasets merged column-wise (`multisets.{fmt}?columns=...`).
    Multiset { symbols: Vec<String> },
    /// Full-text dataset search (`datasets.{fmt}`). Rejects CSV.
    Search,
    /// Paged dataset listing of one database (`datasets.{fmt}`).
    List,
    /// Dataset metadata (`datasets/{symbol}/metadata.{fmt}`). Takes no query string.
    Meta { symbol: String },
    /// Paged database catalog (`databases.{fmt}`).
    Databases,
    /// Zipped archive of a whole database (`databases/{database}/data`).
    Bulk { database: String },
}

impl Endpoint {
    /// `true` for endpoints that do not serve CSV.
    pub const fn omits_csv(&self) -> bool {
        matches!(self, Self::Search)
    }

    /// `false` for endpoints whose URL never carries a query string.
    pub const fn takes_query(&self) -> bool {
        !matches!(self, Self::Meta { .. })
    }

    /// Renders the request URL.
    ///
    /// `base` is the API root (`https://www.quandl.com/api/v3`). A trailing `?` or `&` left by
    /// an empty `query` is trimmed.
    pub fn url(&self, base: &Url, wire: WireFormat, query: &str) -> String {
        let base = base.as_str().trim_end_matches('/');
        let url = match self {
            Self::Direct { path } => {
                format!("{base}/{}.{wire}?{query}", path.trim_matches('/'))
            }
            Self::Symbol { symbol } => format!("{base}/datasets/{symbol}.{wire}?{query}"),
            Self::Multiset { symbols } => {
                let columns = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("columns", &symbols_to_multi(symbols))
                    .finish();
                format!("{base}/multisets.{wire}?{columns}&{query}")
            }
            Self::Search | Self::List => format!("{base}/datasets.{wire}?{query}"),
            Self::Meta { symbol } => format!("{base}/datasets/{symbol}/metadata.{wire}"),
            Self::Databases => format!("{base}/databases.{wire}?{query}"),
            Self::Bulk { database } => format!("{base}/databases/{database}/data?{query}"),
        };
        url.trim_end_matches(['?', '&']).to_string()
    }
}

/// Converts symbols to the multiset column notation: `/` becomes `.`, joined by commas.
///
/// ```
/// use quandl_rs::endpoint::symbols_to_multi;
///
/// assert_eq!(symbols_to_multi(&["WIKI/CSCO", "WIKI/AAPL.4"]), "WIKI.CSCO,WIKI.AAPL.4");
/// ```
pub fn symbols_to_multi<S: AsRef<str>>(symbols: &[S]) -> String {
    symbols
        .iter()
        .map(|s| s.as_ref().replace('/', "."))
        .collect::<Vec<_>>()
        .join(",")
}
