//! Dataset time series and metadata.

use crate::core::{Fetched, QuandlClient};
use crate::endpoint::Endpoint;
use crate::params::Params;

impl QuandlClient {
    /// Fetches one dataset, e.g. `WIKI/AAPL`.
    ///
    /// Any dataset parameter can be passed through `params` (`rows`, `collapse`,
    /// `transformation`, `column_index`, `order`, ...). `trim_start` and `trim_end` accept
    /// relative expressions such as `"today-30 days"`.
    ///
    /// ```no_run
    /// # async fn run() {
    /// use quandl_rs::{Format, Params, QuandlClient};
    ///
    /// let client = QuandlClient::builder()
    ///     .api_key("YOUR_KEY")
    ///     .format(Format::Csv)
    ///     .build()
    ///     .unwrap();
    /// let res = client
    ///     .get_symbol("WIKI/AAPL", &Params::new().trim_start("today-30 days").trim_end("today"))
    ///     .await;
    /// match res.error() {
    ///     None => println!("{:?}", res.data()),
    ///     Some(e) => eprintln!("{} failed: {e}", res.url()),
    /// }
    /// # }
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params)))]
    pub async fn get_symbol(&self, symbol: &str, params: &Params) -> Fetched {
        let endpoint = Endpoint::Symbol {
            symbol: symbol.to_string(),
        };
        self.fetch(&endpoint, params).await
    }

    /// Fetches several datasets merged into one table.
    ///
    /// Symbols may use slash or dot notation and may carry a column selector
    /// (`"WIKI/AAPL.4"`).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, symbols, params)))]
    pub async fn get_symbols<S: AsRef<str>>(&self, symbols: &[S], params: &Params) -> Fetched {
        let endpoint = Endpoint::Multiset {
            symbols: symbols.iter().map(|s| s.as_ref().to_string()).collect(),
        };
        self.fetch(&endpoint, params).await
    }

    /// Fetches the metadata of a dataset. No query string is sent.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn get_meta(&self, symbol: &str) -> Fetched {
        let endpoint = Endpoint::Meta {
            symbol: symbol.to_string(),
        };
        self.fetch(&endpoint, &Params::new()).await
    }
}
