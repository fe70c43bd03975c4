use crate::core::client::constants::DEFAULT_SEARCH_PER_PAGE;
use crate::core::{Fetched, QuandlClient};
use crate::endpoint::Endpoint;
use crate::params::Params;

impl QuandlClient {
    /// Searches datasets. CSV is not served by this endpoint; a CSV client gets JSON here.
    ///
    /// `page` and `per_page` default to `1` and `300`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn get_search(
        &self,
        query: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Fetched {
        let params = Params::new()
            .set("query", query)
            .per_page(per_page.unwrap_or(DEFAULT_SEARCH_PER_PAGE))
            .page(page.unwrap_or(1));
        self.fetch(&Endpoint::Search, &params).await
    }

    /// Lists the datasets of one database (e.g. `"WIKI"`).
    ///
    /// `page` and `per_page` default to `1` and `300`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn get_list(
        &self,
        database: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Fetched {
        let params = Params::new()
            .set("database_code", database)
            .per_page(per_page.unwrap_or(DEFAULT_SEARCH_PER_PAGE))
            .page(page.unwrap_or(1));
        self.fetch(&Endpoint::List, &params).await
    }
}
