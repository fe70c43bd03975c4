//! Database catalog and bulk archives.

use std::path::Path;

use crate::core::client::constants::DEFAULT_DATABASES_PER_PAGE;
use crate::core::{Fetched, QuandlClient};
use crate::endpoint::Endpoint;
use crate::params::Params;

impl QuandlClient {
    /// Lists available databases. `page` and `per_page` default to `1` and `100`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn get_databases(&self, page: Option<u32>, per_page: Option<u32>) -> Fetched {
        let params = Params::new()
            .per_page(per_page.unwrap_or(DEFAULT_DATABASES_PER_PAGE))
            .page(page.unwrap_or(1));
        self.fetch(&Endpoint::Databases, &params).await
    }

    /// Downloads the zipped archive of a whole database to `path`.
    ///
    /// `complete` asks for the full history, otherwise only the latest update is sent. On
    /// success the data is the number of bytes written. The cache is not consulted, and a file
    /// left behind by a failed download is removed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, path), fields(path = %path.as_ref().display())))]
    pub async fn get_bulk(
        &self,
        database: &str,
        path: impl AsRef<Path>,
        complete: bool,
    ) -> Fetched<u64> {
        let params =
            Params::new().set("download_type", if complete { "complete" } else { "partial" });
        let endpoint = Endpoint::Bulk {
            database: database.to_string(),
        };
        self.fetch_to_file(&endpoint, &params, path.as_ref()).await
    }
}
