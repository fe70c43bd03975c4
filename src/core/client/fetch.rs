//! The request pipeline: normalize parameters, build the URL, go through the cache, decode.

use std::path::Path;

use super::QuandlClient;
use crate::cache;
use crate::core::{Fetched, Payload, QuandlError, decode};
use crate::endpoint::Endpoint;
use crate::params::{self, Params};

impl QuandlClient {
    /// Builds the URL a call to `endpoint` with `params` would request, without fetching it.
    ///
    /// The client's default parameters come first; `params` overrides them key by key.
    ///
    /// # Errors
    ///
    /// Returns `QuandlError::InvalidDateExpression` if `trim_start`/`trim_end` cannot be
    /// resolved.
    pub fn url_for(&self, endpoint: &Endpoint, params: &Params) -> Result<String, QuandlError> {
        let wire = self.format().wire(endpoint.omits_csv());
        let query = if endpoint.takes_query() {
            let merged = self.default_params().merged(params);
            params::normalize(&merged, self.api_key(), self.today())?
        } else {
            String::new()
        };
        Ok(endpoint.url(self.base_url(), wire, &query))
    }

    /// Calls any endpoint by path, for resources without a dedicated method.
    ///
    /// `path` is relative to the API root and has no extension: `get("datatables/ZACKS/FC",
    /// &params)` requests `.../datatables/ZACKS/FC.{fmt}`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params)))]
    pub async fn get(&self, path: &str, params: &Params) -> Fetched {
        let endpoint = Endpoint::Direct {
            path: path.to_string(),
        };
        self.fetch(&endpoint, params).await
    }

    pub(crate) async fn fetch(&self, endpoint: &Endpoint, params: &Params) -> Fetched<Payload> {
        let url = match self.url_for(endpoint, params) {
            Ok(url) => url,
            Err(e) => return Fetched::failed(String::new(), e),
        };

        let got = cache::fetch(&url, self.cache(), self.transport()).await;
        let outcome = got.body.and_then(|raw| decode::decode(raw, self.format()));

        #[cfg(feature = "tracing")]
        if let Err(e) = &outcome {
            tracing::warn!(url = %url, error = %e, "request failed");
        }

        Fetched::new(url, got.was_cached, outcome)
    }

    /// Streams `endpoint` into `path`. File downloads never go through the cache.
    pub(crate) async fn fetch_to_file(
        &self,
        endpoint: &Endpoint,
        params: &Params,
        path: &Path,
    ) -> Fetched<u64> {
        let url = match self.url_for(endpoint, params) {
            Ok(url) => url,
            Err(e) => return Fetched::failed(String::new(), e),
        };

        let outcome = self.transport().download_to_file(&url, path).await.map(Some);

        #[cfg(feature = "tracing")]
        if let Err(e) = &outcome {
            tracing::warn!(url = %url, error = %e, "download failed");
        }

        Fetched::new(url, false, outcome)
    }
}
