#[cfg(feature = "test-mode")]
use std::env;

/// Read the async response body as text.
/// In `test-mode`, if `QUANDL_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(resp: reqwest::Response, url: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    record(url, &text);
    Ok(text)
}

/// Blocking twin of [`get_text`] for the simple transport strategy.
#[cfg(feature = "blocking")]
pub(crate) fn get_text_blocking(
    resp: reqwest::blocking::Response,
    url: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text()?;
    record(url, &text);
    Ok(text)
}

#[allow(unused_variables)]
fn record(url: &str, body: &str) {
    #[cfg(feature = "test-mode")]
    {
        if env::var("QUANDL_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(url, body)
        {
            eprintln!("QUANDL_RECORD: failed to write fixture for {url}: {e}");
        }
    }
}
