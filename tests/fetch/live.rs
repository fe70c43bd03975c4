use quandl_rs::{Format, MemoryCache, Params, QuandlClient};
use std::time::Duration;

fn live_client(format: Format) -> QuandlClient {
    let mut b = QuandlClient::builder()
        .format(format)
        .cache(MemoryCache::new(Duration::from_secs(60)))
        .timeout(Duration::from_secs(30));
    if let Ok(key) = std::env::var("QUANDL_API_KEY") {
        b = b.api_key(key);
    }
    b.build().unwrap()
}

#[tokio::test]
#[ignore]
async fn live_symbol_and_cache() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = live_client(Format::Object);
    let params = Params::new().trim_start("2014-01-01").trim_end("2014-02-02");

    let first = client.get_symbol("WIKI/AAPL", &params).await;
    assert!(first.error().is_none(), "{:?}", first.error());
    assert!(!first.was_cached());

    let second = client.get_symbol("WIKI/AAPL", &params).await;
    assert!(second.was_cached());
    assert_eq!(first.data(), second.data());
}

#[tokio::test]
#[ignore]
async fn live_invalid_symbol() {
    if !crate::common::live_enabled() {
        return;
    }

    let res = live_client(Format::Json)
        .get_symbol("INVALID/SYMBOL", &Params::new())
        .await;
    assert!(res.data().is_none());
    assert!(res.is_err());
}
