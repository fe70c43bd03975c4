//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use url::Url;

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("QUANDL_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// `https://host/api/v3/datasets/WIKI/AAPL.csv?x=1` -> `datasets_WIKI_AAPL.csv`
pub(crate) fn fixture_name(url: &str) -> String {
    let path = Url::parse(url).map_or_else(|_| url.to_string(), |u| u.path().to_string());
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    // drop everything up to the API version segment (`v3`)
    let start = segments
        .iter()
        .position(|s| s.len() > 1 && s.starts_with('v') && s[1..].chars().all(|c| c.is_ascii_digit()))
        .map_or(0, |i| i + 1);
    let name = segments[start..].join("_");
    if name.contains('.') { name } else { format!("{name}.bin") }
}

pub(crate) fn record_fixture(url: &str, body: &str) -> Result<(), std::io::Error> {
    let dir = get_fixture_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    let path = dir.join(fixture_name(url));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    if env::var("QUANDL_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("QUANDL_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
