use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::{Client, Response};

use super::{check_status, classify};
use crate::core::QuandlError;
use crate::core::net;

pub(super) async fn download(
    url: &str,
    timeout: Option<Duration>,
    user_agent: &str,
) -> Result<String, QuandlError> {
    let url = url.to_string();
    let user_agent = user_agent.to_string();
    tokio::task::spawn_blocking(move || {
        let resp = get(&url, timeout, &user_agent)?;
        net::get_text_blocking(resp, &url).map_err(|e| classify(&e, &url))
    })
    .await
    .map_err(|e| QuandlError::Transport(e.to_string()))?
}

pub(super) async fn download_to_file(
    url: &str,
    path: &Path,
    timeout: Option<Duration>,
    user_agent: &str,
) -> Result<u64, QuandlError> {
    let url = url.to_string();
    let path: PathBuf = path.to_path_buf();
    let user_agent = user_agent.to_string();
    tokio::task::spawn_blocking(move || {
        let mut resp = get(&url, timeout, &user_agent)?;
        let mut file = File::create(&path)?;
        let copied = resp
            .copy_to(&mut file)
            .map_err(|e| classify(&e, &url))
            .and_then(|n| file.flush().map(|()| n).map_err(QuandlError::from));
        if copied.is_err() {
            drop(file);
            let _ = fs::remove_file(&path);
        }
        copied
    })
    .await
    .map_err(|e| QuandlError::Transport(e.to_string()))?
}

/// Sends a GET with a throwaway client; `None` disables reqwest's default 30s timeout.
fn get(url: &str, timeout: Option<Duration>, user_agent: &str) -> Result<Response, QuandlError> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;
    let resp = client.get(url).send().map_err(|e| classify(&e, url))?;
    check_status(resp.status().as_u16(), url)?;
    Ok(resp)
}
