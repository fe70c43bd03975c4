use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::{check_status, classify};
use crate::core::QuandlError;
use crate::core::net;

pub(super) async fn download(http: &reqwest::Client, url: &str) -> Result<String, QuandlError> {
    let resp = http.get(url).send().await.map_err(|e| classify(&e, url))?;
    check_status(resp.status().as_u16(), url)?;
    net::get_text(resp, url).await.map_err(|e| classify(&e, url))
}

pub(super) async fn download_to_file(
    http: &reqwest::Client,
    url: &str,
    path: &Path,
) -> Result<u64, QuandlError> {
    let mut resp = http.get(url).send().await.map_err(|e| classify(&e, url))?;
    check_status(resp.status().as_u16(), url)?;

    let mut file = File::create(path).await?;
    match stream(&mut resp, &mut file, url).await {
        Ok(written) => Ok(written),
        Err(e) => {
            drop(file);
            let _ = tokio::fs::remove_file(path).await;
            Err(e)
        }
    }
}

async fn stream(resp: &mut reqwest::Response, file: &mut File, url: &str) -> Result<u64, QuandlError> {
    let mut written = 0u64;
    while let Some(chunk) = resp.chunk().await.map_err(|e| classify(&e, url))? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}
