use std::path::{Path, PathBuf};

use futures::future::BoxFuture;
use sha2::{Digest, Sha256};

use super::CacheHandler;

/// Stores each response in its own file under a directory.
///
/// File names are the hex SHA-256 of `"quandl:" + url`. Entries never expire; delete the
/// files to invalidate them. Read and write failures behave as a miss and a dropped write.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Uses `dir` as the cache directory. It is created on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file that holds (or would hold) the entry for `url`.
    pub fn path_for(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(format!("quandl:{url}").as_bytes());
        self.dir.join(hex::encode(digest))
    }
}

impl CacheHandler for FileCache {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<String>> {
        Box::pin(async move { tokio::fs::read_to_string(self.path_for(key)).await.ok() })
    }

    fn set<'a>(&'a self, key: &'a str, payload: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            let path = self.path_for(key);
            let written = match tokio::fs::create_dir_all(&self.dir).await {
                Ok(()) => tokio::fs::write(&path, payload).await,
                Err(e) => Err(e),
            };
            if let Err(_e) = written {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %path.display(), error = %_e, "failed to write cache entry");
            }
        })
    }
}
