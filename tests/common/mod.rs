#![allow(dead_code)]

use futures::future::BoxFuture;
use httpmock::MockServer;
use quandl_rs::{CacheHandler, Format, QuandlClient, QuandlClientBuilder};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::{fs, path::Path};
use url::Url;

pub const API_KEY: &str = "DEBUG_KEY";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// `{server}/api/v3`, the API root the mocks are mounted under.
pub fn api_root(server: &MockServer) -> Url {
    Url::parse(&format!("{}/api/v3", server.base_url())).unwrap()
}

pub fn builder_for(server: &MockServer, format: Format) -> QuandlClientBuilder {
    QuandlClient::builder()
        .api_key(API_KEY)
        .format(format)
        .base_url(api_root(server))
}

pub fn client_for(server: &MockServer, format: Format) -> QuandlClient {
    builder_for(server, format).build().unwrap()
}

pub fn live_enabled() -> bool {
    std::env::var("QUANDL_LIVE").ok().as_deref() == Some("1")
}

/// Cache collaborator that records every call made to it.
#[derive(Default)]
pub struct RecordingCache {
    store: Mutex<HashMap<String, String>>,
    gets: AtomicUsize,
    sets: Mutex<Vec<(String, String)>>,
}

impl RecordingCache {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> Vec<(String, String)> {
        self.sets.lock().unwrap().clone()
    }

    pub fn preload(&self, key: &str, payload: &str) {
        self.store
            .lock()
            .unwrap()
            .insert(key.to_string(), payload.to_string());
    }
}

impl CacheHandler for RecordingCache {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Option<String>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        let hit = self.store.lock().unwrap().get(key).cloned();
        Box::pin(async move { hit })
    }

    fn set<'a>(&'a self, key: &'a str, payload: &'a str) -> BoxFuture<'a, ()> {
        self.sets
            .lock()
            .unwrap()
            .push((key.to_string(), payload.to_string()));
        self.preload(key, payload);
        Box::pin(async {})
    }
}
