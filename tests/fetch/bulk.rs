use httpmock::Method::GET;
use httpmock::MockServer;
use quandl_rs::{Format, QuandlClient, QuandlError, TransportCaps};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use url::Url;

use crate::common::{API_KEY, RecordingCache, builder_for};

const SIMPLE_ONLY: TransportCaps = TransportCaps {
    simple: true,
    client: false,
};
const CLIENT_ONLY: TransportCaps = TransportCaps {
    simple: false,
    client: true,
};

fn archive() -> Vec<u8> {
    // zip magic followed by filler, large enough to arrive in several chunks
    let mut bytes = b"PK\x03\x04".to_vec();
    bytes.extend((0..256 * 1024).map(|i| (i % 251) as u8));
    bytes
}

#[tokio::test]
async fn bulk_archive_streams_to_file_on_both_strategies() {
    let server = MockServer::start();
    let body = archive();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/databases/WIKI/data")
            .query_param("download_type", "partial")
            .query_param("auth_token", API_KEY);
        then.status(200)
            .header("content-type", "application/zip")
            .body(body.clone());
    });
    let dir = tempfile::tempdir().unwrap();

    for (i, caps) in [SIMPLE_ONLY, CLIENT_ONLY].into_iter().enumerate() {
        let path = dir.path().join(format!("wiki-{i}.zip"));
        let res = builder_for(&server, Format::Csv)
            .transport_caps(caps)
            .build()
            .unwrap()
            .get_bulk("WIKI", &path, false)
            .await;

        assert!(res.error().is_none(), "{caps:?}: {:?}", res.error());
        assert!(!res.was_cached());
        assert_eq!(res.data(), Some(&(body.len() as u64)));
        assert_eq!(std::fs::read(&path).unwrap(), body);
    }
    mock.assert_calls(2);
}

#[tokio::test]
async fn complete_flag_and_no_format_extension() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/databases/FRED/data")
            .query_param("download_type", "complete");
        then.status(200).body("PK");
    });
    let dir = tempfile::tempdir().unwrap();

    let res = builder_for(&server, Format::Object)
        .build()
        .unwrap()
        .get_bulk("FRED", dir.path().join("fred.zip"), true)
        .await;

    mock.assert();
    assert_eq!(
        res.url(),
        format!(
            "{}/api/v3/databases/FRED/data?download_type=complete&auth_token=DEBUG_KEY",
            server.base_url()
        )
    );
    assert_eq!(res.into_data(), Some(2));
}

#[tokio::test]
async fn missing_database_leaves_no_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v3/databases/NOPE/data");
        then.status(404).body("not found");
    });
    let dir = tempfile::tempdir().unwrap();

    for caps in [SIMPLE_ONLY, CLIENT_ONLY] {
        let path = dir.path().join("nope.zip");
        let res = builder_for(&server, Format::Csv)
            .transport_caps(caps)
            .build()
            .unwrap()
            .get_bulk("NOPE", &path, false)
            .await;

        assert!(matches!(res.error(), Some(QuandlError::InvalidUrl { .. })));
        assert!(res.data().is_none());
        assert!(!path.exists());
    }
}

#[tokio::test]
async fn bulk_downloads_bypass_the_cache() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/databases/WIKI/data");
        then.status(200).body("PK");
    });
    let cache = Arc::new(RecordingCache::default());
    let client = builder_for(&server, Format::Csv)
        .shared_cache(cache.clone())
        .build()
        .unwrap();
    let dir = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        let res = client.get_bulk("WIKI", dir.path().join("wiki.zip"), false).await;
        assert!(!res.was_cached());
    }

    mock.assert_calls(2);
    assert_eq!(cache.gets(), 0);
    assert!(cache.sets().is_empty());
}

#[tokio::test]
async fn unwritable_destination_is_an_io_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v3/databases/WIKI/data");
        then.status(200).body("PK");
    });
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-subdir").join("wiki.zip");

    let res = builder_for(&server, Format::Csv)
        .build()
        .unwrap()
        .get_bulk("WIKI", &path, false)
        .await;

    assert!(matches!(res.error(), Some(QuandlError::Io(_))));
}

/// Serves `conns` requests that promise 100000 bytes, send 5000 and hang up.
fn truncating_server(conns: usize) -> (Url, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        for _ in 0..conns {
            let (mut sock, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                req.extend_from_slice(&buf[..n]);
            }
            let head = "HTTP/1.1 200 OK\r\nContent-Type: application/zip\r\nContent-Length: 100000\r\nConnection: close\r\n\r\n";
            let _ = sock.write_all(head.as_bytes());
            let _ = sock.write_all(&[7u8; 5000]);
            let _ = sock.flush();
        }
    });
    let base = Url::parse(&format!("http://127.0.0.1:{port}/api/v3")).unwrap();
    (base, handle)
}

#[tokio::test]
async fn truncated_body_removes_the_partial_file() {
    let (base, server) = truncating_server(2);
    let dir = tempfile::tempdir().unwrap();

    for (i, caps) in [SIMPLE_ONLY, CLIENT_ONLY].into_iter().enumerate() {
        let path = dir.path().join(format!("cut-{i}.zip"));
        let res = QuandlClient::builder()
            .api_key(API_KEY)
            .base_url(base.clone())
            .transport_caps(caps)
            .build()
            .unwrap()
            .get_bulk("WIKI", &path, false)
            .await;

        assert!(res.data().is_none(), "{caps:?}");
        match res.error() {
            Some(QuandlError::Transport(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected Transport error with {caps:?}, got {other:?}"),
        }
        assert!(!path.exists(), "{caps:?} left a partial file behind");
    }

    server.join().unwrap();
}
