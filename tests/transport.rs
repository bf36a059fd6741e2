mod common;

use common::test_config;
use github_harvester::error::HarvestError;
use github_harvester::transport::Transport;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[tokio::test]
async fn success_passes_the_response_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/widget")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    let transport = Transport::new(&test_config(5)).expect("transport should build");
    let response = transport
        .get(&format!("{}/widget", server.url()), &[])
        .await
        .expect("request should succeed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"ok":true}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_retryable_status_is_returned_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/widget")
        .with_status(404)
        .with_body("Not Found")
        .expect(1)
        .create_async()
        .await;

    let transport = Transport::new(&test_config(5)).expect("transport should build");
    let response = transport
        .get(&format!("{}/widget", server.url()), &[])
        .await
        .expect("a 404 is a received response, not an error");

    assert_eq!(response.status(), 404);
    mock.assert_async().await;
}

#[tokio::test]
async fn retry_budget_exhaustion_surfaces_connection_failure() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/widget")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    let transport = Transport::new(&test_config(2)).expect("transport should build");
    let result = transport.get(&format!("{}/widget", server.url()), &[]).await;

    match result {
        Err(HarvestError::ConnectionFailure { attempts, reason }) => {
            assert_eq!(attempts, 3, "one initial attempt plus two retries");
            assert!(reason.contains("503"), "reason should name the last status: {}", reason);
        }
        other => panic!("expected ConnectionFailure, got: {:?}", other.map(|r| r.status())),
    }

    mock.assert_async().await;
}

/// Serves one canned status per connection, in order, repeating the last
/// entry. Returns the bound address and a hit counter.
async fn serve_status_sequence(statuses: Vec<u16>) -> (std::net::SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let hit = counter.fetch_add(1, Ordering::SeqCst);
            let status = *statuses.get(hit).unwrap_or_else(|| statuses.last().unwrap());

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|window| window == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }

            let (reason, body) = match status {
                200 => ("OK", "{}"),
                503 => ("Service Unavailable", ""),
                _ => ("Error", ""),
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (addr, hits)
}

#[tokio::test]
async fn recovers_after_transient_failures() {
    let (addr, hits) = serve_status_sequence(vec![503, 503, 200]).await;

    let transport = Transport::new(&test_config(5)).expect("transport should build");
    let response = transport
        .get(&format!("http://{}/widget", addr), &[])
        .await
        .expect("third attempt should succeed");

    assert_eq!(response.status(), 200);
    assert_eq!(hits.load(Ordering::SeqCst), 3, "two retries before the success");
}

#[tokio::test]
async fn unanswered_request_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept and then go silent; the client's timeout has to fire.
    tokio::spawn(async move {
        let Ok((socket, _)) = listener.accept().await else {
            return;
        };
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let mut config = test_config(5);
    config.timeout = Duration::from_millis(200);

    let transport = Transport::new(&config).expect("transport should build");
    let result = transport.get(&format!("http://{}/widget", addr), &[]).await;

    match result {
        Err(HarvestError::Timeout { url }) => assert!(url.contains("/widget")),
        other => panic!("expected Timeout, got: {:?}", other.map(|r| r.status())),
    }
}
