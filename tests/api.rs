//! End-to-end tests against the real router, bound on an ephemeral port and
//! driven with raw HTTP/1.1 requests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use performance_monitor::metrics::{Sampler, SamplingError, Snapshot, SystemSampler};
use performance_monitor::server::{create_router, PERFORMANCE_DATA_PATH};
use performance_monitor::AppState;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

// ─── Stub samplers ───────────────────────────────────────────────

/// Returns a new reading per call; the network counter grows each time.
#[derive(Default)]
struct CountingSampler {
    calls: AtomicU64,
}

impl Sampler for CountingSampler {
    fn sample(&self) -> Result<Snapshot, SamplingError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Snapshot {
            cpu_usage: 12.5,
            memory_usage: 48.2,
            disk_usage: 71.0,
            network_usage: 1_000 * n,
        })
    }
}

struct FailingSampler;

impl Sampler for FailingSampler {
    fn sample(&self) -> Result<Snapshot, SamplingError> {
        Err(SamplingError::DiskPath {
            path: PathBuf::from("/unreadable"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

async fn spawn_server(sampler: impl Sampler + 'static) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(Arc::new(AppState::new(sampler)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

struct RawResponse {
    status: u16,
    head: String,
    body: String,
}

async fn send(addr: SocketAddr, method: &str, path: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request =
        format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap();
    RawResponse {
        status,
        head: head.to_ascii_lowercase(),
        body: body.to_string(),
    }
}

async fn get_json(addr: SocketAddr) -> (u16, serde_json::Value) {
    let resp = send(addr, "GET", PERFORMANCE_DATA_PATH).await;
    (resp.status, serde_json::from_str(&resp.body).unwrap())
}

// ─── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn returns_all_four_fields_with_correct_types() {
    let addr = spawn_server(CountingSampler::default()).await;
    let (status, json) = get_json(addr).await;

    assert_eq!(status, 200);
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(json["cpu_usage"].as_f64(), Some(12.5));
    assert_eq!(json["memory_usage"].as_f64(), Some(48.2));
    assert_eq!(json["disk_usage"].as_f64(), Some(71.0));
    assert_eq!(json["network_usage"].as_u64(), Some(1_000));
}

#[tokio::test]
async fn every_request_takes_a_fresh_sample() {
    let addr = spawn_server(CountingSampler::default()).await;

    let (_, first) = get_json(addr).await;
    let (_, second) = get_json(addr).await;

    assert_eq!(first["network_usage"].as_u64(), Some(1_000));
    assert_eq!(second["network_usage"].as_u64(), Some(2_000));
}

#[tokio::test]
async fn sampling_failure_returns_500_with_error_body() {
    let addr = spawn_server(FailingSampler).await;
    let (status, json) = get_json(addr).await;

    assert_eq!(status, 500);
    assert_eq!(json["status"].as_u64(), Some(500));
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("/unreadable"), "unexpected message: {message}");
    assert!(json.get("cpu_usage").is_none());
}

#[tokio::test]
async fn responses_carry_timing_headers() {
    let addr = spawn_server(CountingSampler::default()).await;
    let resp = send(addr, "GET", PERFORMANCE_DATA_PATH).await;

    assert_eq!(resp.status, 200);
    assert!(resp.head.contains("x-response-time-us:"));
    assert!(resp.head.contains("server-timing: total;dur="));
}

#[tokio::test]
async fn other_verbs_are_rejected() {
    let addr = spawn_server(CountingSampler::default()).await;
    let resp = send(addr, "POST", PERFORMANCE_DATA_PATH).await;
    assert_eq!(resp.status, 405);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let addr = spawn_server(CountingSampler::default()).await;
    let resp = send(addr, "GET", "/api/v1/metrics").await;
    assert_eq!(resp.status, 404);
}

#[tokio::test]
async fn healthy_host_serves_bounded_readings() {
    // Skip on hosts the system sampler cannot read (e.g. minimal containers).
    if SystemSampler::default().sample().is_err() {
        return;
    }

    let addr = spawn_server(SystemSampler::default()).await;
    let (status, json) = get_json(addr).await;

    assert_eq!(status, 200);
    for field in ["cpu_usage", "memory_usage", "disk_usage"] {
        let v = json[field].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&v), "{field} out of range: {v}");
    }
    assert!(json["network_usage"].is_u64());
}
