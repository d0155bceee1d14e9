//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;

use health_gateway::config::{GatewayConfig, UpstreamConfig};
use health_gateway::{HttpServer, Shutdown, UpstreamForwarder};

pub const TEST_TOKEN: &str = "Bearer test-token";

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    delay: Duration,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Mock prediction API answering every request with a fixed status and body.
pub struct MockUpstream {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    pub fn url(&self) -> String {
        format!("http://{}/api/v1/predict/hba1c", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.captured.lock().unwrap().len()
    }
}

async fn capture(
    State(state): State<MockState>,
    method: Method,
    uri: axum::http::Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.captured.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });
    tokio::time::sleep(state.delay).await;
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

/// Start a mock upstream on an ephemeral port.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_slow_upstream(Duration::ZERO, status, body).await
}

/// Start a mock upstream that waits `delay` before answering.
pub async fn start_slow_upstream(delay: Duration, status: u16, body: &'static str) -> MockUpstream {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        delay,
        captured: captured.clone(),
    };
    let app = Router::new().fallback(capture).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, captured }
}

/// An address nothing is listening on.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn upstream_config(url: String) -> UpstreamConfig {
    UpstreamConfig {
        url,
        auth_token: TEST_TOKEN.to_string(),
        timeout_secs: Some(5),
    }
}

/// Forwarder that ignores any proxy settings in the environment.
pub fn test_forwarder(url: String) -> UpstreamForwarder {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    UpstreamForwarder::with_client(client, &upstream_config(url))
}

pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap()
}

/// A running gateway pointed at `upstream_url`.
pub struct Gateway {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl Gateway {
    pub fn forward_url(&self, query: &str) -> String {
        format!("http://{}/api/forward{}", self.addr, query)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub async fn start_gateway(upstream_url: String) -> Gateway {
    start_gateway_with(test_forwarder(upstream_url)).await
}

/// A running gateway using the given forwarder.
pub async fn start_gateway_with(forwarder: UpstreamForwarder) -> Gateway {
    let mut config = GatewayConfig::default();
    config.upstream = upstream_config(forwarder.url().to_string());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_forwarder(config, forwarder);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    Gateway { addr, shutdown }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Install a thread-local subscriber writing into this capture.
    ///
    /// Only covers tasks polled on the current thread, so pair it with the
    /// default single-threaded `#[tokio::test]` runtime.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let capture = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || capture.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
