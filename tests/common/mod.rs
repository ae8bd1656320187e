//! Shared utilities for integration and load testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use deen_gateway::config::GatewayConfig;
use deen_gateway::{HttpServer, Shutdown};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// A mock upstream that records every request target it receives.
pub struct MockUpstream {
    pub addr: SocketAddr,
    targets: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    /// Request targets (path + query) seen so far, in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

/// Start a programmable mock upstream. `f` receives the request target
/// (e.g. `/v1/surah/1?x=y`) and returns status and JSON body.
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockUpstream
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let targets = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let recorded = targets.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        let (read_half, mut write_half) = socket.into_split();
                        let mut reader = BufReader::new(read_half);

                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) => break,
                                Ok(_) if line == "\r\n" || line == "\n" => break,
                                Ok(_) => continue,
                                Err(_) => return,
                            }
                        }

                        let target = request_line
                            .split_whitespace()
                            .nth(1)
                            .unwrap_or("/")
                            .to_string();
                        recorded.lock().unwrap().push(target.clone());

                        let (status, body) = f(target).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = write_half.write_all(response.as_bytes()).await;
                        let _ = write_half.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockUpstream { addr, targets }
}

/// Start a mock upstream that answers every request with the same JSON.
pub async fn start_mock_backend(body: &'static str) -> MockUpstream {
    start_programmable_backend(move |_| async move { (200, body.to_string()) }).await
}

/// Gateway config with all three upstreams pointed at `upstream`.
///
/// Quran and Aladhan are mounted under `/v1`, Hadith at the root, matching
/// the real services.
pub fn gateway_config(upstream: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.upstreams.quran_base_url = format!("http://{}/v1", upstream);
    config.upstreams.hadith_base_url = format!("http://{}", upstream);
    config.upstreams.aladhan_base_url = format!("http://{}/v1", upstream);
    config.upstreams.system_proxy = false;
    config.timeouts.upstream_secs = 5;
    config.timeouts.request_secs = 10;
    config
}

/// Start a gateway on an ephemeral port. Trigger the returned `Shutdown`
/// to stop it.
pub async fn start_gateway(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client that never goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap()
}

/// Quran-style success envelope.
pub fn ok_envelope(data: serde_json::Value) -> String {
    serde_json::json!({"code": 200, "status": "OK", "data": data}).to_string()
}
