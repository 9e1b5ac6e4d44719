#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const TEST_API_KEY: &str = "test-key";
pub const SLOW_IP: &str = "7.7.7.7";
pub const ERROR_IP: &str = "5.5.5.5";
pub const MALFORMED_IP: &str = "6.6.6.6";
pub const NO_FIELD_IP: &str = "8.8.8.8";

#[derive(Deserialize)]
struct LookupQuery {
    q: String,
}

#[derive(Clone, Default)]
struct Counters {
    hackertarget: Arc<AtomicUsize>,
    securitytrails: Arc<AtomicUsize>,
}

/// Local stand-in for both reverse IP services, bound to an ephemeral port.
pub struct MockProviderServer {
    addr: SocketAddr,
    counters: Counters,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockProviderServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let counters = Counters::default();

        let app = Router::new()
            .route("/reverseiplookup/", get(hackertarget))
            .route("/v1/ips/{ip}/domains", get(securitytrails))
            .with_state(counters.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            counters,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn hackertarget_endpoint(&self) -> String {
        format!("http://{}/reverseiplookup/", self.addr)
    }

    pub fn securitytrails_endpoint(&self) -> String {
        format!("http://{}/v1/ips", self.addr)
    }

    pub fn hackertarget_requests(&self) -> usize {
        self.counters.hackertarget.load(Ordering::SeqCst)
    }

    pub fn securitytrails_requests(&self) -> usize {
        self.counters.securitytrails.load(Ordering::SeqCst)
    }
}

impl Drop for MockProviderServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn hackertarget(State(counters): State<Counters>, Query(query): Query<LookupQuery>) -> Response {
    counters.hackertarget.fetch_add(1, Ordering::SeqCst);

    match query.q.as_str() {
        "1.1.1.1" => "a.example\nb.example\n\n".into_response(),
        "2.2.2.2" => "  c.example  \r\nshared.example\n".into_response(),
        ERROR_IP => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        SLOW_IP => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            "late.example\n".into_response()
        }
        _ => "".into_response(),
    }
}

async fn securitytrails(
    State(counters): State<Counters>,
    Path(ip): Path<String>,
    headers: HeaderMap,
) -> Response {
    counters.securitytrails.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("apikey")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| key == TEST_API_KEY);
    if !authorized {
        return (StatusCode::FORBIDDEN, "invalid api key").into_response();
    }

    match ip.as_str() {
        "1.1.1.1" => Json(serde_json::json!({ "domains": ["b.example", "d.example"] })).into_response(),
        "2.2.2.2" => Json(serde_json::json!({ "domains": ["shared.example"] })).into_response(),
        MALFORMED_IP => "definitely not json".into_response(),
        NO_FIELD_IP => Json(serde_json::json!({ "record_count": 0 })).into_response(),
        _ => Json(serde_json::json!({ "domains": [] })).into_response(),
    }
}
