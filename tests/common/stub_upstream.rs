#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// One scripted response from the stub listing API.
#[derive(Clone)]
pub enum UpstreamScript {
    Json(Value),
    Status(u16),
    NotJson,
}

#[derive(Clone)]
struct StubState {
    script: Arc<Mutex<VecDeque<UpstreamScript>>>,
    last: Arc<Mutex<UpstreamScript>>,
    hits: Arc<AtomicU64>,
}

/// Minimal stand-in for the upstream listing API on an ephemeral port.
/// Serves `GET /servers` from a script, repeating the last entry served
/// once the script is exhausted.
pub struct StubUpstream {
    addr: SocketAddr,
    hits: Arc<AtomicU64>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubUpstream {
    pub async fn start(script: Vec<UpstreamScript>) -> Self {
        let state = StubState {
            script: Arc::new(Mutex::new(script.into())),
            last: Arc::new(Mutex::new(UpstreamScript::Status(500))),
            hits: Arc::new(AtomicU64::new(0)),
        };
        let hits = state.hits.clone();

        let app = Router::new()
            .route("/servers", get(serve_script))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub upstream");
        let addr = listener.local_addr().expect("stub upstream addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub upstream");
        });

        Self { addr, hits, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_script(State(state): State<StubState>) -> Response {
    state.hits.fetch_add(1, Ordering::Relaxed);

    let next = {
        let mut script = state.script.lock().unwrap();
        match script.pop_front() {
            Some(entry) => {
                *state.last.lock().unwrap() = entry.clone();
                entry
            }
            None => state.last.lock().unwrap().clone(),
        }
    };

    match next {
        UpstreamScript::Json(payload) => axum::Json(payload).into_response(),
        UpstreamScript::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        UpstreamScript::NotJson => "definitely: not json".into_response(),
    }
}
