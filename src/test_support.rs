//! In-process stand-ins for the transactions endpoint

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

type Responder = Arc<dyn Fn(&Value) -> u16 + Send + Sync>;

#[derive(Clone)]
struct MockState {
    responder: Responder,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn record_batch(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let code = (state.responder)(&body);
    state.received.lock().await.push(body);

    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "status": code })))
}

/// Answers every request with the status chosen by `responder` for its JSON body
pub struct MockEndpoint {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
    server_task: JoinHandle<()>,
}

impl MockEndpoint {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Value) -> u16 + Send + Sync + 'static,
    {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responder: Arc::new(responder),
            received: Arc::clone(&received),
        };

        let app = Router::new()
            .route("/api/transactions", post(record_batch))
            .with_state(state);

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let server = axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service());
        let server_task = tokio::spawn(async move {
            let _ = server.await;
        });

        Self {
            addr,
            received,
            server_task,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/transactions", self.addr)
    }

    /// Request bodies seen so far, in arrival order
    pub async fn received(&self) -> Vec<Value> {
        self.received.lock().await.clone()
    }
}

impl Drop for MockEndpoint {
    fn drop(&mut self) {
        self.server_task.abort();
    }
}

/// Accepts connections and never answers, holding each socket open
pub struct StalledEndpoint {
    addr: SocketAddr,
    accept_task: JoinHandle<()>,
}

impl StalledEndpoint {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let accept_task = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        Self { addr, accept_task }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/transactions", self.addr)
    }
}

impl Drop for StalledEndpoint {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

/// A URL on a port nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/transactions", addr)
}
