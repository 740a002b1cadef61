//! Stub library service and helpers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};

use library_desk::{
    config::{HttpConfig, ServerConfig},
    ApiClient, Desk, MemoryView, NoticeKind,
};

/// One request as the stub saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Value,
}

type Routes = HashMap<(Method, String), (StatusCode, Value)>;

/// Scripted stand-in for the library service. Unscripted routes answer 404.
#[derive(Clone, Default)]
pub struct Stub {
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.routes
            .lock()
            .unwrap()
            .insert((method, format!("/{}", path)), (status, body));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port and return the base URL
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        let app = Router::new().fallback(record).with_state(self.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        format!("http://{}/", addr)
    }
}

async fn record(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let path = uri.path().to_string();
    stub.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let (status, body) = stub
        .routes
        .lock()
        .unwrap()
        .get(&(method, path))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, json!({ "message": "Not found" })));
    (status, Json(body))
}

pub fn desk(base_url: &str, view: MemoryView) -> Desk<MemoryView> {
    let server = ServerConfig {
        base_url: base_url.to_string(),
    };
    let api = ApiClient::new(&server, &HttpConfig::default()).expect("api client");
    Desk::new(api, view)
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    format!("http://{}/", addr)
}

/// Texts of every notice of `kind` the desk has shown
pub fn notices(desk: &Desk<MemoryView>, kind: NoticeKind) -> Vec<String> {
    desk.view()
        .notices_of(kind)
        .into_iter()
        .map(str::to_string)
        .collect()
}
