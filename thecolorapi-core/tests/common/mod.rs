//! Local stand-in for the color identification service.
#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// A running mock server answering every `/id` request with a fixed reply.
pub struct MockServer {
    pub endpoint: String,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockServer {
    /// Query parameters received so far, one map per request.
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }
}

async fn identify(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.queries.lock().unwrap().push(params);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_ref().clone(),
    )
}

/// Starts a server on an ephemeral port that replies with `status` and `body`.
pub fn spawn(status: u16, body: impl Into<String>) -> MockServer {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    listener.set_nonblocking(true).expect("non-blocking listener");
    let addr = listener.local_addr().expect("local addr");

    let queries = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).expect("valid status"),
        body: Arc::new(body.into()),
        queries: queries.clone(),
    };

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("mock runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            let app = Router::new().route("/id", get(identify)).with_state(state);
            axum::serve(listener, app).await.expect("mock server");
        });
    });

    MockServer {
        endpoint: format!("http://{addr}/id"),
        queries,
    }
}

/// Response body for cobalt (`#0047AB`) in the service's schema.
pub fn cobalt_json() -> Value {
    json!({
        "hex": {"value": "#0047AB", "clean": "0047AB"},
        "rgb": {
            "fraction": {"r": 0, "g": 0.2784313725490196, "b": 0.6705882352941176},
            "r": 0, "g": 71, "b": 171,
            "value": "rgb(0, 71, 171)"
        },
        "hsl": {
            "fraction": {"h": 0.5974025974025974, "s": 1, "l": 0.3352941176470588},
            "h": 215, "s": 100, "l": 34,
            "value": "hsl(215, 100%, 34%)"
        },
        "hsv": {
            "fraction": {"h": 0.5974025974025974, "s": 1, "v": 0.6705882352941176},
            "value": "hsv(215, 100%, 67%)",
            "h": 215, "s": 100, "v": 67
        },
        "name": {
            "value": "Cobalt",
            "closest_named_hex": "#0047AB",
            "exact_match_name": true,
            "distance": 0
        },
        "cmyk": {
            "fraction": {"c": 1, "m": 0.5847953216374269, "y": 0, "k": 0.32941176470588235},
            "value": "cmyk(100, 58, 0, 33)",
            "c": 100, "m": 58, "y": 0, "k": 33
        },
        "contrast": {"value": "#ffffff"}
    })
}

pub fn cobalt_body() -> String {
    cobalt_json().to_string()
}
