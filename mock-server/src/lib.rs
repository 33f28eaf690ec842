use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::net::TcpListener;

pub const INVALID_PARAMS: &str = r#"{"message": "invalid request parameters"}"#;
pub const UNSUPPORTED_METHOD: &str = r#"{"message": "This is not a GET or POST request"}"#;

#[derive(Deserialize)]
pub struct NumQuery {
    pub num: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(increment_query).post(increment_body).fallback(unsupported_method))
        .route("/status/{code}", get(with_status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// `{"message": "<n>"}`, written with the spacing the client tests compare against.
pub fn message(text: impl std::fmt::Display) -> String {
    format!(r#"{{"message": "{text}"}}"#)
}

fn json(body: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn increment_query(Query(query): Query<NumQuery>) -> impl IntoResponse {
    let num = query
        .num
        .and_then(|n| n.parse::<i64>().ok())
        .unwrap_or(0);
    tracing::debug!(num, "GET increment");
    json(message(num.wrapping_add(1)))
}

async fn increment_body(body: Bytes) -> impl IntoResponse {
    let num = serde_json::from_slice::<Map<String, Value>>(&body)
        .ok()
        .and_then(|data| data.get("num").and_then(Value::as_f64));
    match num {
        Some(num) => {
            tracing::debug!(num, "POST increment");
            json(message((num as i64).wrapping_add(1)))
        }
        None => json(INVALID_PARAMS.to_string()),
    }
}

async fn unsupported_method() -> impl IntoResponse {
    json(UNSUPPORTED_METHOD.to_string())
}

async fn with_status(Path(code): Path<u16>) -> impl IntoResponse {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (status, json(message(code)))
}
