use std::{collections::BTreeMap, time::Duration};

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// What the server saw, sent back as the response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub url: String,
    pub args: BTreeMap<String, String>,
    /// Header names are lowercase; repeated headers are joined with ", ".
    pub headers: BTreeMap<String, String>,
    pub data: String,
    pub json: Option<serde_json::Value>,
}

pub fn app() -> Router {
    Router::new()
        .route("/get", get(echo))
        .route("/post", post(echo))
        .route("/headers", get(echo))
        .route("/anything", any(echo))
        .route("/anything/{*rest}", any(echo))
        .route("/delay/{ms}", get(delay))
        .route("/status/{code}", any(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    method: Method,
    uri: Uri,
    Query(args): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Echo> {
    debug!(%method, %uri, "echo");
    Json(build_echo(method, uri, args, &headers, &body))
}

async fn delay(
    Path(ms): Path<u64>,
    method: Method,
    uri: Uri,
    Query(args): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
) -> Json<Echo> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    Json(build_echo(method, uri, args, &headers, &[]))
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

fn build_echo(
    method: Method,
    uri: Uri,
    args: BTreeMap<String, String>,
    headers: &HeaderMap,
    body: &[u8],
) -> Echo {
    let mut flat: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        flat.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.clone());
    }
    Echo {
        method: method.to_string(),
        url: uri.to_string(),
        args,
        headers: flat,
        data: String::from_utf8_lossy(body).into_owned(),
        json: serde_json::from_slice(body).ok(),
    }
}
