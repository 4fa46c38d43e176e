use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{patch, post},
    Json, Router,
};
use checkers_core::{signer, CLIENT_KEY_HEADER, SIGNATURE_HEADER};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

pub const DEFAULT_CLIENT_KEY: &str = "test-key";
pub const DEFAULT_CLIENT_SECRET: &str = "test-secret";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CheckRun {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub repo: String,
    pub head_sha: String,
    pub payload: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// The single client the server accepts.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_key: String,
    pub client_secret: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            client_key: DEFAULT_CLIENT_KEY.to_string(),
            client_secret: DEFAULT_CLIENT_SECRET.to_string(),
        }
    }
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    runs: HashMap<u64, CheckRun>,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
struct AppState {
    credentials: Arc<Credentials>,
    db: Db,
}

#[derive(Debug)]
enum ServerError {
    Unauthorized,
    BadSignature,
    BadPayload(String),
    NotFound,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "unknown client key".to_string()),
            ServerError::BadSignature => (StatusCode::FORBIDDEN, "request signature mismatch".to_string()),
            ServerError::BadPayload(e) => (StatusCode::BAD_REQUEST, format!("payload is not JSON: {e}")),
            ServerError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

pub fn app(credentials: Credentials) -> Router {
    let state = AppState {
        credentials: Arc::new(credentials),
        db: Db::default(),
    };
    Router::new()
        .route("/api/check/{name}/{owner}/{repo}/{sha}", post(create_check_run))
        .route("/api/check/{owner}/{repo}/{id}", patch(update_check_run))
        .with_state(state)
}

pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), std::io::Error> {
    axum::serve(listener, app(credentials)).await
}

/// Check the client key and signature, then parse the body.
///
/// The signature is recomputed over the encoded path below `/api`, exactly
/// as the client produced it.
fn authorize(state: &AppState, headers: &HeaderMap, uri: &Uri, body: &str) -> Result<Value, ServerError> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    if header(CLIENT_KEY_HEADER) != Some(state.credentials.client_key.as_str()) {
        warn!(path = uri.path(), "rejected unknown client key");
        return Err(ServerError::Unauthorized);
    }
    let path = uri.path().strip_prefix("/api").unwrap_or(uri.path());
    let signature = header(SIGNATURE_HEADER).unwrap_or_default();
    if !signer::verify(path, body, &state.credentials.client_secret, signature) {
        warn!(path, "rejected request signature");
        return Err(ServerError::BadSignature);
    }
    serde_json::from_str(body).map_err(|e| ServerError::BadPayload(e.to_string()))
}

async fn create_check_run(
    State(state): State<AppState>,
    Path((name, owner, repo, sha)): Path<(String, String, String, String)>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Result<(StatusCode, Json<CheckRun>), ServerError> {
    let payload = authorize(&state, &headers, &uri, &body)?;

    let mut store = state.db.write().await;
    store.next_id += 1;
    let run = CheckRun {
        id: store.next_id,
        name,
        owner,
        repo,
        head_sha: sha,
        payload,
    };
    store.runs.insert(run.id, run.clone());
    info!(id = run.id, name = %run.name, "created check run");
    Ok((StatusCode::CREATED, Json(run)))
}

async fn update_check_run(
    State(state): State<AppState>,
    Path((owner, repo, id)): Path<(String, String, u64)>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Result<Json<CheckRun>, ServerError> {
    let payload = authorize(&state, &headers, &uri, &body)?;

    let mut store = state.db.write().await;
    let run = store
        .runs
        .get_mut(&id)
        .filter(|run| run.owner == owner && run.repo == repo)
        .ok_or(ServerError::NotFound)?;
    merge(&mut run.payload, payload);
    info!(id, "updated check run");
    Ok(Json(run.clone()))
}

/// Shallow merge of object payloads; anything else replaces the stored value.
fn merge(stored: &mut Value, update: Value) {
    match (stored, update) {
        (Value::Object(stored), Value::Object(update)) => stored.extend(update),
        (stored, update) => *stored = update,
    }
}
