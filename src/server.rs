//! HTTP layer: routes, handlers, and error mapping
//!
//! Three routes, mirroring what the frontend expects:
//! - `GET /` — the embedded single-page card UI
//! - `GET /api/words` — the weighted, shuffled practice deck as JSON
//! - `POST /api/update` — record one answer outcome
//!
//! Request bodies are read permissively: `isCorrect` defaults to false when
//! missing or non-boolean, only a missing `word` is rejected outright.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::words::{ReviewService, StorageError, WordRecord, WordStore};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing or invalid 'word' field")]
    MissingWord,

    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingWord => StatusCode::BAD_REQUEST,
            ApiError::Storage(ref e) => {
                log::error!("request failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn words_handler<S: WordStore>(
    State(service): State<Arc<ReviewService<S>>>,
) -> Result<Json<Vec<WordRecord>>, ApiError> {
    let deck = service.practice_deck()?;
    Ok(Json(deck))
}

async fn update_handler<S: WordStore>(
    State(service): State<Arc<ReviewService<S>>>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let word = payload
        .get("word")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingWord)?;
    // Missing or non-boolean isCorrect counts as a wrong answer
    let is_correct = payload
        .get("isCorrect")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    service.record_outcome(word, is_correct)?;
    Ok(Json(json!({ "status": "success" })))
}

/// Build the application router around a shared review service.
pub fn router<S: WordStore>(service: Arc<ReviewService<S>>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/words", get(words_handler::<S>))
        .route("/api/update", post(update_handler::<S>))
        .with_state(service)
}

/// Bind and serve until ctrl-c.
pub async fn serve<S: WordStore>(
    addr: SocketAddr,
    service: Arc<ReviewService<S>>,
) -> std::io::Result<()> {
    let app = router(service);

    let listener = TcpListener::bind(addr).await?;
    log::info!(
        "practice server listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            log::info!("practice server shutting down");
        })
        .await
}
