//! HTTP layer: the generation route and its always-200 envelope.
//!
//! The endpoint deliberately answers HTTP 200 for internal failures too;
//! callers branch on the body's `success` field, never on status codes.
//! The cache write is dispatched on its own task after the payload is
//! assembled, so a slow or failing store never delays the response.

use crate::cache::{CacheKey, CacheManager};
use crate::generate::ContentGenerator;
use crate::types::{GenerationRequest, GenerationResponse};
use crate::Error;
use axum::extract::{Query, RawQuery, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Shared state handed to every request handler.
pub struct AppState {
    pub generator: ContentGenerator,
    pub cache: Arc<CacheManager>,
}

impl AppState {
    pub fn new(generator: ContentGenerator, cache: CacheManager) -> Self {
        Self {
            generator,
            cache: Arc::new(cache),
        }
    }
}

/// Failure envelope. Carried with HTTP 200 like every other response.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl FailureBody {
    fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            error: err.category().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ApiResponse {
    Success(GenerationResponse),
    Failure(FailureBody),
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", get(generate))
        .route("/health", get(health))
        .with_state(state)
}

/// Liveness probe.
async fn health() -> impl IntoResponse {
    "OK"
}

/// GET /api/generate
///
/// Flow: cache lookup by the exact request signature, then generate on a
/// miss, then hand the payload back while a spawned task writes it through
/// the cache.
async fn generate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
    RawQuery(raw_query): RawQuery,
) -> Json<ApiResponse> {
    let request = GenerationRequest::from_params(&params);
    let key = CacheKey::from_query(raw_query.as_deref().unwrap_or(""));

    if let Some(cached) = state
        .cache
        .lookup::<GenerationResponse>(request.mode, &key)
        .await
    {
        debug!(key = %key, mode = %request.mode, "cache hit");
        return Json(ApiResponse::Success(cached));
    }
    debug!(key = %key, mode = %request.mode, "cache miss");

    match state.generator.generate(&request).await {
        Ok(response) => {
            let cache = Arc::clone(&state.cache);
            let store_key = key.clone();
            let payload = response.clone();
            let mode = request.mode;
            tokio::spawn(async move {
                cache.store(mode, &store_key, &payload).await;
            });
            Json(ApiResponse::Success(response))
        }
        Err(e) => {
            error!(mode = %request.mode, error = %e, "generation failed");
            Json(ApiResponse::Failure(FailureBody::from_error(&e)))
        }
    }
}
