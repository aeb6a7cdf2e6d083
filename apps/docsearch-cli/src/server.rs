//! HTTP surface: `GET /search` and `GET /health` over a shared, immutable searcher.
use std::sync::Arc;

use anyhow::Context;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use thiserror::Error;
use tokio::net::TcpListener;

use docsearch_core::config::SearchSettings;
use docsearch_core::traits::Searcher;
use docsearch_core::types::SearchHit;

#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<dyn Searcher>,
    pub search: SearchSettings,
}

impl AppState {
    pub fn new(searcher: Arc<dyn Searcher>, search: SearchSettings) -> Self {
        Self { searcher, search }
    }

    fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.search.default_limit).min(self.search.max_limit)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let limit = state.effective_limit(params.limit);
    Ok(Json(state.searcher.search_hits(&params.q, limit)))
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "documents": state.searcher.len() }))
}

/// Resolve and bind `host:port`; `host` may be a name such as `localhost`.
pub async fn bind(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("binding {}:{}", host, port))
}

/// Bind `host:port` and serve until Ctrl+C.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = bind(host, port).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
