//! HTTP Shell
//!
//! Router assembly, the shared request context and the small helpers every
//! handler uses. Handlers themselves live next to the logic they expose.

use crate::config::ServiceConfig;
use crate::dataset::{DatasetCatalog, DatasetKind};
use crate::error::{ServiceError, ServiceResult};
use crate::lookup::handlers::handle_lookup_key;
use crate::questions::handlers::handle_get_question;
use crate::search::handlers::{handle_get_lecture, handle_search};

use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

pub const ENDPOINT_SEARCH: &str = "/search";
pub const ENDPOINT_GET_QUESTION: &str = "/get_question";
pub const ENDPOINT_LOOKUP_KEY: &str = "/lookup_key";
pub const ENDPOINT_GET_LECTURE: &str = "/get_lecture";
pub const ENDPOINT_HEALTH: &str = "/health";

/// State shared by every request. Read-only after startup.
pub struct AppContext {
    pub config: ServiceConfig,
    pub catalog: DatasetCatalog,
}

impl AppContext {
    pub fn new(config: ServiceConfig) -> Self {
        let catalog = DatasetCatalog::from_config(&config);
        Self { config, catalog }
    }
}

pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH, post(handle_search))
        .route(ENDPOINT_GET_QUESTION, post(handle_get_question))
        .route(ENDPOINT_LOOKUP_KEY, post(handle_lookup_key))
        .route(ENDPOINT_GET_LECTURE, post(handle_get_lecture))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(ctx))
}

/// Runs a dataset scan on the blocking pool.
pub async fn run_blocking<T, F>(task: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ServiceError::Internal(format!("blocking task failed: {}", e)))?
}

/// Maps an unreadable request body to a 400.
pub fn reject_body(rejection: JsonRejection, expected: &str) -> ServiceError {
    ServiceError::invalid_input(
        "request body",
        format!("{} ({})", expected, rejection.body_text()),
    )
}

#[derive(Debug, Serialize)]
pub struct DatasetStatus {
    pub name: &'static str,
    pub path: String,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cached: bool,
    pub datasets: Vec<DatasetStatus>,
}

pub async fn handle_health(Extension(ctx): Extension<Arc<AppContext>>) -> Json<HealthResponse> {
    let datasets = DatasetKind::ALL
        .iter()
        .map(|kind| {
            let path = ctx.catalog.path(*kind);
            DatasetStatus {
                name: kind.name(),
                path: path.display().to_string(),
                available: path.is_file(),
            }
        })
        .collect();

    Json(HealthResponse {
        status: "ok",
        cached: ctx.catalog.is_cached(),
        datasets,
    })
}
