use super::resolver::lookup_key;
use super::types::{LectureKeyRow, LookupQuery, LookupRequest};
use crate::error::ServiceResult;
use crate::server::{AppContext, reject_body, run_blocking};

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_lookup_key(
    Extension(ctx): Extension<Arc<AppContext>>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> ServiceResult<Json<LectureKeyRow>> {
    let Json(req) = payload
        .map_err(|e| reject_body(e, "{\"lookup_type\": string, \"lookup_value\": string}"))?;
    let query = LookupQuery::try_from(req)?;

    tracing::info!("lookup_key: {}={:?}", query.lookup_type(), query.key());

    let row = run_blocking(move || lookup_key(&ctx.catalog, &query)).await?;
    Ok(Json(row))
}
