use super::resolver::resolve_question;
use super::types::{GetQuestionRequest, QuestionQuery, ResolvedQuestion};
use crate::error::ServiceResult;
use crate::server::{AppContext, reject_body, run_blocking};

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_question(
    Extension(ctx): Extension<Arc<AppContext>>,
    payload: Result<Json<GetQuestionRequest>, JsonRejection>,
) -> ServiceResult<Json<ResolvedQuestion>> {
    let Json(req) = payload.map_err(|e| {
        reject_body(e, "{\"assignment\": string, \"question_number\": integer}")
    })?;
    // Validation happens before any dataset access.
    let query = QuestionQuery::try_from(req)?;

    tracing::info!(
        "get_question: assignment={:?} question={}",
        query.assignment,
        query.question_number
    );

    let resolved = run_blocking(move || resolve_question(&ctx.catalog, &query)).await?;
    Ok(Json(resolved))
}
