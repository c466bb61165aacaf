use super::engine::search;
use super::keywords::KeywordSet;
use super::lectures::slides_for_lecture;
use super::types::{LectureRequest, LectureSlidesResponse, SearchRequest, SearchResponse};
use crate::error::{ServiceError, ServiceResult};
use crate::server::{AppContext, reject_body, run_blocking};

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Extension(ctx): Extension<Arc<AppContext>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ServiceResult<Json<SearchResponse>> {
    let Json(req) = payload.map_err(|e| reject_body(e, "{\"keywords\": [string, ...]}"))?;
    let keywords = KeywordSet::new(&req.keywords);

    tracing::info!("search: {} keyword(s)", keywords.len());

    let response = run_blocking(move || {
        let config = &ctx.config;
        search(&ctx.catalog, &config.scoring, config.video_limit, &keywords)
    })
    .await?;

    Ok(Json(response))
}

pub async fn handle_get_lecture(
    Extension(ctx): Extension<Arc<AppContext>>,
    payload: Result<Json<LectureRequest>, JsonRejection>,
) -> ServiceResult<Json<LectureSlidesResponse>> {
    let Json(req) = payload.map_err(|e| reject_body(e, "{\"lecture\": string}"))?;
    let lecture = match req.lecture {
        Some(lecture) if !lecture.trim().is_empty() => lecture,
        _ => return Err(ServiceError::invalid_input("lecture", "a non-empty string")),
    };

    tracing::info!("get_lecture: {:?}", lecture);

    let slides = run_blocking(move || slides_for_lecture(&ctx.catalog, &lecture)).await?;
    Ok(Json(LectureSlidesResponse { slides }))
}
