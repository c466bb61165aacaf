//! Service Error Types
//!
//! A single taxonomy shared by the loader, the resolvers and the HTTP layer.
//! Every variant knows its HTTP status class and renders as
//! `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;

/// Longest slice of an offending dataset line echoed back in error messages.
const RAW_LINE_PREVIEW: usize = 120;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Backing file is missing: the service is misconfigured.
    #[error("dataset not found: {}", .path.display())]
    DatasetNotFound { path: PathBuf },

    #[error("failed to read dataset {}: {source}", .path.display())]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line that does not parse as the expected record.
    #[error(
        "malformed record in {} at line index {line_index}: {source} (line: {})",
        .path.display(),
        preview(.raw_line)
    )]
    RecordParse {
        path: PathBuf,
        /// Zero-based index of the line within the file.
        line_index: usize,
        raw_line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input for `{field}`: expected {expected}")]
    InvalidInput { field: String, expected: String },

    #[error("invalid question number: {0}")]
    InvalidQuestionNumber(String),

    #[error("unsupported lookup type: {0:?} (expected lecture, review or exam)")]
    UnsupportedLookupType(String),

    #[error("lookup value is empty after normalization")]
    InvalidLookupValue,

    #[error("question {question_number} not found for assignment {assignment:?}")]
    QuestionNotFound {
        assignment: String,
        question_number: u32,
    },

    #[error("no {lookup_type} entry matches {value:?}")]
    LookupNotFound { lookup_type: String, value: String },

    #[error("no slides found for lecture {0:?}")]
    NoSlidesFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn invalid_input(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            expected: expected.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DatasetNotFound { .. }
            | Self::DatasetIo { .. }
            | Self::RecordParse { .. }
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidInput { .. }
            | Self::InvalidQuestionNumber(_)
            | Self::UnsupportedLookupType(_)
            | Self::InvalidLookupValue => StatusCode::BAD_REQUEST,
            Self::QuestionNotFound { .. } | Self::LookupNotFound { .. } | Self::NoSlidesFound(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }

    /// JSON body sent to the client.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }
        (status, Json(self.to_body())).into_response()
    }
}

fn preview(raw_line: &str) -> String {
    if raw_line.chars().count() <= RAW_LINE_PREVIEW {
        raw_line.to_string()
    } else {
        let head: String = raw_line.chars().take(RAW_LINE_PREVIEW).collect();
        format!("{}...", head)
    }
}
