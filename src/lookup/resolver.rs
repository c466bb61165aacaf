use super::types::{LectureKeyRow, LookupQuery};
use crate::dataset::{DatasetCatalog, DatasetKind};
use crate::error::{ServiceError, ServiceResult};
use crate::normalize::normalize_lecture;

/// Loads the cross-reference rows and returns the first one matching `query`.
pub fn lookup_key(catalog: &DatasetCatalog, query: &LookupQuery) -> ServiceResult<LectureKeyRow> {
    let rows = catalog.load::<LectureKeyRow>(DatasetKind::LectureKeys)?;

    find_row(&rows, query)
        .cloned()
        .ok_or_else(|| ServiceError::LookupNotFound {
            lookup_type: query.lookup_type().to_string(),
            value: query.key().to_string(),
        })
}

/// Lecture lookups compare normalized tokens; review and exam lookups need
/// the whole label to match (case-insensitive), never a substring.
pub fn find_row<'a>(
    rows: &'a [LectureKeyRow],
    query: &LookupQuery,
) -> Option<&'a LectureKeyRow> {
    rows.iter().find(|row| match query {
        LookupQuery::Lecture(token) => row
            .lectures
            .iter()
            .any(|raw| normalize_lecture(Some(raw.as_str())).as_deref() == Some(token.as_str())),
        LookupQuery::Review(key) => row.review.to_lowercase() == *key,
        LookupQuery::Exam(key) => row.exam.to_lowercase() == *key,
    })
}
