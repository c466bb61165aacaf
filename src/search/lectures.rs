use super::types::SlideRecord;
use crate::dataset::{DatasetCatalog, DatasetKind};
use crate::error::{ServiceError, ServiceResult};

/// All slides whose raw `lecture` label equals `lecture`, ignoring case.
///
/// No token normalization or trimming happens here: "Lecture 5" and "5" are
/// different lectures to this filter.
pub fn slides_for_lecture(
    catalog: &DatasetCatalog,
    lecture: &str,
) -> ServiceResult<Vec<SlideRecord>> {
    let slides = catalog.load::<SlideRecord>(DatasetKind::Slides)?;
    let wanted = lecture.to_lowercase();

    let matched: Vec<SlideRecord> = slides
        .iter()
        .filter(|slide| slide.lecture.to_lowercase() == wanted)
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(ServiceError::NoSlidesFound(lecture.to_string()));
    }
    Ok(matched)
}
