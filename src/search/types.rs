use crate::dataset::fields;
use serde::{Deserialize, Serialize};

/// One slide of a lecture deck. Identity is `(lecture, slide_number)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SlideRow")]
pub struct SlideRecord {
    pub lecture: String,
    pub slide_number: u32,
    pub slide_title: String,
    pub slide_text: String,
    pub presenter_notes: String,
}

/// Slide as stored on disk. Older exports name the body `full_text`; some
/// carry both keys, in which case `slide_text` wins.
#[derive(Deserialize)]
struct SlideRow {
    #[serde(deserialize_with = "fields::string_or_number")]
    lecture: String,
    #[serde(deserialize_with = "fields::integer")]
    slide_number: u32,
    #[serde(default, deserialize_with = "fields::string_or_number")]
    slide_title: String,
    #[serde(default, deserialize_with = "fields::optional_string")]
    slide_text: Option<String>,
    #[serde(default, deserialize_with = "fields::optional_string")]
    full_text: Option<String>,
    #[serde(default, deserialize_with = "fields::string_or_number")]
    presenter_notes: String,
}

impl From<SlideRow> for SlideRecord {
    fn from(row: SlideRow) -> Self {
        Self {
            lecture: row.lecture,
            slide_number: row.slide_number,
            slide_title: row.slide_title,
            slide_text: row.slide_text.or(row.full_text).unwrap_or_default(),
            presenter_notes: row.presenter_notes,
        }
    }
}

/// A lecture video with its transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(default, deserialize_with = "fields::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "fields::string_or_number")]
    pub url: String,
    #[serde(default, deserialize_with = "fields::string_or_number")]
    pub transcript: String,
    /// Keyword tags, flattened to one space-separated string.
    #[serde(default, deserialize_with = "fields::text_or_list")]
    pub keywords: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LectureRequest {
    pub lecture: Option<String>,
}

/// Inclusive slide-number range of keyword hits within one lecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SlideMatch {
    pub lecture: String,
    pub slide_range: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMatch {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Score")]
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    pub slide_matches: Vec<SlideMatch>,
    pub video_matches: Vec<VideoMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureSlidesResponse {
    pub slides: Vec<SlideRecord>,
}
