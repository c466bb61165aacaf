use crate::dataset::fields;
use crate::error::{ServiceError, ServiceResult};
use crate::normalize::normalize_lecture;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Cross-reference row linking a set of lectures to one review and one exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LectureKeyRow {
    /// Raw lecture identifiers; a scalar in the data is read as one entry.
    #[serde(default, deserialize_with = "fields::one_or_many")]
    pub lectures: Vec<String>,
    #[serde(default, deserialize_with = "fields::string_or_number")]
    pub review: String,
    #[serde(default, deserialize_with = "fields::string_or_number")]
    pub exam: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupType {
    Lecture,
    Review,
    Exam,
}

impl LookupType {
    pub fn parse(raw: &str) -> ServiceResult<Self> {
        match raw.trim().to_lowercase().as_str() {
            "lecture" => Ok(LookupType::Lecture),
            "review" => Ok(LookupType::Review),
            "exam" => Ok(LookupType::Exam),
            _ => Err(ServiceError::UnsupportedLookupType(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupType::Lecture => "lecture",
            LookupType::Review => "review",
            LookupType::Exam => "exam",
        }
    }
}

impl fmt::Display for LookupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupRequest {
    pub lookup_type: Option<String>,
    /// String, or a bare number for lecture lookups.
    pub lookup_value: Option<Value>,
}

/// A validated lookup with its comparison key already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// Normalized lecture token.
    Lecture(String),
    /// Lowercased, trimmed review label.
    Review(String),
    /// Lowercased, trimmed exam label.
    Exam(String),
}

impl LookupQuery {
    pub fn new(lookup_type: LookupType, value: &str) -> ServiceResult<Self> {
        let query = match lookup_type {
            LookupType::Lecture => {
                let token =
                    normalize_lecture(Some(value)).ok_or(ServiceError::InvalidLookupValue)?;
                LookupQuery::Lecture(token)
            }
            LookupType::Review => LookupQuery::Review(exact_key(value)?),
            LookupType::Exam => LookupQuery::Exam(exact_key(value)?),
        };
        Ok(query)
    }

    pub fn lookup_type(&self) -> LookupType {
        match self {
            LookupQuery::Lecture(_) => LookupType::Lecture,
            LookupQuery::Review(_) => LookupType::Review,
            LookupQuery::Exam(_) => LookupType::Exam,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            LookupQuery::Lecture(key) | LookupQuery::Review(key) | LookupQuery::Exam(key) => key,
        }
    }
}

impl TryFrom<LookupRequest> for LookupQuery {
    type Error = ServiceError;

    fn try_from(req: LookupRequest) -> ServiceResult<Self> {
        let raw_type = req.lookup_type.ok_or_else(|| {
            ServiceError::invalid_input("lookup_type", "one of lecture, review, exam")
        })?;
        let lookup_type = LookupType::parse(&raw_type)?;

        let value = match req.lookup_value {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(ServiceError::invalid_input(
                    "lookup_value",
                    "a string (or a number for lecture lookups)",
                ));
            }
        };

        LookupQuery::new(lookup_type, &value)
    }
}

fn exact_key(value: &str) -> ServiceResult<String> {
    let key = value.trim().to_lowercase();
    if key.is_empty() {
        return Err(ServiceError::InvalidLookupValue);
    }
    Ok(key)
}
