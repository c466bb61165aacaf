use crate::dataset::fields;
use crate::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the assignment question bank.
///
/// Fields the resolver does not interpret (prompt, answer, ...) are kept in
/// `extra` and returned to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentQuestion {
    #[serde(deserialize_with = "fields::string_or_number")]
    pub assignment: String,
    /// Either a single number (`"4"`) or an inclusive range (`"3-5"`).
    #[serde(deserialize_with = "fields::string_or_number")]
    pub question_number: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "fields::list_or_null",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub matches: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssignmentQuestion {
    pub fn kind(&self) -> QuestionKind {
        QuestionKind::from_label(self.question_type.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Normal,
    Matching,
    Other,
}

impl QuestionKind {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("normal") => QuestionKind::Normal,
            Some("matching") => QuestionKind::Matching,
            Some(_) => QuestionKind::Other,
        }
    }
}

/// A parsed `question_number` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionNumber {
    Single(u32),
    Range { start: u32, end: u32 },
}

impl QuestionNumber {
    /// Parses `"7"` or `"3-5"`. Ranges with `start > end` are rejected.
    pub fn parse(label: &str) -> Option<Self> {
        match label.split_once('-') {
            Some((start, end)) => {
                let start = start.trim().parse::<u32>().ok()?;
                let end = end.trim().parse::<u32>().ok()?;
                (start <= end).then_some(QuestionNumber::Range { start, end })
            }
            None => label.trim().parse::<u32>().ok().map(QuestionNumber::Single),
        }
    }

    pub fn contains(&self, requested: u32) -> bool {
        match *self {
            QuestionNumber::Single(n) => n == requested,
            QuestionNumber::Range { start, end } => (start..=end).contains(&requested),
        }
    }
}

/// A matched question, annotated when the request fell inside a range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedQuestion {
    #[serde(flatten)]
    pub question: AssignmentQuestion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_sub_question: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_pair: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetQuestionRequest {
    pub assignment: Option<String>,
    /// Integer or numeric string.
    pub question_number: Option<Value>,
}

/// A validated `/get_question` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub assignment: String,
    pub question_number: u32,
}

impl TryFrom<GetQuestionRequest> for QuestionQuery {
    type Error = ServiceError;

    fn try_from(req: GetQuestionRequest) -> ServiceResult<Self> {
        let assignment = match req.assignment {
            Some(a) if !a.trim().is_empty() => a,
            _ => return Err(ServiceError::invalid_input("assignment", "a non-empty string")),
        };
        let raw = req.question_number.ok_or_else(|| {
            ServiceError::invalid_input("question_number", "an integer or numeric string")
        })?;

        Ok(Self {
            assignment,
            question_number: parse_requested_number(&raw)?,
        })
    }
}

/// Accepts a non-negative JSON integer or a string holding one.
pub fn parse_requested_number(raw: &Value) -> ServiceResult<u32> {
    let parsed = match raw {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ServiceError::InvalidQuestionNumber(raw.to_string()))
}
