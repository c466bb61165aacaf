//! Lecture Token Normalization
//!
//! Lecture identifiers arrive in many spellings ("Lecture 05", "lecture5",
//! "5", "2b"). Both stored identifiers and query values go through
//! [`normalize_lecture`] so they compare as plain strings.

use once_cell::sync::Lazy;
use regex::Regex;

static LECTURE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^lecture\s*").expect("lecture prefix pattern is valid"));

/// Canonicalizes a raw lecture identifier.
///
/// Lowercases and trims the input, strips a leading `lecture` word, then
/// drops leading zeros from a numeric head (a lone `0` is kept). Returns
/// `None` for missing input or when nothing is left.
pub fn normalize_lecture(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    let stripped = LECTURE_PREFIX.replace(&lowered, "");
    let token = strip_leading_zeros(stripped.trim_end());

    if token.is_empty() { None } else { Some(token) }
}

fn strip_leading_zeros(token: &str) -> String {
    if !token.starts_with(|c: char| c.is_ascii_digit()) {
        return token.to_string();
    }

    let rest = token.trim_start_matches('0');
    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        rest.to_string()
    } else {
        // Only zeros before a non-digit (or nothing): keep one.
        format!("0{}", rest)
    }
}
