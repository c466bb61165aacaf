//! Lecture Key Lookup Module
//!
//! Resolves the cross-reference between lectures, review sessions and exams.
//! Given a lecture, it finds the review and exam that cover it; given a review
//! or exam label, it finds the lectures behind it.

pub mod handlers;
pub mod resolver;
pub mod types;
