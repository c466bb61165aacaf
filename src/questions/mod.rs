//! Assignment Question Module
//!
//! Looks up a question of an assignment by number. A stored record may carry
//! a single number or an inclusive range of sub-questions ("3-5"); a request
//! that lands inside a range resolves to that record, and matching-type
//! records highlight the pair belonging to the requested sub-question.

pub mod handlers;
pub mod resolver;
pub mod types;
