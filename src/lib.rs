//! Course Search Service Library
//!
//! Keyword search and cross-reference lookup over a course's lecture slides,
//! video transcripts and assignment question banks. Every request scans the
//! read-only JSON-lines datasets directly; there is no index to maintain.
//!
//! ## Modules
//! - **`config`**: Service configuration resolved once at startup.
//! - **`dataset`**: JSONL loading, dataset paths and the optional read-through cache.
//! - **`error`**: The shared error taxonomy and its HTTP mapping.
//! - **`lookup`**: Lecture / review / exam cross-reference lookups.
//! - **`normalize`**: Canonical lecture tokens ("Lecture 05" -> "5").
//! - **`questions`**: Assignment question resolution, including numbered ranges.
//! - **`search`**: Weighted keyword search over slides and videos.
//! - **`server`**: Axum router, shared context and health endpoint.

pub mod config;
pub mod dataset;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod questions;
pub mod search;
pub mod server;

#[cfg(test)]
pub(crate) mod test_utils;
