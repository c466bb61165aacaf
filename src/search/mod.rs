//! Search Module
//!
//! Keyword search over lecture slides and video transcripts, and the
//! per-lecture slide listing.
//!
//! ## Overview
//! Each request scans the datasets linearly. A record scores the sum of the
//! weights of every field that contains a keyword; zero-score records are
//! dropped. Slide hits collapse into one `[min, max]` slide range per lecture,
//! video hits are ranked by score and cut to the configured limit.
//!
//! ## Submodules
//! - **`keywords`**: The normalized keyword set of a query.
//! - **`scoring`**: Weighted substring scoring of one record.
//! - **`engine`**: Slide range aggregation and video ranking.
//! - **`lectures`**: Slides of a single lecture by its raw label.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Dataset records and Data Transfer Objects (DTOs).

pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod lectures;
pub mod scoring;
pub mod types;

#[cfg(test)]
mod tests;
