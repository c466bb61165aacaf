//! Dataset Access
//!
//! The service reads four line-delimited JSON files (slides, videos,
//! assignment questions, lecture cross-references). They are read-only
//! inputs: nothing in the service ever writes to them.
//!
//! ## Components
//! - **`loader`**: Parses one JSONL file into an ordered `Vec` of records.
//! - **`catalog`**: Binds each dataset kind to its configured path and load mode.
//! - **`cache`**: Optional read-through cache keyed by file modification time.
//! - **`fields`**: Serde helpers for loosely-typed fields found in the data.

pub mod cache;
pub mod catalog;
pub mod fields;
pub mod loader;

pub use catalog::{DatasetCatalog, DatasetKind};
