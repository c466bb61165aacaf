use crate::config::LoadMode;
use crate::error::{ServiceError, ServiceResult};

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Reads a JSON-lines file into its records, in file order.
///
/// Blank lines are skipped. A line that fails to parse either aborts the load
/// (`LoadMode::Strict`) or is logged and dropped (`LoadMode::Lenient`). Every
/// call goes to storage; nothing is retained between calls.
pub fn load_jsonl<T: DeserializeOwned>(path: &Path, mode: LoadMode) -> ServiceResult<Vec<T>> {
    let file = File::open(path).map_err(|source| open_error(path, source))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ServiceError::DatasetIo {
            path: path.to_path_buf(),
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(record) => records.push(record),
            Err(source) => match mode {
                LoadMode::Strict => {
                    return Err(ServiceError::RecordParse {
                        path: path.to_path_buf(),
                        line_index,
                        raw_line: line,
                        source,
                    });
                }
                LoadMode::Lenient => {
                    tracing::warn!(
                        "Skipping malformed record in {} at line index {}: {}",
                        path.display(),
                        line_index,
                        source
                    );
                    skipped += 1;
                }
            },
        }
    }

    tracing::debug!(
        "Loaded {} records from {} ({} skipped)",
        records.len(),
        path.display(),
        skipped
    );

    Ok(records)
}

pub(crate) fn open_error(path: &Path, source: std::io::Error) -> ServiceError {
    if source.kind() == ErrorKind::NotFound {
        ServiceError::DatasetNotFound {
            path: path.to_path_buf(),
        }
    } else {
        ServiceError::DatasetIo {
            path: path.to_path_buf(),
            source,
        }
    }
}
