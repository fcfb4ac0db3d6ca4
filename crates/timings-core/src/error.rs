// File: crates/timings-core/src/error.rs
// Summary: Error types for table loading and rendering.

use std::path::PathBuf;

/// Failure while reading a results CSV. Every variant aborts the load; no partial table is returned.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("cannot open results file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("results file is empty")]
    Empty,
    #[error("header row has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("bad record at line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount { line: u64, expected: usize, found: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("encode PNG failed")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
