//! Error types for the letter generation workflow

use thiserror::Error;

/// Errors from mapping spreadsheet rows into employee records
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("sheet returned no data")]
    NoData,

    #[error("row {row} has {cells} cells, expected {expected}")]
    MalformedRow {
        /// 1-based row number as shown in the sheet UI
        row: usize,
        cells: usize,
        expected: usize,
    },
}

/// Errors from the external store collaborators
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("copy rejected by file store: {0}")]
    CopyFailed(String),

    #[error("batch update rejected by document store: {0}")]
    UpdateFailed(String),
}

/// Errors that abort a whole generation request
///
/// Per-item copy/substitution failures do not appear here: they are reported
/// as failed entries in the result list. Only a failure to fetch or parse the
/// employee records aborts the request.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to fetch employee records: {0}")]
    Fetch(#[from] StoreError),

    #[error("failed to parse employee records: {0}")]
    Records(#[from] RecordError),
}
