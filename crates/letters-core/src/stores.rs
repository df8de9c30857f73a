//! External store capabilities
//!
//! The workflow needs three things from the outside world: rows from a
//! spreadsheet, a file copy in the document store, and a batch text
//! replacement against a document. Each is a trait so the orchestrator can
//! be driven by real Google API clients or by in-memory fakes in tests.
//!
//! None of these operations retry, and a failed call never terminates the
//! process; errors map into [`StoreError`] and propagate.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;
use crate::substitution::Replacement;

/// Read-only access to a spreadsheet-like table.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch all rows of `range` from the spreadsheet, header included.
    /// Cells keep their JSON form; coercion happens during record mapping.
    async fn fetch_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<Value>>, StoreError>;
}

/// File-copy capability of the document store.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Copy `template_id` into a new file named `new_name` and return the
    /// new file's id. Not idempotent: every call creates a new file, and no
    /// cleanup happens if a later step fails.
    async fn copy_file(&self, template_id: &str, new_name: &str) -> Result<String, StoreError>;
}

/// Batch text-replacement capability of the document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Apply `replacements` to the document as one atomic batch. A rejected
    /// batch leaves no replacement considered applied.
    async fn batch_replace(
        &self,
        document_id: &str,
        replacements: &[Replacement],
    ) -> Result<(), StoreError>;
}
