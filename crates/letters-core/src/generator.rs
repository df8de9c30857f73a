//! Letter generation orchestrator
//!
//! One `generate` call makes one pass over the requested emails: fetch the
//! sheet once, build the email index, then per email copy the template and
//! batch-substitute the employee's fields. Everything is sequential; each
//! external call is attempted exactly once.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::GenerateError;
use crate::records::{self, RecordIndex};
use crate::stores::{DocumentStore, FileStore, RowSource};
use crate::substitution::{substitutions_for, DATE_FORMAT};

/// Injected identifiers for the fixed sheet and template
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub spreadsheet_id: String,
    pub sheet_range: String,
    pub template_document_id: String,
}

/// Request body: ordered list of employee emails. Duplicates and unknown
/// addresses are legal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LetterRequest {
    #[serde(default)]
    pub email: Vec<String>,
}

/// One outcome per requested email, in request order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterResult {
    pub email: String,
    /// Link to the generated document; empty when `is_success` is false
    pub url: String,
    pub is_success: bool,
    /// Failure reason, omitted from JSON on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LetterResult {
    fn success(email: &str, url: String) -> Self {
        Self {
            email: email.to_owned(),
            url,
            is_success: true,
            error: None,
        }
    }

    fn failure(email: &str, reason: String) -> Self {
        Self {
            email: email.to_owned(),
            url: String::new(),
            is_success: false,
            error: Some(reason),
        }
    }
}

/// URL of a generated document in the store
pub fn document_url(document_id: &str) -> String {
    format!("https://docs.google.com/document/d/{document_id}")
}

/// Drives the three store capabilities to produce letters.
///
/// Stores are injected as trait objects; the generator holds no other state
/// and caches nothing across calls.
pub struct LetterGenerator {
    config: GeneratorConfig,
    rows: Arc<dyn RowSource>,
    files: Arc<dyn FileStore>,
    documents: Arc<dyn DocumentStore>,
}

impl LetterGenerator {
    pub fn new(
        config: GeneratorConfig,
        rows: Arc<dyn RowSource>,
        files: Arc<dyn FileStore>,
        documents: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            config,
            rows,
            files,
            documents,
        }
    }

    /// Generate one letter per requested email.
    ///
    /// Returns exactly one result per input email, in input order. A failure
    /// to fetch or parse the sheet aborts the whole request with an error;
    /// per-email store failures become failed entries and the pass continues.
    pub async fn generate(
        &self,
        request: &LetterRequest,
    ) -> Result<Vec<LetterResult>, GenerateError> {
        let rows = self
            .rows
            .fetch_rows(&self.config.spreadsheet_id, &self.config.sheet_range)
            .await?;
        let index = records::build_index(&rows)?;
        debug!(records = index.len(), "built employee record index");

        let today = Utc::now().date_naive();

        let mut results = Vec::with_capacity(request.email.len());
        for email in &request.email {
            results.push(self.generate_one(email, &index, today).await);
        }
        Ok(results)
    }

    async fn generate_one(&self, email: &str, index: &RecordIndex, today: NaiveDate) -> LetterResult {
        let Some(record) = index.get(email) else {
            debug!(email, "no record for email");
            return LetterResult::failure(email, "no record found for email".to_owned());
        };

        let copy_name = format!("{} {}", record.name, today.format(DATE_FORMAT));
        let document_id = match self
            .files
            .copy_file(&self.config.template_document_id, &copy_name)
            .await
        {
            Ok(id) => id,
            Err(err) => {
                warn!(email, %err, "template copy failed");
                return LetterResult::failure(email, err.to_string());
            }
        };

        // The copy stays behind if substitution fails; there is no cleanup.
        if let Err(err) = self
            .documents
            .batch_replace(&document_id, &substitutions_for(record, today))
            .await
        {
            warn!(email, document_id, %err, "substitution failed");
            return LetterResult::failure(email, err.to_string());
        }

        info!(email, document_id, "letter generated");
        LetterResult::success(email, document_url(&document_id))
    }
}
