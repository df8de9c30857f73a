//! Google API clients for the three store capabilities
//!
//! Thin reqwest wrappers over the Sheets values endpoint, the Drive file
//! copy endpoint and the Docs batchUpdate endpoint. One client and one
//! bearer token are shared across all three; transport failures and
//! rejections map into `StoreError` and propagate, they never terminate
//! the process.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use letters_core::{DocumentStore, FileStore, Replacement, RowSource, StoreError};

const SHEETS_BASE: &str = "https://sheets.googleapis.com/v4";
const DRIVE_BASE: &str = "https://www.googleapis.com/drive/v3";
const DOCS_BASE: &str = "https://docs.googleapis.com/v1";

/// Authenticated clients for Sheets, Drive and Docs
pub struct GoogleClients {
    client: Client,
    token: String,
}

impl GoogleClients {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
        }
    }
}

// Sheets values.get response
#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

// Drive files.copy request/response
#[derive(Serialize)]
struct CopyRequest<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct CopyResponse {
    id: String,
}

// Docs batchUpdate request, one replaceAllText entry per replacement
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateRequest<'a> {
    requests: Vec<DocRequest<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocRequest<'a> {
    replace_all_text: ReplaceAllText<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplaceAllText<'a> {
    contains_text: ContainsText<'a>,
    replace_text: &'a str,
}

#[derive(Serialize)]
struct ContainsText<'a> {
    text: &'a str,
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

/// Append percent-encoded path segments to a base URL. Range names may
/// carry spaces (`My Sheet!A:L`), so they cannot be format!-ed into a URL.
fn endpoint(base: &str, segments: &[&str]) -> Url {
    let mut url = Url::parse(base).expect("static base url");
    url.path_segments_mut()
        .expect("base url has a path")
        .extend(segments);
    url
}

/// Render a non-2xx response as "status: body" for error messages.
async fn rejection(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    format!("{}: {}", status, body.trim())
}

#[async_trait]
impl RowSource for GoogleClients {
    async fn fetch_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<Value>>, StoreError> {
        let url = endpoint(SHEETS_BASE, &["spreadsheets", spreadsheet_id, "values", range]);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(StoreError::Transport(rejection(response).await));
        }

        let body: ValueRange = response.json().await.map_err(transport)?;
        Ok(body.values)
    }
}

#[async_trait]
impl FileStore for GoogleClients {
    async fn copy_file(&self, template_id: &str, new_name: &str) -> Result<String, StoreError> {
        let url = endpoint(DRIVE_BASE, &["files", template_id, "copy"]);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&CopyRequest { name: new_name })
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(StoreError::CopyFailed(rejection(response).await));
        }

        let body: CopyResponse = response.json().await.map_err(transport)?;
        Ok(body.id)
    }
}

#[async_trait]
impl DocumentStore for GoogleClients {
    async fn batch_replace(
        &self,
        document_id: &str,
        replacements: &[Replacement],
    ) -> Result<(), StoreError> {
        let request = BatchUpdateRequest {
            requests: replacements
                .iter()
                .map(|r| DocRequest {
                    replace_all_text: ReplaceAllText {
                        contains_text: ContainsText { text: r.placeholder },
                        replace_text: &r.value,
                    },
                })
                .collect(),
        };

        let url = endpoint(DOCS_BASE, &["documents", &format!("{document_id}:batchUpdate")]);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(StoreError::UpdateFailed(rejection(response).await));
        }

        Ok(())
    }
}
