//! Environment-driven configuration
//!
//! The sheet, range and template ids were once compiled into the workflow;
//! they now come from the environment so the core stays testable against
//! fakes. OAuth token acquisition happens outside this process: the server
//! only consumes a ready bearer token.

use anyhow::{Context, Result};
use letters_core::GeneratorConfig;

/// Runtime settings loaded once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub generator: GeneratorConfig,
    pub google_access_token: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let generator = GeneratorConfig {
            spreadsheet_id: require("SPREADSHEET_ID")?,
            sheet_range: std::env::var("SHEET_RANGE").unwrap_or_else(|_| "Sheet1".to_string()),
            template_document_id: require("TEMPLATE_DOCUMENT_ID")?,
        };

        Ok(Self {
            generator,
            google_access_token: require("GOOGLE_ACCESS_TOKEN")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}
