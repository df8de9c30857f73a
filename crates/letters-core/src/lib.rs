//! Compensation letter generation core
//!
//! This crate provides the letter generation workflow: it resolves employee
//! emails against spreadsheet rows, copies a letter template per employee,
//! substitutes the employee's compensation fields into the copy, and returns
//! one outcome per requested email.
//!
//! The three external surfaces (spreadsheet rows, file copies, document text
//! replacement) are abstracted behind traits in [`stores`] so the workflow
//! can run against real Google API clients or in-memory fakes.

pub mod error;
pub mod generator;
pub mod records;
pub mod stores;
pub mod substitution;

pub use error::{GenerateError, RecordError, StoreError};
pub use generator::{document_url, GeneratorConfig, LetterGenerator, LetterRequest, LetterResult};
pub use records::{EmployeeRecord, RecordIndex};
pub use stores::{DocumentStore, FileStore, RowSource};
pub use substitution::{substitutions_for, Replacement};
