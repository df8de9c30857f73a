//! Employee record parsing from spreadsheet rows
//!
//! The compensation sheet has a header row followed by one row per employee,
//! with twelve columns in a fixed order. Cells arrive as untyped JSON values
//! from the Sheets API and are coerced to strings; the workflow never parses
//! numbers or dates, it only substitutes text.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::RecordError;

/// Number of columns a data row must carry
pub const RECORD_FIELD_COUNT: usize = 12;

/// One employee's row of compensation-change data, keyed by email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub base_currency: String,
    /// Present in the sheet but has no placeholder in the letter template.
    /// Kept so a future placeholder can consume it without a schema change.
    pub base_pay: String,
    pub change_base_pay: String,
    pub raise_effective_date: String,
    pub stock_quantity: String,
    pub vesting_date: String,
    pub bonus_structure_change: String,
    pub bonus_effective_date: String,
}

/// Lookup from email to record, rebuilt per request
pub type RecordIndex = HashMap<String, EmployeeRecord>;

impl EmployeeRecord {
    /// Map one data row positionally into a record.
    ///
    /// `row` is the 1-based row number used in error messages. Rows shorter
    /// than [`RECORD_FIELD_COUNT`] fail with [`RecordError::MalformedRow`];
    /// extra trailing cells are ignored.
    pub fn from_cells(row: usize, cells: &[Value]) -> Result<Self, RecordError> {
        if cells.len() < RECORD_FIELD_COUNT {
            return Err(RecordError::MalformedRow {
                row,
                cells: cells.len(),
                expected: RECORD_FIELD_COUNT,
            });
        }

        let field = |i: usize| cell_text(&cells[i]);

        Ok(Self {
            employee_id: field(0),
            name: field(1),
            email: field(2),
            department: field(3),
            base_currency: field(4),
            base_pay: field(5),
            change_base_pay: field(6),
            raise_effective_date: field(7),
            stock_quantity: field(8),
            vesting_date: field(9),
            bonus_structure_change: field(10),
            bonus_effective_date: field(11),
        })
    }
}

/// Build the email-keyed index from raw sheet rows.
///
/// The first row is the header and is skipped. Duplicate emails are legal;
/// the later row wins. An empty row set is an error, matching the sheet
/// API's empty-result signal.
pub fn build_index(rows: &[Vec<Value>]) -> Result<RecordIndex, RecordError> {
    if rows.is_empty() {
        return Err(RecordError::NoData);
    }

    let mut index = RecordIndex::new();
    for (i, cells) in rows.iter().enumerate().skip(1) {
        let record = EmployeeRecord::from_cells(i + 1, cells)?;
        index.insert(record.email.clone(), record);
    }

    Ok(index)
}

/// Coerce a sheet cell to its text form. Numbers, booleans and blanks all
/// become strings; values pass through verbatim into substitution.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
