//! Placeholder substitution plan for the letter template
//!
//! The template contains literal `{{Field Name}}` tokens. Substitution is a
//! fixed, ordered list of exact-text replacements built from one employee's
//! record plus a derived `{{date}}` value. The list is handed to the
//! document store as a single batch.

use chrono::NaiveDate;

use crate::records::EmployeeRecord;

/// Date format used for `{{date}}` and for copy display names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One exact-text replacement: every occurrence of `placeholder` in the
/// document becomes `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub placeholder: &'static str,
    pub value: String,
}

impl Replacement {
    fn new(placeholder: &'static str, value: &str) -> Self {
        Self {
            placeholder,
            value: value.to_owned(),
        }
    }
}

/// Build the ordered replacement list for one employee.
///
/// `base_pay` deliberately has no entry here: the sheet carries it but the
/// template defines no placeholder for it.
pub fn substitutions_for(record: &EmployeeRecord, today: NaiveDate) -> Vec<Replacement> {
    vec![
        Replacement::new("{{Preferred Name}}", &record.name),
        Replacement::new("{{#}}", &record.employee_id),
        Replacement::new("{{Base Currency}}", &record.base_currency),
        Replacement::new("{{Change Base Pay Request}}", &record.change_base_pay),
        Replacement::new("{{Raise Effective Date}}", &record.raise_effective_date),
        Replacement::new("{{Stock Quantity}}", &record.stock_quantity),
        Replacement::new("{{Vesting Date}}", &record.vesting_date),
        Replacement::new("{{Bonus Structure Change}}", &record.bonus_structure_change),
        Replacement::new("{{Bonus Effective Date}}", &record.bonus_effective_date),
        Replacement::new("{{date}}", &today.format(DATE_FORMAT).to_string()),
    ]
}
