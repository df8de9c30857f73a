//! Property-based tests for record parsing and the substitution plan.

use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::{json, Value};

use letters_core::records::{build_index, EmployeeRecord, RECORD_FIELD_COUNT};
use letters_core::substitutions_for;

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[ -~]{0,20}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn full_row() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(cell(), RECORD_FIELD_COUNT..RECORD_FIELD_COUNT + 3)
}

fn short_row() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(cell(), 0..RECORD_FIELD_COUNT)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any row with at least twelve cells maps to a record without error.
    #[test]
    fn full_rows_always_parse(row in full_row()) {
        prop_assert!(EmployeeRecord::from_cells(2, &row).is_ok());
    }

    /// Any row with fewer than twelve cells is rejected, never a panic.
    #[test]
    fn short_rows_always_rejected(row in short_row()) {
        prop_assert!(EmployeeRecord::from_cells(2, &row).is_err());
    }

    /// The index never contains more entries than data rows, and every key
    /// is the email cell of some row.
    #[test]
    fn index_keys_come_from_email_column(rows in prop::collection::vec(full_row(), 1..8)) {
        let mut sheet: Vec<Vec<Value>> = vec![vec![json!("h"); RECORD_FIELD_COUNT]];
        sheet.extend(rows.clone());

        let index = build_index(&sheet).unwrap();
        prop_assert!(index.len() <= rows.len());
        for record in index.values() {
            let found = rows
                .iter()
                .any(|r| EmployeeRecord::from_cells(2, r).unwrap().email == record.email);
            prop_assert!(found, "email {:?} not found in any source row", record.email);
        }
    }

    /// The substitution plan always has ten entries in the fixed order,
    /// whatever the record contains.
    #[test]
    fn plan_shape_is_stable(row in full_row(), year in 2000i32..2100, month in 1u32..13, day in 1u32..29) {
        let record = EmployeeRecord::from_cells(2, &row).unwrap();
        let today = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let plan = substitutions_for(&record, today);
        prop_assert_eq!(plan.len(), 10);
        prop_assert_eq!(plan[0].placeholder, "{{Preferred Name}}");
        prop_assert_eq!(plan[9].placeholder, "{{date}}");
        prop_assert_eq!(&plan[9].value, &today.format("%Y-%m-%d").to_string());
    }
}
