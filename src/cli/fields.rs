//! Fields CLI command
//!
//! Prints the canonical field map so users can see which inputs exist,
//! how they pair with frequency fields, and how each one is classified.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::fields::{EXPENSE_FIELDS, INCOME_FIELDS, TAX_RATE_FIELD};
use crate::models::SpendClass;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Frequency Field")]
    frequency: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Class")]
    class: &'static str,
}

/// Handle the fields command
pub fn handle_fields_command() {
    let mut rows = Vec::new();

    for income in &INCOME_FIELDS {
        rows.push(FieldRow {
            field: income.field,
            frequency: income.frequency.unwrap_or("-"),
            category: "Income".to_string(),
            class: "Income",
        });
    }
    rows.push(FieldRow {
        field: TAX_RATE_FIELD,
        frequency: "-",
        category: "Income".to_string(),
        class: "Tax rate",
    });

    for expense in &EXPENSE_FIELDS {
        rows.push(FieldRow {
            field: expense.field,
            frequency: expense.frequency.unwrap_or("-"),
            category: expense.category.label().to_string(),
            class: match expense.class {
                SpendClass::Need => "Need",
                SpendClass::Want => "Want",
                SpendClass::Savings => "Savings",
            },
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
}
