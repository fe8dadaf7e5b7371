//! Canonical input field map
//!
//! The scorer reads a fixed set of named numeric fields. Which field feeds
//! which expense category, and whether it counts as a Need, a Want, or a
//! savings contribution, lives here as one const table so the Needs/Wants
//! split has a single source of truth instead of being inlined arithmetic.
//!
//! Every expense field pairs with a `freq-` field holding its frequency
//! divisor (1 = monthly, 12 = annual). A missing or zero divisor means the
//! raw value is already monthly.

use serde::Serialize;
use std::fmt;

/// The eight expense categories tracked by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Housing,
    Transport,
    Debt,
    Living,
    Healthcare,
    Children,
    SavingsContribution,
    Misc,
}

impl Category {
    /// All categories in chart order
    pub const ALL: [Category; 8] = [
        Category::Housing,
        Category::Transport,
        Category::Debt,
        Category::Living,
        Category::Healthcare,
        Category::Children,
        Category::SavingsContribution,
        Category::Misc,
    ];

    /// Short label used for chart slices
    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Debt => "Debt",
            Category::Living => "Living",
            Category::Healthcare => "Health",
            Category::Children => "Kids",
            Category::SavingsContribution => "Savings",
            Category::Misc => "Misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an expense field enters the 50/30/20 split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendClass {
    /// Essential spending: counts toward the needs ratio
    Need,
    /// Discretionary spending
    Want,
    /// Explicit savings contribution: never a need or a want
    Savings,
}

/// An income input field with its optional frequency divisor field
#[derive(Debug, Clone, Copy)]
pub struct IncomeField {
    pub field: &'static str,
    pub frequency: Option<&'static str>,
}

/// An expense input field, its frequency field, and its classification
#[derive(Debug, Clone, Copy)]
pub struct ExpenseField {
    pub field: &'static str,
    pub frequency: Option<&'static str>,
    pub category: Category,
    pub class: SpendClass,
}

/// Flat tax percentage field. Applied to gross income, never
/// frequency-normalized.
pub const TAX_RATE_FIELD: &str = "inc-tax";

/// Income sources summed into gross monthly income
pub const INCOME_FIELDS: [IncomeField; 4] = [
    IncomeField {
        field: "inc-salary",
        frequency: Some("freq-salary"),
    },
    IncomeField {
        field: "inc-pension",
        frequency: Some("freq-pension"),
    },
    IncomeField {
        field: "inc-invest",
        frequency: Some("freq-invest"),
    },
    IncomeField {
        field: "inc-other",
        frequency: Some("freq-other"),
    },
];

/// The canonical expense field map
///
/// Within Living, only food and supplies are Needs; dining out, clothing,
/// and other living costs are Wants. Every other category maps uniformly.
pub const EXPENSE_FIELDS: [ExpenseField; 37] = [
    // Housing & utilities
    expense("exp-mortgage", "freq-mortgage", Category::Housing, SpendClass::Need),
    expense("exp-propertytax", "freq-propertytax", Category::Housing, SpendClass::Need),
    expense("exp-rental", "freq-rental", Category::Housing, SpendClass::Need),
    expense("exp-insurance", "freq-insurance", Category::Housing, SpendClass::Need),
    expense("exp-hoa", "freq-hoa", Category::Housing, SpendClass::Need),
    expense("exp-home-maint", "freq-home-maint", Category::Housing, SpendClass::Need),
    expense("exp-utilities-home", "freq-utilities-home", Category::Housing, SpendClass::Need),
    // Transportation
    expense("exp-auto-loan", "freq-auto-loan", Category::Transport, SpendClass::Need),
    expense("exp-auto-ins", "freq-auto-ins", Category::Transport, SpendClass::Need),
    expense("exp-gas", "freq-gas", Category::Transport, SpendClass::Need),
    expense("exp-auto-maint", "freq-auto-maint", Category::Transport, SpendClass::Need),
    expense("exp-parking", "freq-parking", Category::Transport, SpendClass::Need),
    expense("exp-transport-other", "freq-transport-other", Category::Transport, SpendClass::Need),
    // Debt payments
    expense("exp-creditcard", "freq-creditcard", Category::Debt, SpendClass::Need),
    expense("exp-student", "freq-student", Category::Debt, SpendClass::Need),
    expense("exp-loans-other", "freq-loans-other", Category::Debt, SpendClass::Need),
    // Living
    expense("exp-food", "freq-food", Category::Living, SpendClass::Need),
    expense("exp-clothing", "freq-clothing", Category::Living, SpendClass::Want),
    expense("exp-supplies", "freq-supplies", Category::Living, SpendClass::Need),
    expense("exp-meals", "freq-meals", Category::Living, SpendClass::Want),
    expense("exp-living-other", "freq-living-other", Category::Living, SpendClass::Want),
    // Healthcare
    expense("exp-med-ins", "freq-med-ins", Category::Healthcare, SpendClass::Need),
    expense("exp-med-spend", "freq-med-spend", Category::Healthcare, SpendClass::Need),
    // Children
    expense("exp-child-care", "freq-child-care", Category::Children, SpendClass::Need),
    expense("exp-tuition", "freq-tuition", Category::Children, SpendClass::Need),
    expense("exp-child-support", "freq-child-support", Category::Children, SpendClass::Need),
    expense("exp-child-other", "freq-child-other", Category::Children, SpendClass::Need),
    // Savings contributions
    expense("exp-401k", "freq-401k", Category::SavingsContribution, SpendClass::Savings),
    expense("exp-college", "freq-college", Category::SavingsContribution, SpendClass::Savings),
    expense("exp-invest-contrib", "freq-invest-contrib", Category::SavingsContribution, SpendClass::Savings),
    expense("exp-emergency", "freq-emergency", Category::SavingsContribution, SpendClass::Savings),
    // Miscellaneous
    expense("exp-pet", "freq-pet", Category::Misc, SpendClass::Want),
    expense("exp-gifts", "freq-gifts", Category::Misc, SpendClass::Want),
    expense("exp-hobbies", "freq-hobbies", Category::Misc, SpendClass::Want),
    expense("exp-entertainment", "freq-entertainment", Category::Misc, SpendClass::Want),
    expense("exp-vacation", "freq-vacation", Category::Misc, SpendClass::Want),
    expense("exp-misc-final", "freq-misc-final", Category::Misc, SpendClass::Want),
];

const fn expense(
    field: &'static str,
    frequency: &'static str,
    category: Category,
    class: SpendClass,
) -> ExpenseField {
    ExpenseField {
        field,
        frequency: Some(frequency),
        category,
        class,
    }
}

/// All known field names (value fields, frequency fields, and the tax field)
pub fn known_field_names() -> Vec<&'static str> {
    let mut names = vec![TAX_RATE_FIELD];
    for inc in &INCOME_FIELDS {
        names.push(inc.field);
        if let Some(freq) = inc.frequency {
            names.push(freq);
        }
    }
    for exp in &EXPENSE_FIELDS {
        names.push(exp.field);
        if let Some(freq) = exp.frequency {
            names.push(freq);
        }
    }
    names
}
