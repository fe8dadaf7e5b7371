//! Input snapshot model
//!
//! A snapshot is a flat mapping of field name to numeric value, read once
//! per scoring run. Parsing is deliberately lenient: absent fields read as
//! zero, and malformed values coerce to zero while collecting a non-fatal
//! [`ParseWarning`] for each so callers can surface them.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::{FincheckError, FincheckResult};

/// Non-fatal diagnostic for a field value that could not be read as a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// The offending field name
    pub field: String,
    /// The raw value as it appeared in the input
    pub raw: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': value {} is not numeric, treated as 0",
            self.field, self.raw
        )
    }
}

/// A flat snapshot of named numeric input fields
///
/// Missing fields read as 0. The scorer treats a snapshot as immutable for
/// the duration of a run; nothing is retained between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    values: BTreeMap<String, f64>,
    warnings: Vec<ParseWarning>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field value, defaulting to 0 when absent
    pub fn get(&self, field: &str) -> f64 {
        self.values.get(field).copied().unwrap_or(0.0)
    }

    /// Set a field value
    pub fn set(&mut self, field: impl Into<String>, value: f64) {
        self.values.insert(field.into(), value);
    }

    /// Warnings collected while coercing raw input
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Number of fields present in the snapshot
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no fields at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a snapshot from a JSON object string
    ///
    /// Accepts numbers and numeric strings (currency symbols and thousands
    /// separators stripped). Anything else coerces to 0 with a warning;
    /// null and empty strings coerce silently, matching an empty form field.
    pub fn from_json_str(input: &str) -> FincheckResult<Self> {
        let value: Value = serde_json::from_str(input)?;
        let object = match value {
            Value::Object(map) => map,
            other => {
                return Err(FincheckError::Validation(format!(
                    "snapshot must be a JSON object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut snapshot = Snapshot::new();
        for (field, raw) in object {
            match coerce_numeric(&raw) {
                Coerced::Number(n) => {
                    snapshot.values.insert(field, n);
                }
                Coerced::Empty => {
                    snapshot.values.insert(field, 0.0);
                }
                Coerced::Malformed => {
                    debug!(field = %field, raw = %raw, "coercing malformed value to 0");
                    snapshot.warnings.push(ParseWarning {
                        field: field.clone(),
                        raw: raw.to_string(),
                    });
                    snapshot.values.insert(field, 0.0);
                }
            }
        }
        Ok(snapshot)
    }

    /// Apply a `FIELD=VALUE` override, as supplied on the command line
    pub fn apply_override(&mut self, assignment: &str) -> FincheckResult<()> {
        let (field, value) = assignment.split_once('=').ok_or_else(|| {
            FincheckError::Validation(format!(
                "override '{}' must be FIELD=VALUE",
                assignment
            ))
        })?;
        let parsed = parse_numeric_str(value).ok_or_else(|| {
            FincheckError::Validation(format!(
                "override '{}': '{}' is not a number",
                field, value
            ))
        })?;
        self.set(field.trim(), parsed);
        Ok(())
    }

    /// Serialize the field map as pretty-printed JSON
    pub fn to_json_string(&self) -> FincheckResult<String> {
        Ok(serde_json::to_string_pretty(&self.values)?)
    }

    /// Look up a built-in sample snapshot by name
    ///
    /// Samples stand in for the original calculator's one-click presets:
    /// `starter` (income only), `balanced` (a textbook 50/30/20 month), and
    /// `stretched` (spending past income).
    pub fn sample(name: &str) -> Option<Self> {
        match name {
            "starter" => Some(sample_starter()),
            "balanced" => Some(sample_balanced()),
            "stretched" => Some(sample_stretched()),
            _ => None,
        }
    }

    /// Names accepted by [`Snapshot::sample`]
    pub const SAMPLE_NAMES: [&'static str; 3] = ["starter", "balanced", "stretched"];
}

enum Coerced {
    Number(f64),
    Empty,
    Malformed,
}

fn coerce_numeric(value: &Value) -> Coerced {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => Coerced::Number(f),
            _ => Coerced::Malformed,
        },
        Value::String(s) => {
            if s.trim().is_empty() {
                Coerced::Empty
            } else {
                match parse_numeric_str(s) {
                    Some(f) => Coerced::Number(f),
                    None => Coerced::Malformed,
                }
            }
        }
        Value::Null => Coerced::Empty,
        _ => Coerced::Malformed,
    }
}

/// Parse a user-supplied numeric string, tolerating a currency symbol and
/// thousands separators
fn parse_numeric_str(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Income only: the state right after entering a paycheck
fn sample_starter() -> Snapshot {
    let mut s = Snapshot::new();
    s.set("inc-salary", 60000.0);
    s.set("freq-salary", 12.0);
    s.set("inc-tax", 22.0);
    s
}

/// A textbook 50/30/20 month: net $5,000, needs $2,500, wants $1,500,
/// savings contributions $1,000
fn sample_balanced() -> Snapshot {
    let mut s = Snapshot::new();
    s.set("inc-salary", 75000.0);
    s.set("freq-salary", 12.0);
    s.set("inc-tax", 20.0);
    // Needs: 1500 + 200 + 300 + 150 + 100 + 200 + 50 = 2500
    s.set("exp-mortgage", 1500.0);
    s.set("freq-mortgage", 1.0);
    s.set("exp-utilities-home", 200.0);
    s.set("freq-utilities-home", 1.0);
    s.set("exp-auto-loan", 300.0);
    s.set("freq-auto-loan", 1.0);
    s.set("exp-gas", 150.0);
    s.set("freq-gas", 1.0);
    s.set("exp-student", 100.0);
    s.set("freq-student", 1.0);
    s.set("exp-food", 200.0);
    s.set("freq-food", 1.0);
    s.set("exp-supplies", 50.0);
    s.set("freq-supplies", 1.0);
    // Wants: 300 + 100 + 200 + 150 + 500 + 250 = 1500
    s.set("exp-meals", 300.0);
    s.set("freq-meals", 1.0);
    s.set("exp-clothing", 100.0);
    s.set("freq-clothing", 1.0);
    s.set("exp-entertainment", 200.0);
    s.set("freq-entertainment", 1.0);
    s.set("exp-hobbies", 150.0);
    s.set("freq-hobbies", 1.0);
    s.set("exp-vacation", 6000.0);
    s.set("freq-vacation", 12.0);
    s.set("exp-misc-final", 250.0);
    s.set("freq-misc-final", 1.0);
    // Savings contributions: 600 + 400 = 1000
    s.set("exp-401k", 600.0);
    s.set("freq-401k", 1.0);
    s.set("exp-emergency", 400.0);
    s.set("freq-emergency", 1.0);
    s
}

/// Spending past income: net $3,000 against $3,450 of outflow
fn sample_stretched() -> Snapshot {
    let mut s = Snapshot::new();
    s.set("inc-salary", 45000.0);
    s.set("freq-salary", 12.0);
    s.set("inc-tax", 20.0);
    s.set("exp-rental", 1600.0);
    s.set("freq-rental", 1.0);
    s.set("exp-utilities-home", 250.0);
    s.set("freq-utilities-home", 1.0);
    s.set("exp-auto-loan", 400.0);
    s.set("freq-auto-loan", 1.0);
    s.set("exp-creditcard", 350.0);
    s.set("freq-creditcard", 1.0);
    s.set("exp-food", 400.0);
    s.set("freq-food", 1.0);
    s.set("exp-meals", 250.0);
    s.set("freq-meals", 1.0);
    s.set("exp-entertainment", 200.0);
    s.set("freq-entertainment", 1.0);
    s
}
