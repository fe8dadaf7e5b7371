//! Financial health scoring
//!
//! Implements the scoring pipeline: monthly normalization of the input
//! fields, aggregation into category totals, the Needs/Wants/Savings split,
//! and the 0-100 heuristic score with its message and advisory tips.
//!
//! The scorer is pure: it reads one [`Snapshot`] and returns one
//! [`Summary`]. It performs no I/O and holds no state between runs.

use tracing::debug;

use crate::models::fields::{
    ExpenseField, IncomeField, SpendClass, EXPENSE_FIELDS, INCOME_FIELDS, TAX_RATE_FIELD,
};
use crate::models::{CategoryTotals, Money, Snapshot, Summary};

/// Savings sub-score cap; reached exactly at a 20% savings rate
const SAVINGS_SCORE_CAP: f64 = 50.0;
/// Points per percentage point of savings rate
const SAVINGS_SCORE_PER_PCT: f64 = 2.5;
/// Needs ratio at or below which the needs sub-score is maxed
const NEEDS_TARGET_RATIO: f64 = 50.0;
/// Needs sub-score cap
const NEEDS_SCORE_CAP: f64 = 50.0;
/// Fixed score when outflow exceeds income
const OVERSPEND_SCORE: u8 = 10;

/// Tip thresholds, as percentages of net income
const TIP_NEEDS_PCT: f64 = 55.0;
const TIP_WANTS_PCT: f64 = 35.0;
const TIP_SAVE_PCT: f64 = 15.0;
/// The savings rate the score formula treats as fully funded
const SAVINGS_TARGET_PCT: f64 = 20.0;
/// Score above which the retirement-contribution tip applies
const TIP_HIGH_SCORE: u8 = 80;

/// The health score calculator
pub struct Scorer;

impl Scorer {
    /// Compute the financial summary for one input snapshot
    pub fn score(snapshot: &Snapshot) -> Summary {
        let gross: Money = INCOME_FIELDS
            .iter()
            .map(|f| income_monthly(snapshot, f))
            .sum();
        let tax_rate = snapshot.get(TAX_RATE_FIELD);
        let net_income = gross.mul_scalar(1.0 - tax_rate / 100.0);

        let mut categories = CategoryTotals::zero();
        let mut needs = Money::zero();
        let mut wants = Money::zero();
        let mut savings_contribution = Money::zero();

        for field in &EXPENSE_FIELDS {
            let amount = expense_monthly(snapshot, field);
            categories.add(field.category, amount);
            match field.class {
                SpendClass::Need => needs += amount,
                SpendClass::Want => wants += amount,
                SpendClass::Savings => savings_contribution += amount,
            }
        }

        let total_outflow = categories.total();

        // Outflow without any income is a degenerate state, not a real score
        if !net_income.is_positive() && total_outflow.is_positive() {
            debug!("no income entered; returning guard summary");
            return Summary {
                score: 0,
                message: "Enter Income to start".to_string(),
                needs: Money::zero(),
                wants: Money::zero(),
                total_savings: Money::zero(),
                net_income: Money::zero(),
                categories: CategoryTotals::zero(),
                tips: Vec::new(),
            };
        }

        let remaining = if net_income > total_outflow {
            net_income - total_outflow
        } else {
            Money::zero()
        };
        let total_savings = savings_contribution + remaining;

        let score = if total_outflow > net_income {
            OVERSPEND_SCORE
        } else {
            let savings_rate = total_savings.percent_of(net_income);
            let savings_score = (savings_rate * SAVINGS_SCORE_PER_PCT).min(SAVINGS_SCORE_CAP);

            let needs_ratio = needs.percent_of(net_income);
            let needs_score = if needs_ratio <= NEEDS_TARGET_RATIO {
                NEEDS_SCORE_CAP
            } else {
                (NEEDS_SCORE_CAP - (needs_ratio - NEEDS_TARGET_RATIO)).max(0.0)
            };

            (savings_score + needs_score).floor().clamp(0.0, 100.0) as u8
        };

        let message = score_message(score).to_string();
        let tips = build_tips(score, needs, wants, net_income);

        debug!(
            score,
            gross = %gross,
            net = %net_income,
            outflow = %total_outflow,
            "scored snapshot"
        );

        Summary {
            score,
            message,
            needs,
            wants,
            total_savings,
            net_income,
            categories,
            tips,
        }
    }
}

/// Normalize an income field to its monthly amount
fn income_monthly(snapshot: &Snapshot, field: &IncomeField) -> Money {
    monthly(snapshot, field.field, field.frequency)
}

/// Normalize an expense field to its monthly amount
fn expense_monthly(snapshot: &Snapshot, field: &ExpenseField) -> Money {
    monthly(snapshot, field.field, field.frequency)
}

/// Raw field value divided by its frequency divisor
///
/// No frequency field, or a divisor that is not greater than zero, means
/// the value is already a monthly amount.
fn monthly(snapshot: &Snapshot, field: &str, frequency: Option<&str>) -> Money {
    let raw = Money::from_dollars(snapshot.get(field));
    match frequency {
        Some(freq_field) => raw.div_scalar(snapshot.get(freq_field)),
        None => raw,
    }
}

/// Qualitative message for a score
fn score_message(score: u8) -> &'static str {
    if score >= 90 {
        "Financial Freedom! Excellent job."
    } else if score >= 75 {
        "Great health! You are on the right track."
    } else if score >= 50 {
        "Good, but room for improvement."
    } else if score >= 30 {
        "Fair. Watch your expenses."
    } else {
        "Action Needed! You are overspending."
    }
}

/// Advisory tips derived from the spending ratios
///
/// Evaluated in a fixed order, each condition independently. No tips are
/// produced without income. The retirement suggestion fires for high
/// scores that still have savings headroom below the 20% target; when
/// nothing triggers, a single affirmative tip confirms the balance.
fn build_tips(score: u8, needs: Money, wants: Money, net_income: Money) -> Vec<String> {
    if !net_income.is_positive() {
        return Vec::new();
    }

    let needs_pct = needs.percent_of(net_income);
    let wants_pct = wants.percent_of(net_income);
    let save_pct = 100.0 - needs_pct - wants_pct;

    let mut tips = Vec::new();
    if needs_pct > TIP_NEEDS_PCT {
        tips.push(format!(
            "Needs are {:.0}% (Target 50%). Review Housing & Transport costs.",
            needs_pct
        ));
    }
    if wants_pct > TIP_WANTS_PCT {
        tips.push(format!(
            "Wants are {:.0}% (Target 30%). Cut back on Misc, Dining, or Shopping.",
            wants_pct
        ));
    }
    if save_pct < TIP_SAVE_PCT {
        tips.push(format!(
            "Savings are {:.0}% (Target 20%). Pay yourself first!",
            save_pct
        ));
    }
    if score > TIP_HIGH_SCORE && save_pct < SAVINGS_TARGET_PCT {
        tips.push("Excellent work! Consider maximizing 401k or IRA contributions.".to_string());
    }

    if tips.is_empty() {
        tips.push("Your 50/30/20 balance looks good. Keep it up!".to_string());
    }
    tips
}
