//! Allocation bar and category chart rendering
//!
//! The allocation bar shows needs/wants/savings as three segments of a
//! fixed-width bar, clamped so the segments never exceed the full width.
//! The category chart replaces the original doughnut with proportional
//! horizontal bars per category.

use crate::models::{Category, CategoryTotals, Money, Summary};

use super::report::{format_bar, format_percentage};

const BAR_WIDTH: usize = 40;
const CHART_BAR_WIDTH: usize = 20;

/// Render the three-segment needs/wants/savings bar with a legend
///
/// Returns an empty string when there is no income to apportion.
pub fn render_allocation_bar(summary: &Summary) -> String {
    if !summary.net_income.is_positive() {
        return String::new();
    }

    let needs_pct = summary.needs_pct();
    let wants_pct = summary.wants_pct();
    let save_pct = summary.savings_pct();

    let needs_cells = segment_cells(needs_pct);
    let wants_cells = segment_cells(wants_pct).min(BAR_WIDTH - needs_cells);
    let save_cells = BAR_WIDTH - needs_cells - wants_cells;

    let mut output = String::new();
    output.push_str("  ");
    output.push_str("\x1b[31m");
    output.push_str(&"█".repeat(needs_cells));
    output.push_str("\x1b[33m");
    output.push_str(&"█".repeat(wants_cells));
    output.push_str("\x1b[32m");
    output.push_str(&"█".repeat(save_cells));
    output.push_str("\x1b[0m\n");
    output.push_str(&format!(
        "  Needs {}  ·  Wants {}  ·  Savings {}\n",
        format_percentage(needs_pct),
        format_percentage(wants_pct),
        format_percentage(save_pct)
    ));
    output
}

fn segment_cells(pct: f64) -> usize {
    ((pct / 100.0) * BAR_WIDTH as f64).round() as usize
}

/// Render the per-category spending chart
///
/// Each category gets a bar proportional to the largest total. Whether the
/// savings-contribution slice appears alongside true expenses is the
/// caller's choice. Returns an empty string when every included slice is
/// zero.
pub fn render_category_chart(
    totals: &CategoryTotals,
    include_savings: bool,
    currency_symbol: &str,
) -> String {
    let slices: Vec<(Category, Money)> = Category::ALL
        .iter()
        .filter(|c| include_savings || **c != Category::SavingsContribution)
        .map(|c| (*c, totals.get(*c)))
        .collect();

    let total: Money = slices.iter().map(|(_, m)| *m).sum();
    if !total.is_positive() {
        return String::new();
    }

    let max = slices.iter().map(|(_, m)| m.cents()).max().unwrap_or(0);

    let mut output = String::new();
    for (category, amount) in slices.iter().filter(|(_, m)| !m.is_zero()) {
        output.push_str(&format!(
            "  {:<9} {} {:>10}  {:>6}\n",
            category.label(),
            format_bar(amount.cents() as f64, max as f64, CHART_BAR_WIDTH),
            amount.format_with_symbol(currency_symbol),
            format_percentage(amount.percent_of(total))
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(needs: i64, wants: i64, savings: i64, net: i64) -> Summary {
        Summary {
            score: 50,
            message: String::new(),
            needs: Money::from_cents(needs),
            wants: Money::from_cents(wants),
            total_savings: Money::from_cents(savings),
            net_income: Money::from_cents(net),
            categories: CategoryTotals::zero(),
            tips: Vec::new(),
        }
    }

    #[test]
    fn test_allocation_bar_fills_full_width() {
        let bar = render_allocation_bar(&summary(50000, 30000, 20000, 100000));
        let cells = bar.chars().filter(|c| *c == '█').count();
        assert_eq!(cells, BAR_WIDTH);
        assert!(bar.contains("Needs 50%"));
        assert!(bar.contains("Wants 30%"));
        assert!(bar.contains("Savings 20%"));
    }

    #[test]
    fn test_allocation_bar_empty_without_income() {
        assert_eq!(render_allocation_bar(&summary(50000, 0, 0, 0)), "");
    }

    #[test]
    fn test_allocation_bar_clamps_overspend() {
        // Needs beyond income take the whole bar; wants and savings collapse
        let bar = render_allocation_bar(&summary(150000, 50000, 0, 100000));
        assert!(bar.contains("Needs 100%"));
        assert!(bar.contains("Wants 0.0%"));
        let cells = bar.chars().filter(|c| *c == '█').count();
        assert_eq!(cells, BAR_WIDTH);
    }

    #[test]
    fn test_category_chart_zero_total_suppressed() {
        let chart = render_category_chart(&CategoryTotals::zero(), true, "$");
        assert!(chart.is_empty());
    }

    #[test]
    fn test_category_chart_lists_nonzero_categories() {
        let mut totals = CategoryTotals::zero();
        totals.add(Category::Housing, Money::from_cents(150000));
        totals.add(Category::SavingsContribution, Money::from_cents(50000));

        let chart = render_category_chart(&totals, true, "$");
        assert!(chart.contains("Housing"));
        assert!(chart.contains("$1500.00"));
        assert!(chart.contains("Savings"));
        assert!(chart.contains("75%"));
    }

    #[test]
    fn test_category_chart_savings_slice_toggle() {
        let mut totals = CategoryTotals::zero();
        totals.add(Category::Housing, Money::from_cents(100000));
        totals.add(Category::SavingsContribution, Money::from_cents(100000));

        let with = render_category_chart(&totals, true, "$");
        assert!(with.contains("Savings"));
        assert!(with.contains("50%"));

        let without = render_category_chart(&totals, false, "$");
        assert!(!without.contains("Savings"));
        assert!(without.contains("100%"));
    }

    #[test]
    fn test_savings_only_chart_suppressed_when_slice_excluded() {
        let mut totals = CategoryTotals::zero();
        totals.add(Category::SavingsContribution, Money::from_cents(100000));
        assert!(render_category_chart(&totals, false, "$").is_empty());
        assert!(!render_category_chart(&totals, true, "$").is_empty());
    }
}
