//! Full summary rendering
//!
//! Assembles the gauge, monthly aggregates, allocation bar, tips, and
//! category chart into the terminal report for one scoring run.

use crate::models::Summary;

use super::breakdown::{render_allocation_bar, render_category_chart};
use super::gauge::render_gauge;
use super::report::{double_separator, separator};

const REPORT_WIDTH: usize = 48;

/// Render a complete summary report
pub fn render_summary(summary: &Summary, currency_symbol: &str, include_savings: bool) -> String {
    let mut output = String::new();

    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str("  Financial Health\n");
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&render_gauge(summary.score, &summary.message));
    output.push('\n');

    output.push_str(&format!(
        "  {:<12} {:>12}\n",
        "Net Income",
        summary.net_income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  {:<12} {:>12}\n",
        "Needs",
        summary.needs.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  {:<12} {:>12}\n",
        "Wants",
        summary.wants.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  {:<12} {:>12}\n",
        "Savings",
        summary.total_savings.format_with_symbol(currency_symbol)
    ));

    let bar = render_allocation_bar(summary);
    if !bar.is_empty() {
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&bar);
    }

    if !summary.tips.is_empty() {
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str("  Tips\n");
        for tip in &summary.tips {
            output.push_str(&format!("  • {}\n", tip));
        }
    }

    let chart = render_category_chart(&summary.categories, include_savings, currency_symbol);
    if !chart.is_empty() {
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str("  Spending by Category\n");
        output.push_str(&chart);
    }

    output
}
