//! Derived financial summary
//!
//! The output record of a scoring run: the 0-100 health score, its
//! qualitative message, the monthly Needs/Wants/Savings aggregates, and the
//! per-category totals the presentation layer charts. Recomputed from
//! scratch on every run; never persisted.

use serde::Serialize;

use super::fields::Category;
use super::money::Money;

/// Monthly totals for the eight expense categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub housing: Money,
    pub transport: Money,
    pub debt: Money,
    pub living: Money,
    pub healthcare: Money,
    pub children: Money,
    pub savings_contribution: Money,
    pub misc: Money,
}

impl CategoryTotals {
    /// All-zero totals
    pub fn zero() -> Self {
        Self::default()
    }

    /// Read the total for one category
    pub fn get(&self, category: Category) -> Money {
        match category {
            Category::Housing => self.housing,
            Category::Transport => self.transport,
            Category::Debt => self.debt,
            Category::Living => self.living,
            Category::Healthcare => self.healthcare,
            Category::Children => self.children,
            Category::SavingsContribution => self.savings_contribution,
            Category::Misc => self.misc,
        }
    }

    /// Add an amount to one category's total
    pub fn add(&mut self, category: Category, amount: Money) {
        let slot = match category {
            Category::Housing => &mut self.housing,
            Category::Transport => &mut self.transport,
            Category::Debt => &mut self.debt,
            Category::Living => &mut self.living,
            Category::Healthcare => &mut self.healthcare,
            Category::Children => &mut self.children,
            Category::SavingsContribution => &mut self.savings_contribution,
            Category::Misc => &mut self.misc,
        };
        *slot += amount;
    }

    /// Sum across all eight categories
    pub fn total(&self) -> Money {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// The derived financial summary for one input snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Health score, 0-100
    pub score: u8,
    /// Qualitative message for the score
    pub message: String,
    /// Monthly essential spending
    pub needs: Money,
    /// Monthly discretionary spending
    pub wants: Money,
    /// Explicit savings contributions plus any unallocated remainder
    pub total_savings: Money,
    /// Monthly income after the flat tax adjustment
    pub net_income: Money,
    /// Per-category monthly totals
    pub categories: CategoryTotals,
    /// Advisory tips, in evaluation order
    pub tips: Vec<String>,
}

impl Summary {
    /// Needs as a share of net income, clamped to at most 100%
    pub fn needs_pct(&self) -> f64 {
        self.needs.percent_of(self.net_income).min(100.0)
    }

    /// Wants as a share of net income, clamped so needs + wants stays
    /// within 100%
    pub fn wants_pct(&self) -> f64 {
        self.wants
            .percent_of(self.net_income)
            .min(100.0 - self.needs_pct())
    }

    /// The savings share left after needs and wants, never negative
    pub fn savings_pct(&self) -> f64 {
        (100.0 - self.needs_pct() - self.wants_pct()).max(0.0)
    }
}
