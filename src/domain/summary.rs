//! Derived, never-persisted aggregation outputs.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Expense sums keyed by category, remembering the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    pub fn add(&mut self, category: &str, amount: Decimal) {
        match self.index.get(category) {
            Some(&position) => self.entries[position].total += amount,
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: category.to_string(),
                    total: amount,
                });
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index
            .get(category)
            .map(|&position| self.entries[position].total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.total).sum()
    }

    /// Descending by total; equal totals keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<CategoryTotal> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.total.cmp(&a.total));
        sorted
    }
}

/// Income, expense and per-category sums over one set of transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerTotals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub category_totals: CategoryTotals,
    pub transaction_count: usize,
}

/// One `(year, month, type)` bucket of the trailing monthly series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub total: Decimal,
}

/// Full-history statistics for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub category_breakdown: Vec<CategoryTotal>,
    pub monthly_data: Vec<MonthlyBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopCategory {
    pub name: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub period_label: String,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub top_categories: Vec<TopCategory>,
    pub transaction_count: usize,
    /// Presentation-only symbol, passed through untouched.
    pub currency: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Exceeded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub label: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub percentage: Decimal,
    pub remaining: Decimal,
    pub severity: AlertSeverity,
}
