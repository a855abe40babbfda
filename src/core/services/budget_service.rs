//! Compares current-month category spend against its configured monthly budget.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::core::errors::{EngineError, EngineResult};
use crate::core::services::ranking_service::percent_of;
use crate::domain::common::month_start;
use crate::domain::{AlertSeverity, BudgetAlert, Category, TransactionType};
use crate::storage::{GroupedTotal, TransactionFilter};

pub struct BudgetService;

impl BudgetService {
    /// Classifies `spent` against the category budget.
    ///
    /// Refuses with [`EngineError::NoBudgetConfigured`] when the category has no budget.
    /// A zero budget reads as 100% used once anything is spent.
    pub fn evaluate(category: &Category, spent: Decimal) -> EngineResult<BudgetAlert> {
        let budget = category
            .budget
            .ok_or_else(|| EngineError::NoBudgetConfigured(category.id.clone()))?;
        let percentage = if budget > Decimal::ZERO {
            percent_of(spent, budget).ok_or_else(|| {
                EngineError::InvalidInput(format!(
                    "spend {spent} against budget {budget} is out of range"
                ))
            })?
        } else if spent > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        let severity = if percentage >= Decimal::ONE_HUNDRED {
            AlertSeverity::Exceeded
        } else {
            AlertSeverity::Warning
        };
        Ok(BudgetAlert {
            category: category.id.clone(),
            label: category.label.clone(),
            budget,
            spent,
            percentage,
            remaining: (budget - spent).max(Decimal::ZERO),
            severity,
        })
    }

    /// Expense transactions of `category` from the first of the current month through `now`.
    pub fn current_month_filter(category: &str, now: DateTime<Utc>) -> TransactionFilter {
        TransactionFilter::all()
            .of_type(TransactionType::Expense)
            .in_category(category)
            .since(month_start(now))
            .until(now)
    }

    pub fn spent_in(groups: &[GroupedTotal], category: &str) -> Decimal {
        groups
            .iter()
            .filter(|group| group.key == category)
            .map(|group| group.total)
            .sum()
    }
}
