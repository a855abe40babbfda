use crate::domain::{AggregationWindow, LedgerTotals, Report, TopCategory};

/// Assembles reports from already-computed parts. Deterministic, no I/O.
pub struct ReportService;

impl ReportService {
    pub fn compose(
        window: &AggregationWindow,
        totals: &LedgerTotals,
        top_categories: Vec<TopCategory>,
        currency: &str,
    ) -> Report {
        Report {
            period_label: window.label.clone(),
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            balance: totals.balance,
            top_categories,
            transaction_count: totals.transaction_count,
            currency: currency.to_string(),
        }
    }
}
