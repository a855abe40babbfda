//! Service-layer façade over an injected ledger store and clock.

use std::sync::Arc;

use crate::core::errors::{EngineError, EngineResult};
use crate::core::services::{
    ensure_user, BudgetService, RankingService, ReportService, StatisticsService,
};
use crate::core::time::{Clock, SystemClock};
use crate::domain::category::{find_visible, slugify};
use crate::domain::{AggregationWindow, BudgetAlert, CategoryDirectory, Report, Statistics, UserId};
use crate::storage::{GroupBy, LedgerStore, TransactionFilter};

/// Computes statistics, reports and budget alerts for pre-authenticated users.
///
/// Every call re-reads from the store; nothing is cached between calls. A store
/// failure aborts the call with [`EngineError::UpstreamRead`], so callers never see a
/// partially summed result.
#[derive(Clone)]
pub struct InsightsEngine {
    store: Arc<dyn LedgerStore>,
    clock: Arc<dyn Clock>,
}

impl InsightsEngine {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn LedgerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &dyn LedgerStore {
        self.store.as_ref()
    }

    /// Full-history totals, category breakdown and the trailing monthly series.
    pub fn compute_statistics(&self, user_id: UserId) -> EngineResult<Statistics> {
        let now = self.clock.now();
        ensure_user(self.store(), user_id)?;
        let transactions = self
            .store
            .fetch_transactions(user_id, &TransactionFilter::all())?;
        tracing::debug!(user = %user_id, count = transactions.len(), "computing statistics");
        Ok(StatisticsService::compute(&transactions, now))
    }

    /// Report for the period named by `period_selector`; unknown selectors mean `month`.
    /// `currency_symbol` is carried into the report untouched.
    pub fn build_report(
        &self,
        user_id: UserId,
        period_selector: &str,
        currency_symbol: &str,
    ) -> EngineResult<Report> {
        let now = self.clock.now();
        ensure_user(self.store(), user_id)?;
        let window = AggregationWindow::resolve(period_selector, now);
        let transactions = self
            .store
            .fetch_transactions(user_id, &TransactionFilter::within(&window))?;
        let categories = self.store.fetch_categories(user_id)?;

        let totals = StatisticsService::totals_in_window(&transactions, &window);
        let directory = CategoryDirectory::from_visible(&categories);
        let top = RankingService::top_categories(
            &totals.category_totals,
            totals.total_expenses,
            &directory,
        );
        tracing::debug!(
            user = %user_id,
            period = %window.label,
            count = totals.transaction_count,
            "built report"
        );
        Ok(ReportService::compose(&window, &totals, top, currency_symbol))
    }

    /// Current-month spend against the category budget.
    ///
    /// Fails with [`EngineError::NoBudgetConfigured`] when the category has no budget;
    /// callers are expected to check for that before presenting an alert.
    pub fn evaluate_budget_alert(&self, user_id: UserId, category_id: &str) -> EngineResult<BudgetAlert> {
        let now = self.clock.now();
        ensure_user(self.store(), user_id)?;
        let key = slugify(category_id);
        let categories = self.store.fetch_categories(user_id)?;
        let category = find_visible(&categories, &key)
            .ok_or_else(|| EngineError::CategoryNotFound(key.clone()))?;
        if category.budget.is_none() {
            return Err(EngineError::NoBudgetConfigured(key));
        }

        let filter = BudgetService::current_month_filter(&category.id, now);
        let groups = self.store.grouped_sum(user_id, &filter, GroupBy::Category)?;
        let alert = BudgetService::evaluate(category, BudgetService::spent_in(&groups, &category.id))?;
        tracing::debug!(
            user = %user_id,
            category = %alert.category,
            severity = ?alert.severity,
            "evaluated budget alert"
        );
        Ok(alert)
    }
}
