//! Income, expense and category aggregation over already-fetched transactions.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Months, Utc};
use rust_decimal::Decimal;

use crate::domain::{
    AggregationWindow, LedgerTotals, MonthlyBucket, Statistics, Transaction, TransactionType,
};

/// Length of the monthly trend series, counted back from the reference instant.
pub const TRAILING_MONTHS: u32 = 6;

/// Stateless aggregation over transaction slices. Performs no I/O.
pub struct StatisticsService;

impl StatisticsService {
    /// Sums every transaction given, regardless of date.
    pub fn totals(transactions: &[Transaction]) -> LedgerTotals {
        Self::accumulate(transactions)
    }

    /// Sums only the transactions dated inside `window`.
    pub fn totals_in_window(transactions: &[Transaction], window: &AggregationWindow) -> LedgerTotals {
        Self::accumulate(transactions.iter().filter(|txn| window.contains(txn.date)))
    }

    /// Full-history statistics with a trailing monthly series ending at `now`.
    pub fn compute(transactions: &[Transaction], now: DateTime<Utc>) -> Statistics {
        let totals = Self::totals(transactions);
        Statistics {
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            balance: totals.balance,
            category_breakdown: totals.category_totals.sorted_desc(),
            monthly_data: Self::monthly_series(transactions, now),
        }
    }

    /// Per `(year, month, type)` sums for transactions dated on or after
    /// [`Self::series_start`], ascending by month with income before expense.
    /// Months without activity produce no bucket.
    pub fn monthly_series(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<MonthlyBucket> {
        let since = Self::series_start(now);
        let mut buckets: BTreeMap<(i32, u32, TransactionType), Decimal> = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.date >= since) {
            *buckets
                .entry((txn.date.year(), txn.date.month(), txn.kind))
                .or_insert(Decimal::ZERO) += txn.amount;
        }
        buckets
            .into_iter()
            .map(|((year, month, kind), total)| MonthlyBucket {
                year,
                month,
                kind,
                total,
            })
            .collect()
    }

    /// `now` moved back [`TRAILING_MONTHS`] calendar months, day clamped to the month length.
    pub fn series_start(now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(TRAILING_MONTHS))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Walks the transactions oldest first, so category totals are keyed in ledger order
    /// whatever order the store returned them in. Same-dated records keep their input order.
    fn accumulate<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> LedgerTotals {
        let mut ordered: Vec<&Transaction> = transactions.into_iter().collect();
        ordered.sort_by_key(|txn| txn.date);

        let mut totals = LedgerTotals::default();
        for txn in ordered {
            match txn.kind {
                TransactionType::Income => totals.total_income += txn.amount,
                TransactionType::Expense => {
                    totals.total_expenses += txn.amount;
                    totals.category_totals.add(&txn.category, txn.amount);
                }
            }
            totals.transaction_count += 1;
        }
        totals.balance = totals.total_income - totals.total_expenses;
        totals
    }
}
