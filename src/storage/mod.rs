//! Ledger Store contract and its in-memory and JSON-document implementations.

pub mod document;
pub mod json_backend;
pub mod memory;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    AggregationWindow, Category, Transaction, TransactionType, User, UserId,
};

pub use document::LedgerDocument;
pub use json_backend::JsonStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failures raised by a store backend. Never retried by the engine.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Optional restrictions applied when fetching a user's transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn within(window: &AggregationWindow) -> Self {
        Self::all().since(window.start).until(window.end)
    }

    pub fn of_type(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.kind.is_some_and(|kind| kind != transaction.kind) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|category| category != transaction.category)
        {
            return false;
        }
        if self.start.is_some_and(|start| transaction.date < start) {
            return false;
        }
        if self.end.is_some_and(|end| transaction.date > end) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => transaction
                .description
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Category,
    Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedTotal {
    pub key: String,
    pub total: Decimal,
    pub count: usize,
}

/// Read side of the ledger. Implementations must return either complete results or an error.
pub trait LedgerStore: Send + Sync {
    fn find_user(&self, user_id: UserId) -> StoreResult<Option<User>>;

    /// The user's transactions matching `filter`, newest first.
    fn fetch_transactions(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> StoreResult<Vec<Transaction>>;

    /// One of the user's transactions; `None` when missing or owned by someone else.
    fn find_transaction(&self, user_id: UserId, id: Uuid) -> StoreResult<Option<Transaction>> {
        Ok(self
            .fetch_transactions(user_id, &TransactionFilter::all())?
            .into_iter()
            .find(|txn| txn.id == id))
    }

    /// The user's own categories plus the global defaults.
    fn fetch_categories(&self, user_id: UserId) -> StoreResult<Vec<Category>>;

    /// Sums matching amounts per group. Defaults to an in-memory reduction of
    /// `fetch_transactions`; backends with native aggregation may override it.
    fn grouped_sum(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
        group_by: GroupBy,
    ) -> StoreResult<Vec<GroupedTotal>> {
        let transactions = self.fetch_transactions(user_id, filter)?;
        Ok(group_transactions(&transactions, group_by))
    }
}

/// Write side used by the record-management services.
pub trait LedgerWriter: LedgerStore {
    fn insert_user(&self, user: User) -> StoreResult<()>;
    fn insert_transaction(&self, transaction: Transaction) -> StoreResult<()>;
    fn remove_transaction(&self, user_id: UserId, id: Uuid) -> StoreResult<bool>;
    /// Replaces the stored record with the same id and owner. `false` when there is none.
    fn replace_transaction(&self, transaction: Transaction) -> StoreResult<bool>;
    /// Inserts or replaces the record keyed by `(owner_id, id)`.
    fn upsert_category(&self, category: Category) -> StoreResult<()>;
    fn remove_category(&self, owner_id: UserId, id: &str) -> StoreResult<bool>;
}

/// Groups in first-seen order.
pub fn group_transactions(transactions: &[Transaction], group_by: GroupBy) -> Vec<GroupedTotal> {
    let mut groups: Vec<GroupedTotal> = Vec::new();
    for transaction in transactions {
        let key = match group_by {
            GroupBy::Category => transaction.category.as_str(),
            GroupBy::Type => transaction.kind.as_str(),
        };
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => {
                group.total += transaction.amount;
                group.count += 1;
            }
            None => groups.push(GroupedTotal {
                key: key.to_string(),
                total: transaction.amount,
                count: 1,
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionDraft;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn txn(kind: TransactionType, amount: Decimal, category: &str, desc: &str, day: u32) -> Transaction {
        let date = Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
        let draft = TransactionDraft::new(kind, amount, category, desc).on(date);
        Transaction::from_draft(Uuid::new_v4(), draft, date).unwrap()
    }

    #[test]
    fn filter_combines_all_criteria() {
        let lunch = txn(TransactionType::Expense, dec!(12), "food", "Team Lunch", 5);
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();

        let filter = TransactionFilter::all()
            .of_type(TransactionType::Expense)
            .in_category("food")
            .since(start)
            .until(end)
            .search("lunch");
        assert!(filter.matches(&lunch));
        assert!(!filter.clone().of_type(TransactionType::Income).matches(&lunch));
        assert!(!filter.clone().in_category("bills").matches(&lunch));
        assert!(!filter.clone().until(start).matches(&lunch));
        assert!(!filter.search("dinner").matches(&lunch));
    }

    #[test]
    fn blank_search_matches_everything() {
        let rent = txn(TransactionType::Expense, dec!(900), "bills", "Rent", 1);
        assert!(TransactionFilter::all().search("  ").matches(&rent));
    }

    #[test]
    fn groups_by_category_and_type() {
        let transactions = vec![
            txn(TransactionType::Expense, dec!(10), "food", "a", 1),
            txn(TransactionType::Income, dec!(100), "income", "b", 2),
            txn(TransactionType::Expense, dec!(5), "food", "c", 3),
        ];
        let by_category = group_transactions(&transactions, GroupBy::Category);
        assert_eq!(by_category[0].key, "food");
        assert_eq!(by_category[0].total, dec!(15));
        assert_eq!(by_category[0].count, 2);

        let by_type = group_transactions(&transactions, GroupBy::Type);
        assert_eq!(by_type.len(), 2);
        assert_eq!(by_type[1].key, "income");
    }
}
