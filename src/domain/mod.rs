pub mod category;
pub mod common;
pub mod period;
pub mod summary;
pub mod transaction;
pub mod user;

pub use category::{Category, CategoryDirectory, DEFAULT_CATEGORIES};
pub use common::{Owned, UserId};
pub use period::{AggregationWindow, Period};
pub use summary::{
    AlertSeverity, BudgetAlert, CategoryTotal, CategoryTotals, LedgerTotals, MonthlyBucket,
    Report, Statistics, TopCategory,
};
pub use transaction::{Transaction, TransactionDraft, TransactionType, MAX_AMOUNT};
pub use user::User;

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
pub use uuid;
