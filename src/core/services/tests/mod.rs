mod category_service_tests;
mod ranking_service_tests;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{Transaction, TransactionDraft, TransactionType, User, UserId};
use crate::storage::{LedgerWriter, MemoryStore};

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub(super) fn txn(
    owner: UserId,
    kind: TransactionType,
    amount: Decimal,
    category: &str,
    date: DateTime<Utc>,
) -> Transaction {
    let draft = TransactionDraft::new(kind, amount, category, format!("{kind} in {category}")).on(date);
    Transaction::from_draft(owner, draft, date).unwrap()
}

pub(super) fn store_with_user() -> (MemoryStore, UserId) {
    let store = MemoryStore::new();
    let user = User::new("Ada", "ada@example.com").unwrap();
    let id = user.id;
    store.insert_user(user).unwrap();
    (store, id)
}
