use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Owned, Transaction, User, UserId, DEFAULT_CATEGORIES};

use super::{StoreError, StoreResult, TransactionFilter};

/// The complete set of records held by a store backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl LedgerDocument {
    pub fn seeded() -> Self {
        let mut document = Self::default();
        document.seed_defaults();
        document
    }

    /// Inserts the global default categories into a store that has none at all.
    pub fn seed_defaults(&mut self) -> bool {
        if !self.categories.is_empty() {
            return false;
        }
        self.categories.extend(DEFAULT_CATEGORIES.iter().cloned());
        true
    }

    pub fn user(&self, user_id: UserId) -> Option<User> {
        self.users.iter().find(|user| user.id == user_id).cloned()
    }

    pub fn transactions_for(&self, user_id: UserId, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut matched: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|txn| txn.owner_id == user_id && filter.matches(txn))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }

    pub fn categories_for(&self, user_id: UserId) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|category| category.visible_to(user_id))
            .cloned()
            .collect()
    }

    pub fn insert_user(&mut self, user: User) -> StoreResult<()> {
        if self
            .users
            .iter()
            .any(|existing| existing.id == user.id || existing.email == user.email)
        {
            return Err(StoreError::Conflict(format!(
                "user `{}` already exists",
                user.email
            )));
        }
        self.users.push(user);
        Ok(())
    }

    pub fn insert_transaction(&mut self, transaction: Transaction) -> StoreResult<()> {
        if self.transactions.iter().any(|txn| txn.id == transaction.id) {
            return Err(StoreError::Conflict(format!(
                "transaction {} already exists",
                transaction.id
            )));
        }
        self.transactions.push(transaction);
        Ok(())
    }

    pub fn remove_transaction(&mut self, user_id: UserId, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions
            .retain(|txn| !(txn.id == id && txn.owner_id == user_id));
        self.transactions.len() != before
    }

    pub fn replace_transaction(&mut self, transaction: Transaction) -> bool {
        match self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == transaction.id && txn.owner_id == transaction.owner_id)
        {
            Some(existing) => {
                *existing = transaction;
                true
            }
            None => false,
        }
    }

    pub fn upsert_category(&mut self, category: Category) {
        match self
            .categories
            .iter_mut()
            .find(|existing| existing.id == category.id && existing.owner_id == category.owner_id)
        {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    pub fn remove_category(&mut self, owner_id: UserId, id: &str) -> bool {
        let before = self.categories.len();
        self.categories
            .retain(|category| !(category.id == id && category.owner_id == Some(owner_id)));
        self.categories.len() != before
    }
}
