use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::domain::{Category, Transaction, User, UserId};

use super::{
    LedgerDocument, LedgerStore, LedgerWriter, StoreError, StoreResult, TransactionFilter,
};

/// Process-local store, ready as soon as it is constructed.
#[derive(Debug)]
pub struct MemoryStore {
    document: RwLock<LedgerDocument>,
}

impl MemoryStore {
    /// A store holding only the default categories.
    pub fn new() -> Self {
        Self::from_document(LedgerDocument::seeded())
    }

    pub fn from_document(document: LedgerDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, LedgerDocument>> {
        self.document
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, LedgerDocument>> {
        self.document
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryStore {
    fn find_user(&self, user_id: UserId) -> StoreResult<Option<User>> {
        Ok(self.read()?.user(user_id))
    }

    fn fetch_transactions(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> StoreResult<Vec<Transaction>> {
        Ok(self.read()?.transactions_for(user_id, filter))
    }

    fn fetch_categories(&self, user_id: UserId) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories_for(user_id))
    }
}

impl LedgerWriter for MemoryStore {
    fn insert_user(&self, user: User) -> StoreResult<()> {
        self.write()?.insert_user(user)
    }

    fn insert_transaction(&self, transaction: Transaction) -> StoreResult<()> {
        self.write()?.insert_transaction(transaction)
    }

    fn remove_transaction(&self, user_id: UserId, id: Uuid) -> StoreResult<bool> {
        Ok(self.write()?.remove_transaction(user_id, id))
    }

    fn replace_transaction(&self, transaction: Transaction) -> StoreResult<bool> {
        Ok(self.write()?.replace_transaction(transaction))
    }

    fn upsert_category(&self, category: Category) -> StoreResult<()> {
        self.write()?.upsert_category(category);
        Ok(())
    }

    fn remove_category(&self, owner_id: UserId, id: &str) -> StoreResult<bool> {
        Ok(self.write()?.remove_category(owner_id, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_CATEGORIES;
    use crate::storage::GroupBy;

    #[test]
    fn new_store_is_seeded_and_empty_of_users() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        assert!(store.find_user(user).unwrap().is_none());
        assert_eq!(
            store.fetch_categories(user).unwrap().len(),
            DEFAULT_CATEGORIES.len()
        );
        assert!(store
            .grouped_sum(user, &TransactionFilter::all(), GroupBy::Category)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn writes_are_visible_to_reads() {
        let store = MemoryStore::new();
        let user = User::new("Ada", "ada@example.com").unwrap();
        let id = user.id;
        store.insert_user(user.clone()).unwrap();
        assert_eq!(store.find_user(id).unwrap(), Some(user));
        assert!(!store.remove_transaction(id, Uuid::new_v4()).unwrap());
    }
}
