use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use uuid::Uuid;

use crate::core::utils::{ensure_dir, write_atomic, PathResolver};
use crate::domain::{Category, Transaction, User, UserId};

use super::{
    LedgerDocument, LedgerStore, LedgerWriter, StoreError, StoreResult, TransactionFilter,
};

/// Document store persisted as a single pretty-printed JSON file.
///
/// Every read goes back to disk, so results always reflect the file as of the call.
/// Writes are serialized within the process and replace the file atomically.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonStore {
    /// Opens (creating if needed) the store under `root`, or the default base directory.
    /// The default categories are seeded when the store holds none.
    pub fn open(root: Option<PathBuf>) -> StoreResult<Self> {
        let base = PathResolver::resolve_base(root);
        ensure_dir(&base)?;
        let store = Self {
            path: PathResolver::ledger_file_in(&base),
            write_guard: Mutex::new(()),
        };
        let mut document = if store.path.exists() {
            store.load()?
        } else {
            LedgerDocument::default()
        };
        if document.seed_defaults() || !store.path.exists() {
            store.save(&document)?;
            tracing::info!(path = %store.path.display(), "initialized ledger document");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> StoreResult<LedgerDocument> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, document: &LedgerDocument) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(document)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    fn mutate<T>(&self, apply: impl FnOnce(&mut LedgerDocument) -> StoreResult<T>) -> StoreResult<T> {
        let _guard = self
            .write_guard
            .lock()
            .map_err(|_| StoreError::Unavailable("json store write lock poisoned".into()))?;
        let mut document = self.load()?;
        let outcome = apply(&mut document)?;
        self.save(&document)?;
        Ok(outcome)
    }
}

impl LedgerStore for JsonStore {
    fn find_user(&self, user_id: UserId) -> StoreResult<Option<User>> {
        Ok(self.load()?.user(user_id))
    }

    fn fetch_transactions(
        &self,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> StoreResult<Vec<Transaction>> {
        Ok(self.load()?.transactions_for(user_id, filter))
    }

    fn fetch_categories(&self, user_id: UserId) -> StoreResult<Vec<Category>> {
        Ok(self.load()?.categories_for(user_id))
    }
}

impl LedgerWriter for JsonStore {
    fn insert_user(&self, user: User) -> StoreResult<()> {
        self.mutate(|document| document.insert_user(user))
    }

    fn insert_transaction(&self, transaction: Transaction) -> StoreResult<()> {
        self.mutate(|document| document.insert_transaction(transaction))
    }

    fn remove_transaction(&self, user_id: UserId, id: Uuid) -> StoreResult<bool> {
        self.mutate(|document| Ok(document.remove_transaction(user_id, id)))
    }

    fn replace_transaction(&self, transaction: Transaction) -> StoreResult<bool> {
        self.mutate(|document| Ok(document.replace_transaction(transaction)))
    }

    fn upsert_category(&self, category: Category) -> StoreResult<()> {
        self.mutate(|document| {
            document.upsert_category(category);
            Ok(())
        })
    }

    fn remove_category(&self, owner_id: UserId, id: &str) -> StoreResult<bool> {
        self.mutate(|document| Ok(document.remove_category(owner_id, id)))
    }
}
