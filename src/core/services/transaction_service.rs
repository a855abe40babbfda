use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::errors::{EngineError, EngineResult};
use crate::domain::{Transaction, TransactionDraft, UserId};
use crate::storage::{LedgerStore, LedgerWriter, TransactionFilter};

use super::ensure_user;

pub struct TransactionService;

impl TransactionService {
    pub fn record<S: LedgerWriter + ?Sized>(
        store: &S,
        user_id: UserId,
        draft: TransactionDraft,
        now: DateTime<Utc>,
    ) -> EngineResult<Transaction> {
        ensure_user(store, user_id)?;
        let transaction = Transaction::from_draft(user_id, draft, now)?;
        store.insert_transaction(transaction.clone())?;
        Ok(transaction)
    }

    /// One of the user's transactions. Records owned by anyone else are reported missing.
    pub fn get<S: LedgerStore + ?Sized>(store: &S, user_id: UserId, id: Uuid) -> EngineResult<Transaction> {
        ensure_user(store, user_id)?;
        store
            .find_transaction(user_id, id)?
            .ok_or(EngineError::TransactionNotFound(id))
    }

    /// Replaces the editable fields of a transaction, validated like a new record.
    /// The id and creation time are kept; a draft without a date keeps the stored date.
    pub fn update<S: LedgerWriter + ?Sized>(
        store: &S,
        user_id: UserId,
        id: Uuid,
        draft: TransactionDraft,
    ) -> EngineResult<Transaction> {
        let current = Self::get(store, user_id, id)?;
        let draft = TransactionDraft {
            date: draft.date.or(Some(current.date)),
            ..draft
        };
        let mut updated = Transaction::from_draft(user_id, draft, current.created_at)?;
        updated.id = current.id;
        updated.created_at = current.created_at;
        if !store.replace_transaction(updated.clone())? {
            return Err(EngineError::TransactionNotFound(id));
        }
        tracing::debug!(user = %user_id, transaction = %id, "transaction updated");
        Ok(updated)
    }

    /// Newest first.
    pub fn list<S: LedgerStore + ?Sized>(
        store: &S,
        user_id: UserId,
        filter: &TransactionFilter,
    ) -> EngineResult<Vec<Transaction>> {
        ensure_user(store, user_id)?;
        Ok(store.fetch_transactions(user_id, filter)?)
    }

    pub fn remove<S: LedgerWriter + ?Sized>(store: &S, user_id: UserId, id: Uuid) -> EngineResult<()> {
        ensure_user(store, user_id)?;
        if store.remove_transaction(user_id, id)? {
            Ok(())
        } else {
            Err(EngineError::TransactionNotFound(id))
        }
    }
}
