use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::common::UserId;
use crate::storage::StoreError;

/// Unified error type for the aggregation engine and its services.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(uuid::Uuid),
    /// Budget alert requested for a category without a monthly limit.
    #[error("No budget configured for category `{0}`")]
    NoBudgetConfigured(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Ledger store read failed: {0}")]
    UpstreamRead(#[from] StoreError),
}

impl EngineError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::UserNotFound(_)
                | EngineError::CategoryNotFound(_)
                | EngineError::TransactionNotFound(_)
        )
    }
}

pub type EngineResult<T> = StdResult<T, EngineError>;
