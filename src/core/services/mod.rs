pub mod budget_service;
pub mod category_service;
pub mod ranking_service;
pub mod report_service;
pub mod statistics_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use category_service::{CategoryChanges, CategoryService};
pub use ranking_service::{RankingService, TOP_CATEGORY_LIMIT};
pub use report_service::ReportService;
pub use statistics_service::{StatisticsService, TRAILING_MONTHS};
pub use transaction_service::TransactionService;

use crate::core::errors::{EngineError, EngineResult};
use crate::domain::{User, UserId};
use crate::storage::LedgerStore;

/// Resolves the user record or fails with [`EngineError::UserNotFound`].
pub fn ensure_user<S: LedgerStore + ?Sized>(store: &S, user_id: UserId) -> EngineResult<User> {
    store
        .find_user(user_id)?
        .ok_or(EngineError::UserNotFound(user_id))
}

#[cfg(test)]
mod tests;
