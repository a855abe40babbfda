#![doc(test(attr(deny(warnings))))]

//! ExpenseFlow Core turns a personal ledger of income and expense transactions into
//! running balances, category breakdowns, period reports and budget alerts.

pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

pub use crate::core::engine::InsightsEngine;
pub use crate::core::errors::{EngineError, EngineResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("ExpenseFlow Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
