//! Income and expense records owned by a single user.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::{EngineError, EngineResult};
use crate::domain::category::slugify;
use crate::domain::common::UserId;

pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Largest amount a single transaction or budget may carry: 1,000,000,000,000.
/// Sums of bounded amounts stay far inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Rejects amounts outside `(0, MAX_AMOUNT]`.
pub fn validate_amount(field: &str, amount: Decimal) -> EngineResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::InvalidInput(format!(
            "{field} must be greater than 0"
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(EngineError::InvalidInput(format!(
            "{field} cannot exceed {MAX_AMOUNT}"
        )));
    }
    Ok(amount)
}

/// Direction of money flow. Declaration order drives bucket ordering within a month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(EngineError::InvalidInput(format!(
                "unknown transaction type `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub owner_id: UserId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Validates a draft and stamps it with a fresh id. A draft without a date is
    /// booked at `now`.
    pub fn from_draft(
        owner_id: UserId,
        draft: TransactionDraft,
        now: DateTime<Utc>,
    ) -> EngineResult<Self> {
        let amount = validate_amount("amount", draft.amount)?;
        let category = slugify(&draft.category);
        if category.is_empty() {
            return Err(EngineError::InvalidInput("category is required".into()));
        }
        let description = draft.description.trim().to_string();
        if description.is_empty() {
            return Err(EngineError::InvalidInput("description is required".into()));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(EngineError::InvalidInput(format!(
                "description cannot exceed {MAX_DESCRIPTION_LEN} characters"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            kind: draft.kind,
            amount,
            category,
            description,
            date: draft.date.unwrap_or(now),
            created_at: now,
        })
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// User-supplied fields of a transaction before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionType,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date: None,
        }
    }

    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}
