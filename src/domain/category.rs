//! Spending categories and the lookup directory used to label them.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::errors::{EngineError, EngineResult};
use crate::domain::common::{Owned, UserId};
use crate::domain::transaction::validate_amount;

pub const MAX_LABEL_LEN: usize = 50;
pub const DEFAULT_ICON: &str = "Tag";
pub const DEFAULT_COLOR: &str = "#6366f1";

/// Categories shared by every user. Seeded into an empty store.
pub static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    [
        ("food", "Food & Dining", "Utensils", "#f97316"),
        ("transport", "Transport", "Car", "#3b82f6"),
        ("shopping", "Shopping", "ShoppingBag", "#ec4899"),
        ("entertainment", "Entertainment", "Clapperboard", "#8b5cf6"),
        ("bills", "Bills & Utilities", "Receipt", "#ef4444"),
        ("health", "Health", "Heart", "#22c55e"),
        ("income", "Income", "Wallet", "#22c55e"),
        ("other", "Other", "Package", "#64748b"),
    ]
    .into_iter()
    .map(|(id, label, icon, color)| Category {
        id: id.into(),
        owner_id: None,
        label: label.into(),
        icon: icon.into(),
        color: color.into(),
        is_default: true,
        budget: None,
    })
    .collect()
});

/// A spending category keyed by a lowercase slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    pub label: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub is_default: bool,
    /// Monthly expense ceiling; `None` means no limit configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

impl Category {
    /// Builds a user-owned category. The id is slugified and the label validated.
    pub fn custom(owner_id: UserId, id: &str, label: &str) -> EngineResult<Self> {
        let id = slugify(id);
        if id.is_empty() {
            return Err(EngineError::InvalidInput("category id is required".into()));
        }
        Ok(Self {
            id,
            owner_id: Some(owner_id),
            label: validate_label(label)?,
            icon: DEFAULT_ICON.into(),
            color: DEFAULT_COLOR.into(),
            is_default: false,
            budget: None,
        })
    }

    pub fn is_global(&self) -> bool {
        self.owner_id.is_none()
    }
}

impl Owned for Category {
    fn owner(&self) -> Option<UserId> {
        self.owner_id
    }
}

/// Lowercases, trims, and joins whitespace runs with `-`.
pub fn slugify(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub fn validate_label(label: &str) -> EngineResult<String> {
    let label = label.trim();
    if label.is_empty() {
        return Err(EngineError::InvalidInput("category label is required".into()));
    }
    if label.chars().count() > MAX_LABEL_LEN {
        return Err(EngineError::InvalidInput(format!(
            "label cannot exceed {MAX_LABEL_LEN} characters"
        )));
    }
    Ok(label.to_string())
}

pub fn validate_budget(budget: Decimal) -> EngineResult<Decimal> {
    validate_amount("budget", budget)
}

/// Picks the category a user sees under `key`: their own record wins over a global one.
pub fn find_visible<'a>(categories: &'a [Category], key: &str) -> Option<&'a Category> {
    let mut global = None;
    for category in categories.iter().filter(|c| c.id == key) {
        if category.is_global() {
            global = global.or(Some(category));
        } else {
            return Some(category);
        }
    }
    global
}

/// Collapses a visible set to one record per key, own records shadowing globals.
/// Defaults come first, then by label.
pub fn merge_visible(categories: &[Category]) -> Vec<Category> {
    let mut merged: Vec<Category> = Vec::new();
    for category in categories {
        if merged.iter().any(|seen| seen.id == category.id) {
            continue;
        }
        if let Some(chosen) = find_visible(categories, &category.id) {
            merged.push(chosen.clone());
        }
    }
    merged.sort_by(|a, b| b.is_default.cmp(&a.is_default).then_with(|| a.label.cmp(&b.label)));
    merged
}

/// Maps category keys to display labels for one user.
#[derive(Debug, Clone, Default)]
pub struct CategoryDirectory {
    labels: HashMap<String, String>,
}

impl CategoryDirectory {
    pub fn from_visible(categories: &[Category]) -> Self {
        let mut labels = HashMap::new();
        for category in categories.iter().filter(|c| c.is_global()) {
            labels.insert(category.id.clone(), category.label.clone());
        }
        for category in categories.iter().filter(|c| !c.is_global()) {
            labels.insert(category.id.clone(), category.label.clone());
        }
        Self { labels }
    }

    /// Display label for `key`, or the key itself for unregistered categories.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}
