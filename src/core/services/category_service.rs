use rust_decimal::Decimal;

use crate::core::errors::{EngineError, EngineResult};
use crate::domain::category::{find_visible, merge_visible, slugify, validate_budget, validate_label};
use crate::domain::{Category, UserId};
use crate::storage::{LedgerStore, LedgerWriter};

use super::ensure_user;

/// Partial update for a category. `budget: Some(None)` clears the limit.
#[derive(Debug, Clone, Default)]
pub struct CategoryChanges {
    pub label: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub budget: Option<Option<Decimal>>,
}

impl CategoryChanges {
    pub fn budget(budget: Option<Decimal>) -> Self {
        Self {
            budget: Some(budget),
            ..Self::default()
        }
    }

    fn touches_presentation(&self) -> bool {
        self.label.is_some() || self.icon.is_some() || self.color.is_some()
    }
}

pub struct CategoryService;

impl CategoryService {
    /// Categories visible to the user, one per key, defaults first then by label.
    pub fn list<S: LedgerStore + ?Sized>(store: &S, user_id: UserId) -> EngineResult<Vec<Category>> {
        ensure_user(store, user_id)?;
        Ok(merge_visible(&store.fetch_categories(user_id)?))
    }

    /// The category the user sees under `id`, their own record winning over a default.
    pub fn get<S: LedgerStore + ?Sized>(store: &S, user_id: UserId, id: &str) -> EngineResult<Category> {
        ensure_user(store, user_id)?;
        let key = slugify(id);
        let visible = store.fetch_categories(user_id)?;
        find_visible(&visible, &key)
            .cloned()
            .ok_or(EngineError::CategoryNotFound(key))
    }

    pub fn create<S: LedgerWriter + ?Sized>(
        store: &S,
        user_id: UserId,
        id: &str,
        label: &str,
        icon: Option<&str>,
        color: Option<&str>,
    ) -> EngineResult<Category> {
        ensure_user(store, user_id)?;
        let mut category = Category::custom(user_id, id, label)?;
        if let Some(icon) = icon.map(str::trim).filter(|icon| !icon.is_empty()) {
            category.icon = icon.to_string();
        }
        if let Some(color) = color.map(str::trim).filter(|color| !color.is_empty()) {
            category.color = color.to_string();
        }
        let visible = store.fetch_categories(user_id)?;
        if find_visible(&visible, &category.id).is_some() {
            return Err(EngineError::InvalidInput(format!(
                "Category `{}` already exists",
                category.id
            )));
        }
        store.upsert_category(category.clone())?;
        tracing::debug!(user = %user_id, category = %category.id, "category created");
        Ok(category)
    }

    /// Applies `changes` to a visible category.
    ///
    /// Default categories only accept a budget; the budget is stored on a user-owned
    /// copy so other users keep the shared record untouched.
    pub fn update<S: LedgerWriter + ?Sized>(
        store: &S,
        user_id: UserId,
        id: &str,
        changes: CategoryChanges,
    ) -> EngineResult<Category> {
        ensure_user(store, user_id)?;
        let key = slugify(id);
        let visible = store.fetch_categories(user_id)?;
        let current = find_visible(&visible, &key)
            .ok_or_else(|| EngineError::CategoryNotFound(key.clone()))?;

        let mut updated = current.clone();
        if updated.is_default {
            if changes.touches_presentation() {
                return Err(EngineError::InvalidInput(
                    "default categories only accept a budget".into(),
                ));
            }
            updated.owner_id = Some(user_id);
        }
        if let Some(label) = changes.label.as_deref() {
            updated.label = validate_label(label)?;
        }
        if let Some(icon) = changes.icon {
            updated.icon = icon;
        }
        if let Some(color) = changes.color {
            updated.color = color;
        }
        if let Some(budget) = changes.budget {
            updated.budget = budget.map(validate_budget).transpose()?;
        }
        store.upsert_category(updated.clone())?;
        Ok(updated)
    }

    pub fn remove<S: LedgerWriter + ?Sized>(store: &S, user_id: UserId, id: &str) -> EngineResult<()> {
        ensure_user(store, user_id)?;
        let key = slugify(id);
        let visible = store.fetch_categories(user_id)?;
        let current = find_visible(&visible, &key)
            .ok_or_else(|| EngineError::CategoryNotFound(key.clone()))?;
        if current.is_default {
            return Err(EngineError::InvalidInput(
                "Cannot delete default categories".into(),
            ));
        }
        if !store.remove_category(user_id, &key)? {
            return Err(EngineError::CategoryNotFound(key));
        }
        Ok(())
    }
}
