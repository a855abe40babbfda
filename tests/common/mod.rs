#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use chrono::{DateTime, TimeZone, Utc};
use expenseflow_core::{
    config::ConfigManager,
    domain::{User, UserId},
    storage::{JsonStore, LedgerWriter},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Reserves a fresh base directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated JSON store and config manager sharing one base directory.
pub fn setup_test_env() -> (Arc<JsonStore>, ConfigManager, PathBuf) {
    let base = temp_base();
    let store = JsonStore::open(Some(base.clone())).expect("open json store");
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (Arc::new(store), config_manager, base)
}

pub fn register_user(store: &JsonStore, name: &str) -> UserId {
    let email = format!("{}@example.com", name.to_lowercase());
    let user = User::new(name, &email).expect("valid user");
    let id = user.id;
    store.insert_user(user).expect("insert user");
    id
}

/// Noon UTC on the given day.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid date")
}
