use std::sync::{Mutex, MutexGuard, OnceLock};

use tempfile::TempDir;

pub fn test_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Serializes environment mutation across tests and restores every touched
/// variable on drop.
pub struct TestEnvGuard {
    _lock: MutexGuard<'static, ()>,
    previous: Vec<(String, Option<String>)>,
}

impl TestEnvGuard {
    pub fn new() -> Self {
        let lock = test_lock().lock().unwrap_or_else(|err| err.into_inner());
        Self {
            _lock: lock,
            previous: Vec::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: impl AsRef<str>) -> &mut Self {
        self.remember(key);
        // SAFETY: tests using TestEnvGuard are serialized by test_lock.
        unsafe {
            std::env::set_var(key, value.as_ref());
        }
        self
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.remember(key);
        // SAFETY: tests using TestEnvGuard are serialized by test_lock.
        unsafe {
            std::env::remove_var(key);
        }
        self
    }

    fn remember(&mut self, key: &str) {
        if self.previous.iter().any(|(existing, _)| existing == key) {
            return;
        }
        self.previous
            .push((key.to_string(), std::env::var(key).ok()));
    }
}

impl Default for TestEnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestEnvGuard {
    fn drop(&mut self) {
        // SAFETY: tests using TestEnvGuard are serialized by test_lock.
        unsafe {
            for (key, value) in self.previous.drain(..) {
                match value {
                    Some(value) => std::env::set_var(&key, value),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
}

/// A sqlite file inside a temp dir that lives as long as the returned guard.
pub struct TempSqlite {
    _dir: TempDir,
    pub url: String,
}

pub fn temp_sqlite() -> TempSqlite {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("db.sqlite");
    let url = format!("sqlite://{}?mode=rwc", path.to_string_lossy());
    TempSqlite { _dir: dir, url }
}
