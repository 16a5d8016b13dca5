//! Per-key mutual exclusion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

/// A table of locks, one per page key.
///
/// Updates to the same key serialize on that key's lock; updates to
/// different keys never share a lock. Entries are held weakly and pruned
/// once no caller holds them, so the table only grows with the number of
/// keys being updated concurrently.
///
/// # Examples
///
/// ```
/// use folio::store::KeyLocks;
///
/// let locks = KeyLocks::new();
/// let value = locks.with_lock("index", || 42);
/// assert_eq!(value, 42);
/// ```
#[derive(Debug, Default)]
pub struct KeyLocks {
    table: Mutex<HashMap<String, Weak<Mutex<()>>>>,
}

impl KeyLocks {
    /// Create an empty lock table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `key`.
    ///
    /// A panic inside a previous holder does not poison the key: the
    /// protected state lives in storage, not behind the mutex.
    pub fn with_lock<T>(&self, key: &str, f: impl FnOnce() -> T) -> T {
        let lock = self.handle(key);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }

    /// Number of keys currently held by at least one caller.
    #[must_use]
    pub fn active(&self) -> usize {
        let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.values().filter(|w| w.strong_count() > 0).count()
    }

    fn handle(&self, key: &str) -> Arc<Mutex<()>> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = table.get(key).and_then(Weak::upgrade) {
            return existing;
        }

        table.retain(|_, w| w.strong_count() > 0);
        let lock = Arc::new(Mutex::new(()));
        table.insert(key.to_string(), Arc::downgrade(&lock));
        lock
    }
}
