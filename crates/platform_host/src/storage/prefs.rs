//! Key/value preference storage used for small, durable user settings.
//!
//! Values are stored as bare text per key.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future returned by [`PrefsStore`] methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values.
pub trait PrefsStore {
    /// Loads the raw stored text for `key`, or `None` when the key is absent.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores `raw` under `key`, replacing any previous value.
    fn save_pref<'a>(&'a self, key: &'a str, raw: &'a str)
        -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key`. Removing an absent key succeeds.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that never holds anything. Used on targets without browser storage.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Shared in-memory store. Clones observe the same map.
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw value currently held for `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries
                .borrow_mut()
                .insert(key.to_owned(), raw.to_owned());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries.borrow_mut().remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryPrefsStore::default();
        let clone = store.clone();

        block_on(store.save_pref("k", "v")).expect("save");
        assert_eq!(clone.raw("k"), Some("v".to_string()));

        block_on(clone.delete_pref("k")).expect("delete");
        assert_eq!(block_on(store.load_pref("k")).expect("load"), None);
    }

    #[test]
    fn noop_store_is_always_empty() {
        let store = NoopPrefsStore;
        block_on(store.save_pref("k", "v")).expect("save");
        assert_eq!(block_on(store.load_pref("k")).expect("load"), None);
        block_on(store.delete_pref("k")).expect("delete");
    }
}
