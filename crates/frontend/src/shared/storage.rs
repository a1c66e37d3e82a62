//! Key-value persistence port.
//!
//! Resolver and toggle logic depend on this trait instead of touching
//! `window.localStorage` directly, so it stays pure and testable; the
//! browser adapter is swapped for an in-memory map in tests.

use web_sys::window;

/// Persisted profile selection (`vendor` | `corporate`). Written only by an
/// explicit switch action in the navbar.
pub const SELECTED_PROFILE_KEY: &str = "selectedProfile";
/// Persisted sidebar preference (`true` | `false`). Written only by the
/// explicit collapse toggle, never by the viewport override.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";
/// Serialized onboarding draft (business-details form variant).
pub const ONBOARDING_DRAFT_KEY: &str = "vendorOnboardingDraft";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` adapter. All failures degrade to "absent".
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
pub struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(std::collections::HashMap::new()))
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(SELECTED_PROFILE_KEY), None);
        store.set(SELECTED_PROFILE_KEY, "vendor");
        assert_eq!(store.get(SELECTED_PROFILE_KEY), Some("vendor".to_string()));
        store.remove(SELECTED_PROFILE_KEY);
        assert_eq!(store.get(SELECTED_PROFILE_KEY), None);
    }
}
