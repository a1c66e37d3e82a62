//! Generation-counter query cache.
//!
//! Remote collections are cached per string key; mutations bump the key's
//! generation, and any reader subscribed to that generation re-fetches.
//! Stale role/status data must not survive a mutation, so invalidation is
//! a correctness requirement here, not an optimization.

use leptos::prelude::*;
use std::collections::HashMap;

pub mod keys {
    pub const BRANCHES: &str = "branches";
    pub const USER_PROFILE: &str = "user-profile";
    pub const CARDS_BY_VENDOR_ID: &str = "cards-by-vendor-id";
    pub const REQUESTS: &str = "requests";
    pub const REDEMPTIONS: &str = "redemptions";
}

#[derive(Clone, Copy)]
pub struct QueryCache {
    generations: RwSignal<HashMap<String, u32>>,
}

fn bump_generations(map: &mut HashMap<String, u32>, cache_keys: &[&str]) {
    for key in cache_keys {
        *map.entry(key.to_string()).or_insert(0) += 1;
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            generations: RwSignal::new(HashMap::new()),
        }
    }

    /// Reactive read: a fetch effect that calls this re-runs whenever the
    /// key is invalidated.
    pub fn generation(&self, key: &str) -> u32 {
        self.generations
            .with(|map| map.get(key).copied().unwrap_or(0))
    }

    pub fn invalidate(&self, cache_keys: &[&str]) {
        self.generations.update(|map| bump_generations(map, cache_keys));
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_starts_from_zero() {
        let mut map = HashMap::new();
        bump_generations(&mut map, &[keys::BRANCHES]);
        assert_eq!(map.get(keys::BRANCHES), Some(&1));
    }

    #[test]
    fn test_bump_touches_only_named_keys() {
        let mut map = HashMap::new();
        bump_generations(&mut map, &[keys::USER_PROFILE, keys::CARDS_BY_VENDOR_ID]);
        bump_generations(&mut map, &[keys::USER_PROFILE]);
        assert_eq!(map.get(keys::USER_PROFILE), Some(&2));
        assert_eq!(map.get(keys::CARDS_BY_VENDOR_ID), Some(&1));
        assert_eq!(map.get(keys::BRANCHES), None);
    }
}
