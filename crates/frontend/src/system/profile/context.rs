use super::resolver::{resolve_active_profile, ActiveProfile, ProfileKind};
use crate::shared::route::{self, ACCOUNT_PARAM};
use crate::shared::storage::{KeyValueStore, LocalStorage, SELECTED_PROFILE_KEY};
use contracts::system::auth::UserType;
use leptos::prelude::*;

/// Reactive holder of the resolved profile for the signed-in account.
///
/// Recomputed from the URL/storage/user-type sources whenever the
/// identity changes; the persisted copy and the URL `account` parameter
/// are written only by [`ProfileContext::switch`].
#[derive(Clone, Copy)]
pub struct ProfileContext {
    pub active: RwSignal<Option<ActiveProfile>>,
}

impl ProfileContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    /// Re-resolve for the given account kind from live URL and storage.
    pub fn resolve_for(&self, user_type: UserType) {
        let url_param = route::query_param(ACCOUNT_PARAM);
        let persisted = LocalStorage.get(SELECTED_PROFILE_KEY);
        self.active.set(resolve_active_profile(
            user_type,
            url_param.as_deref(),
            persisted.as_deref(),
        ));
    }

    /// Explicit user switch: persist the choice, mirror it into the URL,
    /// and update the resolved profile.
    pub fn switch(&self, user_type: UserType, kind: ProfileKind) {
        if !user_type.is_switchable() {
            return;
        }
        LocalStorage.set(SELECTED_PROFILE_KEY, kind.as_str());
        let mut params = route::current_query();
        params.insert(ACCOUNT_PARAM.to_string(), kind.as_str().to_string());
        route::replace_url(&route::join_route(&route::current_path(), &params));
        self.resolve_for(user_type);
    }
}

impl Default for ProfileContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_profile() -> ProfileContext {
    use_context::<ProfileContext>().expect("ProfileContext not found in component tree")
}
