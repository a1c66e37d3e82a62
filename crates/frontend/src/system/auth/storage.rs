use crate::shared::storage::{KeyValueStore, LocalStorage};

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

pub fn save_access_token(token: &str) {
    LocalStorage.set(ACCESS_TOKEN_KEY, token);
}

pub fn get_access_token() -> Option<String> {
    LocalStorage.get(ACCESS_TOKEN_KEY)
}

pub fn clear_access_token() {
    LocalStorage.remove(ACCESS_TOKEN_KEY);
}
