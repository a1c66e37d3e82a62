pub mod api_utils;
pub mod components;
pub mod icons;
pub mod query_cache;
pub mod route;
pub mod storage;
pub mod toast;
