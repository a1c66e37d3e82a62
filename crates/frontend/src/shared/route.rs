//! Structured route/query helpers.
//!
//! Query strings are always handled as parameter maps (parse, merge,
//! re-serialize) rather than spliced strings, so merging a parameter into
//! a path that already carries one cannot duplicate it.
//!
//! Query parameters consumed by the app: `account`, `vendor_id`,
//! `branch_id`, `tab`.

use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

pub const ACCOUNT_PARAM: &str = "account";
pub const VENDOR_ID_PARAM: &str = "vendor_id";
pub const BRANCH_ID_PARAM: &str = "branch_id";
pub const TAB_PARAM: &str = "tab";

/// Parse a query string (with or without the leading '?') into a map.
/// Invalid input degrades to an empty map.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn build_query(params: &BTreeMap<String, String>) -> String {
    serde_qs::to_string(params).unwrap_or_default()
}

/// Split a route into its path component and parsed query parameters.
pub fn split_route(route: &str) -> (String, BTreeMap<String, String>) {
    match route.split_once('?') {
        Some((path, query)) => (path.to_string(), parse_query(query)),
        None => (route.to_string(), BTreeMap::new()),
    }
}

/// Re-assemble a path and parameter map into a route string.
pub fn join_route(path: &str, params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, build_query(params))
    }
}

/// Merge a single parameter into a route, overwriting any existing value
/// for the same key.
pub fn with_query_param(route: &str, key: &str, value: &str) -> String {
    let (path, mut params) = split_route(route);
    params.insert(key.to_string(), value.to_string());
    join_route(&path, &params)
}

/// Current location path ("/dashboard").
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Current location query parameters.
pub fn current_query() -> BTreeMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query(&search)
}

pub fn query_param(key: &str) -> Option<String> {
    current_query().get(key).cloned()
}

/// Replace the browser URL without reloading (history.replaceState).
pub fn replace_url(route: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route));
        }
    }
}

/// Push a new browser URL without reloading (history.pushState).
pub fn push_url(route: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route));
        }
    }
}

/// In-app route state. The path signal is the single source of truth for
/// which page is shown; navigation writes it and mirrors it to the
/// browser URL.
#[derive(Clone, Copy)]
pub struct RouteContext {
    pub path: RwSignal<String>,
}

impl RouteContext {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_path()),
        }
    }

    /// Navigate to a route (path plus optional query). The query part is
    /// pushed to the browser URL; only the path part drives page matching.
    pub fn navigate(&self, route: &str) {
        let (path, _) = split_route(route);
        push_url(route);
        self.path.set(path);
    }
}

pub fn use_route() -> RouteContext {
    use_context::<RouteContext>().expect("RouteContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build_query() {
        let params = parse_query("?account=vendor&tab=payments");
        assert_eq!(params.get("account"), Some(&"vendor".to_string()));
        assert_eq!(params.get("tab"), Some(&"payments".to_string()));
        assert_eq!(build_query(&params), "account=vendor&tab=payments");
    }

    #[test]
    fn test_with_query_param_plain_path() {
        assert_eq!(
            with_query_param("/dashboard", "account", "vendor"),
            "/dashboard?account=vendor"
        );
    }

    #[test]
    fn test_with_query_param_preserves_existing() {
        assert_eq!(
            with_query_param("/branches?branch_id=b-1", "account", "corporate"),
            "/branches?account=corporate&branch_id=b-1"
        );
    }

    #[test]
    fn test_with_query_param_overwrites_instead_of_duplicating() {
        let once = with_query_param("/dashboard", "account", "vendor");
        let twice = with_query_param(&once, "account", "vendor");
        assert_eq!(once, twice);

        let switched = with_query_param(&once, "account", "corporate");
        assert_eq!(switched, "/dashboard?account=corporate");
    }

    #[test]
    fn test_empty_query_is_empty_map() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn test_split_and_join_round_trip() {
        let (path, params) = split_route("/settings?tab=payment-methods&vendor_id=v-9");
        assert_eq!(path, "/settings");
        assert_eq!(
            join_route(&path, &params),
            "/settings?tab=payment-methods&vendor_id=v-9"
        );
    }
}
