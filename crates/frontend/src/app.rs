use crate::app_shell::AppShell;
use crate::shared::query_cache::QueryCache;
use crate::shared::route::RouteContext;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::SessionProvider;
use crate::system::profile::ProfileContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(RouteContext::new());
    provide_context(QueryCache::new());
    provide_context(ToastService::new());
    provide_context(ProfileContext::new());

    view! {
        <SessionProvider>
            <AppShell />
            <ToastHost />
        </SessionProvider>
    }
}
