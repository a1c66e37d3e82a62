use crate::shared::route::{query_param, use_route, with_query_param, TAB_PARAM};
use leptos::prelude::*;

const TABS: &[(&str, &str)] = &[
    ("general", "General"),
    ("payment-methods", "Payment Methods"),
    ("notifications", "Notifications"),
];

/// Settings host. The active sub-view follows the `tab` query parameter,
/// so a deep link lands on the right tab.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let route = use_route();
    let active_tab = RwSignal::new(
        query_param(TAB_PARAM).unwrap_or_else(|| "general".to_string()),
    );

    let select = move |tab: &'static str| {
        active_tab.set(tab.to_string());
        route.navigate(&with_query_param("/settings", TAB_PARAM, tab));
    };

    view! {
        <div class="page page--settings">
            <h1>"Settings"</h1>
            <div class="tabs">
                {TABS
                    .iter()
                    .map(|(key, label)| {
                        let key = *key;
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || active_tab.get() == key
                                on:click=move |_| select(key)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="tabs__body">
                {move || match active_tab.get().as_str() {
                    "payment-methods" => "Manage your payout and billing methods.",
                    "notifications" => "Choose what we notify you about.",
                    _ => "Account-wide preferences.",
                }}
            </div>
        </div>
    }
}
