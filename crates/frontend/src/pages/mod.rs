pub mod branches;
pub mod cards;
pub mod dashboard;
pub mod settings;

use branches::BranchesPage;
use cards::CardsPage;
use dashboard::DashboardPage;
use leptos::prelude::*;
use settings::SettingsPage;

use crate::shared::route::use_route;

/// Thin path-to-page mapping. Most pages are plain hosts; the dashboard
/// wires up the onboarding wizard.
#[component]
pub fn ContentHost() -> impl IntoView {
    let route = use_route();

    view! {
        {move || {
            let path = route.path.get();
            match path.as_str() {
                "/" | "/dashboard" => view! { <DashboardPage /> }.into_any(),
                "/vendors" => placeholder("Browse Vendors"),
                "/my-cards" => placeholder("My Cards"),
                "/cards" => view! { <CardsPage /> }.into_any(),
                "/recipients" => placeholder("Recipients"),
                "/redemptions" => placeholder("Redemptions"),
                "/my-experience" => placeholder("My Experience"),
                "/branches" => view! { <BranchesPage /> }.into_any(),
                "/payment-methods" => placeholder("Payment Methods"),
                "/purchase" => placeholder("Purchase"),
                "/requests" => placeholder("Requests"),
                "/admins" => placeholder("Admins"),
                "/notifications" => placeholder("Notifications"),
                "/settings" => view! { <SettingsPage /> }.into_any(),
                "/contact" => placeholder("Contact"),
                _ => placeholder("Not found"),
            }
        }}
    }
}

fn placeholder(title: &'static str) -> AnyView {
    view! {
        <div class="page">
            <h1>{title}</h1>
        </div>
    }
    .into_any()
}
