pub mod menu;
pub mod navbar;
pub mod sidebar;
pub mod sidebar_state;

use leptos::prelude::*;
use navbar::Navbar;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Navbar />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {content()}
                </main>
            </div>
        </div>
    }
}
