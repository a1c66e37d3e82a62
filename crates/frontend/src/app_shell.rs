//! Application shell: auth gate plus the main layout.

use crate::layout::Shell;
use crate::pages::ContentHost;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use crate::system::profile::use_profile;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let (session, _) = use_session();
    let profile = use_profile();

    // Re-resolve the active profile whenever the identity changes; the
    // resolver also reads the URL parameter and the stored preference.
    Effect::new(move |_| {
        if let Some(identity) = session.get().identity {
            profile.resolve_for(identity.user_type);
        }
    });

    view! {
        <Shell content=|| view! { <ContentHost /> }.into_any() />
    }
}

/// Auth gate: login page for anonymous visitors, the shell otherwise.
#[component]
pub fn AppShell() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
