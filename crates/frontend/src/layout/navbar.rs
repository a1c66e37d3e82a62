use crate::shared::components::avatar::Avatar;
use crate::system::auth::context::{do_logout, use_session};
use crate::system::profile::{use_profile, ProfileKind};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let (session, set_session) = use_session();
    let profile = use_profile();

    let identity = move || session.get().identity;
    let avatar_key = Signal::derive(move || identity().and_then(|i| i.avatar_key));

    // The switcher is rendered only for account kinds that own both
    // contexts; everyone else has a fixed context and no switch UI.
    let switchable = move || {
        identity()
            .map(|i| i.user_type.is_switchable())
            .unwrap_or(false)
    };

    let switch_to = move |kind: ProfileKind| {
        if let Some(identity) = identity() {
            profile.switch(identity.user_type, kind);
        }
    };

    view! {
        <header class="app-navbar">
            <div class="app-navbar__brand">"DashCards"</div>

            <Show when=switchable>
                <div class="app-navbar__switcher">
                    {[ProfileKind::Vendor, ProfileKind::Corporate]
                        .into_iter()
                        .map(|kind| {
                            let is_current = move || {
                                profile.active.get().map(|p| p.kind) == Some(kind)
                            };
                            let label = match kind {
                                ProfileKind::Vendor => "Vendor",
                                ProfileKind::Corporate => "Corporate",
                            };
                            view! {
                                <Button
                                    appearance=Signal::derive(move || {
                                        if is_current() {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        }
                                    })
                                    on_click=move |_| switch_to(kind)
                                >
                                    {label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <div class="app-navbar__identity">
                <Avatar file_key=avatar_key />
                <span class="app-navbar__name">
                    {move || identity().map(|i| i.display_name).unwrap_or_default()}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| do_logout(set_session)
                >
                    "Sign out"
                </Button>
            </div>
        </header>
    }
}
