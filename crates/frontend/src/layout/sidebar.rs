use super::menu::derive_navigation_model;
use super::sidebar_state::{effective_mode, initial_mode, SidebarMode};
use crate::shared::icons::icon;
use crate::shared::route::use_route;
use crate::shared::storage::{KeyValueStore, LocalStorage, SIDEBAR_COLLAPSED_KEY};
use crate::system::auth::context::use_session;
use crate::system::profile::{decorate_route, use_profile};
use leptos::prelude::*;

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn persisted_collapse() -> Option<bool> {
    LocalStorage
        .get(SIDEBAR_COLLAPSED_KEY)
        .and_then(|v| v.parse::<bool>().ok())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (session, _) = use_session();
    let profile = use_profile();
    let route = use_route();

    let chosen_mode = RwSignal::new(initial_mode(viewport_width(), persisted_collapse()));
    let width = RwSignal::new(viewport_width());

    let resize_handle =
        window_event_listener(leptos::ev::resize, move |_| width.set(viewport_width()));
    on_cleanup(move || resize_handle.remove());

    let collapsed = move || effective_mode(chosen_mode.get(), width.get()).is_collapsed();

    let toggle = move |_| {
        let next = chosen_mode.get_untracked().toggled();
        chosen_mode.set(next);
        // Only the explicit toggle writes the preference.
        LocalStorage.set(
            SIDEBAR_COLLAPSED_KEY,
            if next == SidebarMode::Collapsed { "true" } else { "false" },
        );
    };

    let model = move || {
        let state = session.get();
        let identity = state.identity?;
        let active = profile.active.get().map(|p| p.kind);
        Some(derive_navigation_model(
            active,
            identity.user_type,
            identity.status,
            &route.path.get(),
        ))
    };

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=collapsed>
            <div class="app-sidebar__toggle" on:click=toggle>
                {move || icon(if collapsed() { "chevron-right" } else { "chevron-left" })}
            </div>
            {move || {
                model()
                    .map(|model| {
                        let active = profile.active.get();
                        model
                            .sections
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <div class="app-sidebar__section">
                                        <Show when=move || !collapsed()>
                                            <div class="app-sidebar__section-title">
                                                {section.title}
                                            </div>
                                        </Show>
                                        {section
                                            .items
                                            .into_iter()
                                            .map(|nav_item| {
                                                let href =
                                                    decorate_route(nav_item.path, active.as_ref());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=nav_item.is_active
                                                        on:click=move |_| route.navigate(&href)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(nav_item.icon)}
                                                            <Show when=move || !collapsed()>
                                                                <span>{nav_item.label}</span>
                                                            </Show>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </aside>
    }
}
