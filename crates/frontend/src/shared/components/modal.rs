use leptos::prelude::*;

/// Modal overlay. Clicking the backdrop closes via `on_close`; clicks
/// inside the content box do not propagate.
#[component]
pub fn Modal(
    open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="modal-overlay"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="modal-content"
                    on:click=|e| e.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
