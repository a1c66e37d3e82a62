pub mod step_details;
pub mod step_name;
pub mod step_profile;
pub mod wizard;

use super::state::SelectedFile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Read a picked file into memory.
async fn read_file(file: web_sys::File) -> Result<SelectedFile, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    Ok(SelectedFile {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
        bytes,
    })
}

fn file_from_event(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev
        .target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

/// Labeled file input bound to a document slot.
#[component]
pub fn FileField(
    label: &'static str,
    #[prop(into)] selected_name: Signal<Option<String>>,
    #[prop(into)] error: Signal<Option<String>>,
    on_select: Callback<SelectedFile>,
) -> impl IntoView {
    let handle_change = move |ev: web_sys::Event| {
        if let Some(file) = file_from_event(&ev) {
            spawn_local(async move {
                match read_file(file).await {
                    Ok(selected) => on_select.run(selected),
                    Err(e) => leptos::logging::log!("File read failed: {}", e),
                }
            });
        }
    };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <input type="file" on:change=handle_change />
            <Show when=move || selected_name.get().is_some()>
                <span class="file-field__name">
                    {move || selected_name.get().unwrap_or_default()}
                </span>
            </Show>
            <Show when=move || error.get().is_some()>
                <span class="field-error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

/// Labeled text input bound through the wizard form record.
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="field-error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
