use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use contracts::system::uploads::PresignedUrlResponse;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_display_url(file_key: &str) -> Result<String, String> {
    let url = format!(
        "{}/api/uploads/presign?file_key={}",
        api_base(),
        urlencoding::encode(file_key)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Presign failed: {}", response.status()));
    }

    response
        .json::<PresignedUrlResponse>()
        .await
        .map(|r| r.url)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Avatar/logo image resolved from a storage key via a presigned URL.
///
/// The fetch effect is guarded by a generation counter: if the key changes
/// again before the fetch resolves, the stale result is dropped instead of
/// overwriting the newer one. Fetch failures degrade to the placeholder
/// glyph, never to a user-facing error.
#[component]
pub fn Avatar(#[prop(into)] file_key: Signal<Option<String>>) -> impl IntoView {
    let (display_url, set_display_url) = signal(Option::<String>::None);
    let generation = RwSignal::new(0u32);

    Effect::new(move |_| {
        let key = file_key.get();
        let current = generation.get_untracked() + 1;
        generation.set(current);

        match key {
            None => set_display_url.set(None),
            Some(key) => {
                spawn_local(async move {
                    match fetch_display_url(&key).await {
                        Ok(url) => {
                            // A newer key superseded this fetch; drop the result.
                            if generation.get_untracked() == current {
                                set_display_url.set(Some(url));
                            }
                        }
                        Err(e) => {
                            leptos::logging::log!("Avatar presign failed: {}", e);
                            if generation.get_untracked() == current {
                                set_display_url.set(None);
                            }
                        }
                    }
                });
            }
        }
    });

    view! {
        <div class="avatar">
            {move || match display_url.get() {
                Some(url) => view! { <img class="avatar__image" src=url alt="avatar" /> }.into_any(),
                None => icon("user"),
            }}
        </div>
    }
}
