use crate::shared::api_utils::api_base;
use crate::shared::query_cache::{keys, use_query_cache};
use crate::shared::route::{query_param, VENDOR_ID_PARAM};
use crate::system::auth::context::use_session;
use contracts::domain::cards::GiftCardProduct;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_cards_by_vendor(vendor_id: &str) -> Result<Vec<GiftCardProduct>, String> {
    let url = format!(
        "{}/api/vendors/{}/cards",
        api_base(),
        urlencoding::encode(vendor_id)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Cards fetch failed: {}", response.status()));
    }

    response
        .json::<Vec<GiftCardProduct>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn format_price(price_cents: i64) -> String {
    format!("${}.{:02}", price_cents / 100, price_cents % 100)
}

#[component]
pub fn CardsPage() -> impl IntoView {
    let (session, _) = use_session();
    let cache = use_query_cache();

    let (cards, set_cards) = signal(Vec::<GiftCardProduct>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        // Re-fetch whenever this collection is invalidated.
        let _generation = cache.generation(keys::CARDS_BY_VENDOR_ID);

        let vendor_id = query_param(VENDOR_ID_PARAM)
            .or_else(|| session.get().identity.map(|i| i.id));
        let Some(vendor_id) = vendor_id else {
            return;
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_cards_by_vendor(&vendor_id).await {
                Ok(list) => {
                    set_cards.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="page page--cards">
            <h1>"Cards"</h1>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || is_loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="card-grid">
                <For
                    each=move || cards.get()
                    key=|card| card.id.clone()
                    children=move |card: GiftCardProduct| {
                        view! {
                            <div class="card-tile">
                                <span class="card-tile__kind">{card.kind.display_name()}</span>
                                <span class="card-tile__label">{card.label.clone()}</span>
                                <span class="card-tile__price">
                                    {format_price(card.price_cents)}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2500), "$25.00");
        assert_eq!(format_price(1999), "$19.99");
        assert_eq!(format_price(5), "$0.05");
    }
}
