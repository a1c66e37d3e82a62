use crate::shared::route::{query_param, BRANCH_ID_PARAM};
use leptos::prelude::*;

/// Branch management host. With a `branch_id` query parameter the page
/// focuses that branch; otherwise it shows the overview.
#[component]
pub fn BranchesPage() -> impl IntoView {
    let focused = query_param(BRANCH_ID_PARAM);

    view! {
        <div class="page page--branches">
            <h1>"Branches"</h1>
            {match focused {
                Some(branch_id) => view! {
                    <p class="page__subtitle">{format!("Branch {}", branch_id)}</p>
                }
                .into_any(),
                None => view! {
                    <p class="page__subtitle">"All branches"</p>
                }
                .into_any(),
            }}
        </div>
    }
}
