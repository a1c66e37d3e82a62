use crate::domain::vendor_onboarding::ui::wizard::OnboardingWizard;
use crate::domain::vendor_onboarding::view_model::OnboardingWizardVm;
use crate::system::auth::context::use_session;
use crate::system::profile::use_profile;
use contracts::system::auth::UserType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (session, _) = use_session();
    let profile = use_profile();
    let wizard = OnboardingWizardVm::new();

    let identity = move || session.get().identity;

    let greeting = move || {
        identity()
            .map(|i| format!("Welcome back, {}", i.display_name))
            .unwrap_or_default()
    };

    let context_label = move || {
        let identity = identity();
        match identity.map(|i| i.user_type) {
            Some(UserType::Branch) => "Branch manager".to_string(),
            _ => match profile.active.get() {
                Some(active) => format!("Operating as {}", active.kind.as_str()),
                None => String::new(),
            },
        }
    };

    // Vendor creation is a corporate-side feature.
    let can_create_vendor = move || {
        matches!(
            identity().map(|i| i.user_type),
            Some(
                UserType::Corporate
                    | UserType::CorporateVendor
                    | UserType::CorporateAdmin
                    | UserType::CorporateSuperAdmin
            )
        )
    };

    let open_wizard = move |_| {
        if let Some(identity) = identity() {
            wizard.open_for(Some(identity.id), false);
        }
    };

    view! {
        <div class="page page--dashboard">
            <h1>{greeting}</h1>
            <p class="page__subtitle">{context_label}</p>

            <Show when=can_create_vendor>
                <Button appearance=ButtonAppearance::Primary on_click=open_wizard>
                    "Create vendor account"
                </Button>
            </Show>

            <OnboardingWizard vm=wizard />
        </div>
    }
}
