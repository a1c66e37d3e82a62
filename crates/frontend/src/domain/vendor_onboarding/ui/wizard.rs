use super::step_details::StepDetails;
use super::step_name::StepName;
use super::step_profile::StepProfile;
use crate::domain::vendor_onboarding::state::WizardStep;
use crate::domain::vendor_onboarding::view_model::OnboardingWizardVm;
use crate::shared::components::modal::Modal;
use crate::shared::query_cache::use_query_cache;
use crate::shared::toast::use_toasts;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OnboardingWizard(vm: OnboardingWizardVm) -> impl IntoView {
    let cache = use_query_cache();
    let toasts = use_toasts();

    let step = vm.step;
    let on_last_step = move || step.get() == WizardStep::Details;

    view! {
        <Modal
            open=Signal::derive(move || vm.open.get())
            on_close=Callback::new(move |_| vm.cancel())
        >
            <div class="wizard">
                <div class="wizard__header">
                    <h2>"Create vendor account"</h2>
                    <div class="wizard__steps">
                        {[WizardStep::Name, WizardStep::Profile, WizardStep::Details]
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <span
                                        class="wizard__step-label"
                                        class:wizard__step-label--current=move || step.get() == s
                                    >
                                        {s.title()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Show when=move || vm.submit_error.get().is_some()>
                    <div class="error-message">
                        {move || vm.submit_error.get().unwrap_or_default()}
                    </div>
                </Show>

                {move || match step.get() {
                    WizardStep::Name => view! { <StepName vm=vm /> }.into_any(),
                    WizardStep::Profile => view! { <StepProfile vm=vm /> }.into_any(),
                    WizardStep::Details => view! { <StepDetails vm=vm /> }.into_any(),
                }}

                <div class="wizard__footer">
                    <Show when=move || step.get() != WizardStep::Name>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.back()
                        >
                            "Back"
                        </Button>
                    </Show>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.save_progress()
                    >
                        "Save progress"
                    </Button>

                    <Show
                        when=on_last_step
                        fallback=move || {
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| vm.next()
                                >
                                    "Next"
                                </Button>
                            }
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.submitting.get())
                            on_click=move |_| vm.submit(cache, toasts)
                        >
                            {move || if vm.submitting.get() { "Submitting..." } else { "Submit" }}
                        </Button>
                    </Show>
                </div>
            </div>
        </Modal>
    }
}
