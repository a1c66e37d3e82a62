use super::TextField;
use crate::domain::vendor_onboarding::view_model::OnboardingWizardVm;
use leptos::prelude::*;

#[component]
pub fn StepName(vm: OnboardingWizardVm) -> impl IntoView {
    let form = vm.form;
    let errors = vm.errors;

    view! {
        <div class="wizard-step">
            <div class="form-group form-group--checkbox">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().use_corporate_info
                        on:change=move |_| {
                            vm.update_form(|f| f.use_corporate_info = !f.use_corporate_info)
                        }
                    />
                    "Use corporate name"
                </label>
            </div>

            <Show when=move || !form.get().use_corporate_info>
                <TextField
                    label="Vendor name"
                    value=Signal::derive(move || form.get().vendor_name)
                    error=Signal::derive(move || {
                        errors.get().get("vendor_name").map(|m| m.to_string())
                    })
                    on_input=Callback::new(move |value: String| {
                        vm.update_form(|f| f.vendor_name = value)
                    })
                />
            </Show>
        </div>
    }
}
