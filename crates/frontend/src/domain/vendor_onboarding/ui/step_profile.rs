use super::{FileField, TextField};
use crate::domain::vendor_onboarding::state::SelectedFile;
use crate::domain::vendor_onboarding::view_model::OnboardingWizardVm;
use contracts::domain::vendor::PersonalDetails;
use leptos::prelude::*;

fn personal_field(
    vm: OnboardingWizardVm,
    label: &'static str,
    field: &'static str,
    read: fn(&PersonalDetails) -> &String,
    write: fn(&mut PersonalDetails, String),
) -> impl IntoView {
    let form = vm.form;
    let errors = vm.errors;
    view! {
        <TextField
            label=label
            value=Signal::derive(move || form.with(|f| read(&f.personal).clone()))
            error=Signal::derive(move || errors.get().get(field).map(|m| m.to_string()))
            on_input=Callback::new(move |value: String| {
                vm.update_form(|f| write(&mut f.personal, value))
            })
        />
    }
}

#[component]
pub fn StepProfile(vm: OnboardingWizardVm) -> impl IntoView {
    let form = vm.form;
    let errors = vm.errors;

    view! {
        <div class="wizard-step">
            <div class="form-group form-group--checkbox">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().profile_same_as_corporate
                        on:change=move |_| {
                            vm.update_form(|f| {
                                f.profile_same_as_corporate = !f.profile_same_as_corporate
                            })
                        }
                    />
                    "Same as corporate profile"
                </label>
            </div>

            {personal_field(vm, "First name", "first_name", |p| &p.first_name, |p, v| p.first_name = v)}
            {personal_field(vm, "Last name", "last_name", |p| &p.last_name, |p, v| p.last_name = v)}
            {personal_field(vm, "Date of birth", "dob", |p| &p.dob, |p, v| p.dob = v)}
            {personal_field(vm, "Street address", "street_address", |p| &p.street_address, |p, v| p.street_address = v)}
            {personal_field(vm, "ID type", "id_type", |p| &p.id_type, |p, v| p.id_type = v)}
            {personal_field(vm, "ID number", "id_number", |p| &p.id_number, |p, v| p.id_number = v)}
            {personal_field(vm, "Phone", "phone", |p| &p.phone, |p, v| p.phone = v)}
            {personal_field(vm, "Email", "email", |p| &p.email, |p, v| p.email = v)}

            // ID images are reused from the corporate record when shared.
            <Show when=move || !form.get().profile_same_as_corporate>
                <FileField
                    label="ID (front)"
                    selected_name=Signal::derive(move || {
                        form.with(|f| f.id_front.local.as_ref().map(|file| file.name.clone()))
                    })
                    error=Signal::derive(move || {
                        errors.get().get("front_id").map(|m| m.to_string())
                    })
                    on_select=Callback::new(move |file: SelectedFile| {
                        vm.update_form(|f| {
                            f.id_front.local = Some(file);
                            f.id_front.remote_key = None;
                        })
                    })
                />
                <FileField
                    label="ID (back, optional)"
                    selected_name=Signal::derive(move || {
                        form.with(|f| f.id_back.local.as_ref().map(|file| file.name.clone()))
                    })
                    error=Signal::derive(move || None::<String>)
                    on_select=Callback::new(move |file: SelectedFile| {
                        vm.update_form(|f| {
                            f.id_back.local = Some(file);
                            f.id_back.remote_key = None;
                        })
                    })
                />
            </Show>
        </div>
    }
}
