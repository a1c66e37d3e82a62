use super::{FileField, TextField};
use crate::domain::vendor_onboarding::state::SelectedFile;
use crate::domain::vendor_onboarding::view_model::OnboardingWizardVm;
use contracts::domain::vendor::{BusinessDetails, DocumentType};
use leptos::prelude::*;

fn business_field(
    vm: OnboardingWizardVm,
    label: &'static str,
    field: &'static str,
    read: fn(&BusinessDetails) -> &String,
    write: fn(&mut BusinessDetails, String),
) -> impl IntoView {
    let form = vm.form;
    let errors = vm.errors;
    view! {
        <TextField
            label=label
            value=Signal::derive(move || form.with(|f| read(&f.business).clone()))
            error=Signal::derive(move || errors.get().get(field).map(|m| m.to_string()))
            on_input=Callback::new(move |value: String| {
                vm.update_form(|f| write(&mut f.business, value))
            })
        />
    }
}

fn document_field(
    vm: OnboardingWizardVm,
    label: &'static str,
    doc_type: DocumentType,
) -> impl IntoView {
    let form = vm.form;
    let errors = vm.errors;
    view! {
        <FileField
            label=label
            selected_name=Signal::derive(move || {
                form.with(|f| {
                    f.business_document_refs()
                        .iter()
                        .find(|(t, _)| *t == doc_type)
                        .and_then(|(_, r)| r.local.as_ref().map(|file| file.name.clone()))
                })
            })
            error=Signal::derive(move || {
                errors.get().get(doc_type.as_str()).map(|m| m.to_string())
            })
            on_select=Callback::new(move |file: SelectedFile| {
                vm.update_form(|f| {
                    if let Some(slot) = f.business_document_ref_mut(doc_type) {
                        slot.local = Some(file);
                        slot.remote_key = None;
                    }
                })
            })
        />
    }
}

#[component]
pub fn StepDetails(vm: OnboardingWizardVm) -> impl IntoView {
    let form = vm.form;

    view! {
        <div class="wizard-step">
            <div class="form-group form-group--checkbox">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().business_details_same_as_corporate
                        on:change=move |_| {
                            vm.update_form(|f| {
                                f.business_details_same_as_corporate =
                                    !f.business_details_same_as_corporate
                            })
                        }
                    />
                    "Same as corporate business details"
                </label>
            </div>

            <Show when=move || !form.get().business_details_same_as_corporate>
                {business_field(vm, "Business name", "business_name", |b| &b.business_name, |b, v| b.business_name = v)}
                {business_field(vm, "Business email", "business_email", |b| &b.business_email, |b, v| b.business_email = v)}
                {business_field(vm, "Business phone", "business_phone", |b| &b.business_phone, |b, v| b.business_phone = v)}
                {business_field(vm, "Business address", "business_address", |b| &b.business_address, |b, v| b.business_address = v)}
                {business_field(vm, "Registration number", "registration_number", |b| &b.registration_number, |b, v| b.registration_number = v)}

                {document_field(vm, "Logo", DocumentType::Logo)}
                {document_field(vm, "Certificate of incorporation", DocumentType::CertificateOfIncorporation)}
                {document_field(vm, "Business license", DocumentType::BusinessLicense)}
                {document_field(vm, "Articles of incorporation (optional)", DocumentType::ArticlesOfIncorporation)}
                {document_field(vm, "Utility bill", DocumentType::UtilityBill)}
            </Show>
        </div>
    }
}
