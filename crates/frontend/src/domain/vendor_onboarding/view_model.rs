//! Wizard orchestrator.
//!
//! Owns the step pointer and the composite form record. Remote work
//! happens only in `submit`: pending uploads go out concurrently
//! (all-or-nothing), then the assembled payload is posted. Success resets
//! the wizard, clears the draft and invalidates the affected cached
//! collections; failure keeps all state for retry.

use super::api;
use super::draft;
use super::machine::{advance, back, validate_step, ValidationErrors};
use super::payload::{assemble_request, collect_pending_uploads};
use super::state::{OnboardingForm, WizardStep};
use crate::shared::query_cache::{keys, QueryCache};
use crate::shared::storage::LocalStorage;
use crate::shared::toast::ToastService;
use contracts::domain::vendor::{CorporateUser, SubmissionError, VendorAccount};
use futures::future::try_join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

enum SubmitFailure {
    Validation(ValidationErrors),
    Remote(SubmissionError),
}

#[derive(Clone, Copy)]
pub struct OnboardingWizardVm {
    pub open: RwSignal<bool>,
    pub step: RwSignal<WizardStep>,
    pub form: RwSignal<OnboardingForm>,
    pub errors: RwSignal<ValidationErrors>,
    pub submitting: RwSignal<bool>,
    pub submit_error: RwSignal<Option<String>>,
    corporate_id: RwSignal<Option<String>>,
}

impl OnboardingWizardVm {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            step: RwSignal::new(WizardStep::Name),
            form: RwSignal::new(OnboardingForm::default()),
            errors: RwSignal::new(ValidationErrors::default()),
            submitting: RwSignal::new(false),
            submit_error: RwSignal::new(None),
            corporate_id: RwSignal::new(None),
        }
    }

    /// Open the wizard. `corporate_id` enables the "same as corporate"
    /// shortcuts; `has_submitted_details` suppresses draft restore once
    /// the account already has business details on file.
    pub fn open_for(&self, corporate_id: Option<String>, has_submitted_details: bool) {
        self.reset();
        if !has_submitted_details {
            if let Some(saved) = draft::load_draft(&LocalStorage) {
                self.form.set(saved);
            }
        }
        self.corporate_id.set(corporate_id);
        self.open.set(true);
    }

    pub fn update_form(&self, apply: impl FnOnce(&mut OnboardingForm)) {
        self.form.update(apply);
    }

    pub fn next(&self) {
        let form = self.form.get_untracked();
        match advance(self.step.get_untracked(), &form) {
            Ok(next_step) => {
                self.errors.set(ValidationErrors::default());
                self.step.set(next_step);
            }
            Err(errors) => self.errors.set(errors),
        }
    }

    pub fn back(&self) {
        if let Some(previous) = back(self.step.get_untracked()) {
            self.errors.set(ValidationErrors::default());
            self.step.set(previous);
        }
    }

    /// Persist a draft of the current state without submitting.
    pub fn save_progress(&self) {
        let form = self.form.get_untracked();
        draft::save_draft(&LocalStorage, &form);
    }

    /// Close and discard working state. The draft survives a cancel; it
    /// is cleared only by a successful submission.
    pub fn cancel(&self) {
        self.reset();
    }

    fn reset(&self) {
        self.open.set(false);
        self.step.set(WizardStep::Name);
        self.form.set(OnboardingForm::default());
        self.errors.set(ValidationErrors::default());
        self.submitting.set(false);
        self.submit_error.set(None);
        self.corporate_id.set(None);
    }

    pub fn submit(&self, cache: QueryCache, toasts: ToastService) {
        if self.submitting.get_untracked() {
            return;
        }

        let form = self.form.get_untracked();
        let errors = validate_step(WizardStep::Details, &form);
        if !errors.is_empty() {
            self.errors.set(errors);
            return;
        }

        self.submitting.set(true);
        self.submit_error.set(None);

        let vm = *self;
        let corporate_id = self.corporate_id.get_untracked();
        spawn_local(async move {
            match run_submission(&form, corporate_id).await {
                Ok(account) => {
                    draft::clear_draft(&LocalStorage);
                    vm.reset();
                    cache.invalidate(&[
                        keys::USER_PROFILE,
                        keys::BRANCHES,
                        keys::CARDS_BY_VENDOR_ID,
                    ]);
                    toasts.success(format!("Vendor \"{}\" created", account.vendor_name));
                }
                Err(SubmitFailure::Validation(errors)) => {
                    vm.errors.set(errors);
                    vm.submitting.set(false);
                }
                Err(SubmitFailure::Remote(error)) => {
                    let message = error.to_string();
                    vm.submit_error.set(Some(message.clone()));
                    toasts.error(message);
                    vm.submitting.set(false);
                }
            }
        });
    }
}

impl Default for OnboardingWizardVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Any section flagged "same as corporate" needs the corporate record,
/// except the fully-shared path, which sends only markers.
fn needs_corporate_record(form: &OnboardingForm) -> bool {
    !form.fully_shared()
        && (form.use_corporate_info
            || form.profile_same_as_corporate
            || form.business_details_same_as_corporate)
}

async fn run_submission(
    form: &OnboardingForm,
    corporate_id: Option<String>,
) -> Result<VendorAccount, SubmitFailure> {
    let corporate: Option<CorporateUser> = if needs_corporate_record(form) {
        let id = corporate_id.ok_or_else(|| {
            SubmitFailure::Remote(SubmissionError {
                status: 0,
                message: Some("No corporate account linked to this user".to_string()),
            })
        })?;
        let record = api::fetch_corporate_user(&id).await.map_err(|e| {
            SubmitFailure::Remote(SubmissionError {
                status: 0,
                message: Some(e),
            })
        })?;
        Some(record)
    } else {
        None
    };

    // Concurrent all-or-nothing upload batch: one failure fails the
    // submission before anything is posted.
    let pending = collect_pending_uploads(form);
    let uploaded = try_join_all(
        pending
            .iter()
            .map(|upload| api::upload_document(upload.doc_type, &upload.file)),
    )
    .await
    .map_err(|e| {
        SubmitFailure::Remote(SubmissionError {
            status: 0,
            message: Some(e),
        })
    })?;

    let request = assemble_request(form, corporate.as_ref(), &uploaded)
        .map_err(SubmitFailure::Validation)?;

    api::create_vendor(&request)
        .await
        .map_err(SubmitFailure::Remote)
}
