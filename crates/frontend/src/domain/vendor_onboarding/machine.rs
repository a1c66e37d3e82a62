//! Wizard transition machine.
//!
//! Transitions are a fixed table over (step, event); `Next` is guarded by
//! the current step's validator, `Back` is always permitted. Nothing here
//! performs I/O, so advancing twice from the same state is idempotent.

use super::state::{OnboardingForm, WizardStep};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Back,
}

/// Field-keyed validation errors, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

fn transition(step: WizardStep, event: WizardEvent) -> Option<WizardStep> {
    match (step, event) {
        (WizardStep::Name, WizardEvent::Next) => Some(WizardStep::Profile),
        (WizardStep::Profile, WizardEvent::Next) => Some(WizardStep::Details),
        (WizardStep::Details, WizardEvent::Next) => None,
        (WizardStep::Name, WizardEvent::Back) => None,
        (WizardStep::Profile, WizardEvent::Back) => Some(WizardStep::Name),
        (WizardStep::Details, WizardEvent::Back) => Some(WizardStep::Profile),
    }
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "This field is required");
    }
}

fn validate_name_step(form: &OnboardingForm, errors: &mut ValidationErrors) {
    // The name step auto-passes when the corporate name is reused.
    if !form.use_corporate_info {
        require(errors, "vendor_name", &form.vendor_name);
    }
}

fn validate_profile_step(form: &OnboardingForm, errors: &mut ValidationErrors) {
    let personal = &form.personal;
    require(errors, "first_name", &personal.first_name);
    require(errors, "last_name", &personal.last_name);

    if personal.dob.trim().is_empty() {
        errors.push("dob", "This field is required");
    } else if NaiveDate::parse_from_str(personal.dob.trim(), "%Y-%m-%d").is_err() {
        errors.push("dob", "Enter a date as YYYY-MM-DD");
    }

    require(errors, "street_address", &personal.street_address);
    require(errors, "id_type", &personal.id_type);
    require(errors, "id_number", &personal.id_number);
    require(errors, "phone", &personal.phone);

    if personal.email.trim().is_empty() {
        errors.push("email", "This field is required");
    } else if !personal.email.contains('@') {
        errors.push("email", "Enter a valid email address");
    }

    // Only the front of the ID is mandatory for the supported ID types.
    if !form.profile_same_as_corporate && !form.id_front.is_present() {
        errors.push("front_id", "Upload the front of your ID");
    }
}

fn validate_details_step(form: &OnboardingForm, errors: &mut ValidationErrors) {
    if form.business_details_same_as_corporate {
        return;
    }

    let business = &form.business;
    require(errors, "business_name", &business.business_name);
    require(errors, "business_email", &business.business_email);
    require(errors, "business_phone", &business.business_phone);
    require(errors, "business_address", &business.business_address);
    require(errors, "registration_number", &business.registration_number);

    for (doc_type, file_ref) in form.business_document_refs() {
        if doc_type.is_required() && !file_ref.is_present() {
            errors.push(doc_type.as_str(), "This document is required");
        }
    }
}

/// Validate only the field subset relevant to `step`. Later steps' fields
/// are never touched.
pub fn validate_step(step: WizardStep, form: &OnboardingForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    match step {
        WizardStep::Name => validate_name_step(form, &mut errors),
        WizardStep::Profile => validate_profile_step(form, &mut errors),
        WizardStep::Details => validate_details_step(form, &mut errors),
    }
    errors
}

/// Gate-checked forward transition. On the final step the pointer stays
/// put (submission, not navigation, leaves it).
pub fn advance(step: WizardStep, form: &OnboardingForm) -> Result<WizardStep, ValidationErrors> {
    let errors = validate_step(step, form);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(transition(step, WizardEvent::Next).unwrap_or(step))
}

/// Backward navigation, always permitted without validation.
pub fn back(step: WizardStep) -> Option<WizardStep> {
    transition(step, WizardEvent::Back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor_onboarding::state::{FileRef, SelectedFile};
    use contracts::domain::vendor::PersonalDetails;

    fn valid_personal() -> PersonalDetails {
        PersonalDetails {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            dob: "1990-04-12".to_string(),
            street_address: "12 Harbor Rd".to_string(),
            id_type: "passport".to_string(),
            id_number: "A1234567".to_string(),
            phone: "+2348012345678".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn present_file() -> FileRef {
        FileRef {
            local: Some(SelectedFile {
                name: "front.png".to_string(),
                mime: "image/png".to_string(),
                size: 4,
                bytes: vec![1, 2, 3, 4],
            }),
            remote_key: None,
        }
    }

    #[test]
    fn test_name_step_requires_vendor_name() {
        let form = OnboardingForm::default();
        let result = advance(WizardStep::Name, &form);
        let errors = result.unwrap_err();
        assert!(errors.get("vendor_name").is_some());
    }

    #[test]
    fn test_name_step_auto_passes_with_corporate_name() {
        let form = OnboardingForm {
            use_corporate_info: true,
            ..Default::default()
        };
        assert_eq!(advance(WizardStep::Name, &form), Ok(WizardStep::Profile));
    }

    #[test]
    fn test_profile_step_requires_front_id_unless_shared() {
        let mut form = OnboardingForm {
            personal: valid_personal(),
            ..Default::default()
        };
        let errors = advance(WizardStep::Profile, &form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("front_id").is_some());

        form.profile_same_as_corporate = true;
        assert_eq!(advance(WizardStep::Profile, &form), Ok(WizardStep::Details));

        form.profile_same_as_corporate = false;
        form.id_front = present_file();
        assert_eq!(advance(WizardStep::Profile, &form), Ok(WizardStep::Details));
    }

    #[test]
    fn test_back_id_is_never_required() {
        let form = OnboardingForm {
            personal: valid_personal(),
            id_front: present_file(),
            ..Default::default()
        };
        let result = advance(WizardStep::Profile, &form);
        assert_eq!(result, Ok(WizardStep::Details));
    }

    #[test]
    fn test_profile_step_reports_field_level_errors() {
        let mut personal = valid_personal();
        personal.dob = "12/04/1990".to_string();
        personal.email = "not-an-email".to_string();
        let form = OnboardingForm {
            personal,
            profile_same_as_corporate: true,
            ..Default::default()
        };
        let errors = advance(WizardStep::Profile, &form).unwrap_err();
        assert!(errors.get("dob").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("first_name").is_none());
    }

    #[test]
    fn test_advance_is_idempotent() {
        let form = OnboardingForm {
            use_corporate_info: true,
            ..Default::default()
        };
        let first = advance(WizardStep::Name, &form);
        let second = advance(WizardStep::Name, &form);
        assert_eq!(first, second);
    }

    #[test]
    fn test_advance_validates_only_current_step() {
        // An empty profile section must not block the name step.
        let form = OnboardingForm {
            vendor_name: "Acme Cards".to_string(),
            ..Default::default()
        };
        assert_eq!(advance(WizardStep::Name, &form), Ok(WizardStep::Profile));
    }

    #[test]
    fn test_back_is_always_permitted() {
        assert_eq!(back(WizardStep::Details), Some(WizardStep::Profile));
        assert_eq!(back(WizardStep::Profile), Some(WizardStep::Name));
        assert_eq!(back(WizardStep::Name), None);
    }

    #[test]
    fn test_details_step_gates_required_documents() {
        let form = OnboardingForm {
            business: contracts::domain::vendor::BusinessDetails {
                business_name: "Acme Cards Ltd".to_string(),
                business_email: "ops@acme.example".to_string(),
                business_phone: "+2348000000000".to_string(),
                business_address: "1 Market St".to_string(),
                registration_number: "RC-443310".to_string(),
                country_code: String::new(),
            },
            ..Default::default()
        };
        let errors = validate_step(WizardStep::Details, &form);
        assert!(errors.get("logo").is_some());
        assert!(errors.get("certificate_of_incorporation").is_some());
        assert!(errors.get("business_license").is_some());
        assert!(errors.get("utility_bill").is_some());
        // Articles of incorporation stays optional.
        assert!(errors.get("articles_of_incorporation").is_none());
    }

    #[test]
    fn test_details_step_skipped_when_shared() {
        let form = OnboardingForm {
            business_details_same_as_corporate: true,
            ..Default::default()
        };
        assert!(validate_step(WizardStep::Details, &form).is_empty());
    }
}
