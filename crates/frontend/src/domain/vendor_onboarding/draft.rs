//! Draft persistence for the onboarding form.
//!
//! "Save progress" snapshots every non-file field plus base64-encoded
//! copies of pending file selections under a fixed storage key. The draft
//! pre-populates the form on the next open (when the user has no
//! submitted business details yet) and is cleared only after a successful
//! final submission.

use super::state::{FileRef, OnboardingForm, SelectedFile};
use crate::shared::storage::{KeyValueStore, ONBOARDING_DRAFT_KEY};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use contracts::domain::vendor::{BusinessDetails, PersonalDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub bytes_b64: String,
}

impl DraftFile {
    fn from_selected(file: &SelectedFile) -> Self {
        Self {
            name: file.name.clone(),
            mime: file.mime.clone(),
            size: file.size,
            bytes_b64: BASE64.encode(&file.bytes),
        }
    }

    fn to_selected(&self) -> Option<SelectedFile> {
        let bytes = BASE64.decode(&self.bytes_b64).ok()?;
        Some(SelectedFile {
            name: self.name.clone(),
            mime: self.mime.clone(),
            size: self.size,
            bytes,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct DraftSlot {
    file: Option<DraftFile>,
    remote_key: Option<String>,
}

impl DraftSlot {
    fn from_ref(file_ref: &FileRef) -> Self {
        Self {
            file: file_ref.local.as_ref().map(DraftFile::from_selected),
            remote_key: file_ref.remote_key.clone(),
        }
    }

    fn to_ref(&self) -> FileRef {
        FileRef {
            local: self.file.as_ref().and_then(DraftFile::to_selected),
            remote_key: self.remote_key.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    vendor_name: String,
    use_corporate_info: bool,
    profile_same_as_corporate: bool,
    business_details_same_as_corporate: bool,
    personal: PersonalDetails,
    business: BusinessDetails,
    id_front: DraftSlot,
    id_back: DraftSlot,
    logo: DraftSlot,
    certificate_of_incorporation: DraftSlot,
    business_license: DraftSlot,
    articles_of_incorporation: DraftSlot,
    utility_bill: DraftSlot,
}

impl OnboardingDraft {
    pub fn from_form(form: &OnboardingForm) -> Self {
        Self {
            vendor_name: form.vendor_name.clone(),
            use_corporate_info: form.use_corporate_info,
            profile_same_as_corporate: form.profile_same_as_corporate,
            business_details_same_as_corporate: form.business_details_same_as_corporate,
            personal: form.personal.clone(),
            business: form.business.clone(),
            id_front: DraftSlot::from_ref(&form.id_front),
            id_back: DraftSlot::from_ref(&form.id_back),
            logo: DraftSlot::from_ref(&form.logo),
            certificate_of_incorporation: DraftSlot::from_ref(
                &form.certificate_of_incorporation,
            ),
            business_license: DraftSlot::from_ref(&form.business_license),
            articles_of_incorporation: DraftSlot::from_ref(&form.articles_of_incorporation),
            utility_bill: DraftSlot::from_ref(&form.utility_bill),
        }
    }

    pub fn into_form(self) -> OnboardingForm {
        OnboardingForm {
            vendor_name: self.vendor_name,
            use_corporate_info: self.use_corporate_info,
            profile_same_as_corporate: self.profile_same_as_corporate,
            business_details_same_as_corporate: self.business_details_same_as_corporate,
            personal: self.personal,
            business: self.business,
            id_front: self.id_front.to_ref(),
            id_back: self.id_back.to_ref(),
            logo: self.logo.to_ref(),
            certificate_of_incorporation: self.certificate_of_incorporation.to_ref(),
            business_license: self.business_license.to_ref(),
            articles_of_incorporation: self.articles_of_incorporation.to_ref(),
            utility_bill: self.utility_bill.to_ref(),
        }
    }
}

pub fn save_draft(store: &impl KeyValueStore, form: &OnboardingForm) {
    let draft = OnboardingDraft::from_form(form);
    match serde_json::to_string(&draft) {
        Ok(serialized) => store.set(ONBOARDING_DRAFT_KEY, &serialized),
        Err(e) => log::warn!("Failed to serialize onboarding draft: {}", e),
    }
}

/// Load a previously saved draft. A corrupt draft is treated as absent.
pub fn load_draft(store: &impl KeyValueStore) -> Option<OnboardingForm> {
    let serialized = store.get(ONBOARDING_DRAFT_KEY)?;
    let draft: OnboardingDraft = serde_json::from_str(&serialized).ok()?;
    Some(draft.into_form())
}

pub fn clear_draft(store: &impl KeyValueStore) {
    store.remove(ONBOARDING_DRAFT_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn populated_form() -> OnboardingForm {
        OnboardingForm {
            vendor_name: "Dash Lagos".to_string(),
            profile_same_as_corporate: true,
            personal: PersonalDetails {
                first_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            business: BusinessDetails {
                business_name: "Dash Lagos Ltd".to_string(),
                ..Default::default()
            },
            logo: FileRef {
                local: Some(SelectedFile {
                    name: "logo.png".to_string(),
                    mime: "image/png".to_string(),
                    size: 5,
                    bytes: vec![10, 20, 30, 40, 50],
                }),
                remote_key: None,
            },
            business_license: FileRef {
                local: None,
                remote_key: Some("existing-license".to_string()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_round_trip() {
        let store = MemoryStore::new();
        let form = populated_form();

        save_draft(&store, &form);
        let restored = load_draft(&store).unwrap();

        assert_eq!(restored, form);
        let logo = restored.logo.local.unwrap();
        assert_eq!(logo.name, "logo.png");
        assert_eq!(logo.mime, "image/png");
        assert_eq!(logo.size, 5);
        assert_eq!(logo.bytes, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_load_without_save_is_none() {
        let store = MemoryStore::new();
        assert_eq!(load_draft(&store), None);
    }

    #[test]
    fn test_corrupt_draft_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.set(ONBOARDING_DRAFT_KEY, "{not json");
        assert_eq!(load_draft(&store), None);
    }

    #[test]
    fn test_clear_draft() {
        let store = MemoryStore::new();
        save_draft(&store, &populated_form());
        clear_draft(&store);
        assert_eq!(load_draft(&store), None);
    }
}
