//! Working state of the vendor-onboarding wizard.
//!
//! One composite record accumulates fields from all steps; it exists from
//! modal open until close, cancel, or successful submission.

use contracts::domain::vendor::{BusinessDetails, DocumentType, PersonalDetails};

/// Wizard steps in strict linear order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Name,
    Profile,
    Details,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Name => "Vendor name",
            WizardStep::Profile => "Identity",
            WizardStep::Details => "Business details",
        }
    }
}

/// A file the user picked, read into memory at selection time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

/// A document slot: a local selection awaiting upload, a key already in
/// remote storage, or both (selection re-uploaded over an older key).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileRef {
    pub local: Option<SelectedFile>,
    pub remote_key: Option<String>,
}

impl FileRef {
    pub fn is_present(&self) -> bool {
        self.local.is_some() || self.remote_key.is_some()
    }

    /// A local selection that has not been uploaded yet.
    pub fn pending(&self) -> Option<&SelectedFile> {
        match (&self.local, &self.remote_key) {
            (Some(file), None) => Some(file),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingForm {
    pub vendor_name: String,
    pub use_corporate_info: bool,
    pub profile_same_as_corporate: bool,
    pub business_details_same_as_corporate: bool,

    pub personal: PersonalDetails,
    pub id_front: FileRef,
    pub id_back: FileRef,

    pub business: BusinessDetails,
    pub logo: FileRef,
    pub certificate_of_incorporation: FileRef,
    pub business_license: FileRef,
    pub articles_of_incorporation: FileRef,
    pub utility_bill: FileRef,
}

impl OnboardingForm {
    /// All three section flags set: the fully-shared submission path.
    pub fn fully_shared(&self) -> bool {
        self.use_corporate_info
            && self.profile_same_as_corporate
            && self.business_details_same_as_corporate
    }

    pub fn business_document_refs(&self) -> [(DocumentType, &FileRef); 5] {
        [
            (DocumentType::Logo, &self.logo),
            (
                DocumentType::CertificateOfIncorporation,
                &self.certificate_of_incorporation,
            ),
            (DocumentType::BusinessLicense, &self.business_license),
            (
                DocumentType::ArticlesOfIncorporation,
                &self.articles_of_incorporation,
            ),
            (DocumentType::UtilityBill, &self.utility_bill),
        ]
    }

    pub fn business_document_ref_mut(&mut self, doc_type: DocumentType) -> Option<&mut FileRef> {
        match doc_type {
            DocumentType::Logo => Some(&mut self.logo),
            DocumentType::CertificateOfIncorporation => {
                Some(&mut self.certificate_of_incorporation)
            }
            DocumentType::BusinessLicense => Some(&mut self.business_license),
            DocumentType::ArticlesOfIncorporation => Some(&mut self.articles_of_incorporation),
            DocumentType::UtilityBill => Some(&mut self.utility_bill),
            DocumentType::IdFront | DocumentType::IdBack => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_ref_presence() {
        assert!(!FileRef::default().is_present());

        let local_only = FileRef {
            local: Some(SelectedFile::default()),
            remote_key: None,
        };
        assert!(local_only.is_present());
        assert!(local_only.pending().is_some());

        let uploaded = FileRef {
            local: Some(SelectedFile::default()),
            remote_key: Some("key-1".to_string()),
        };
        assert!(uploaded.is_present());
        assert!(uploaded.pending().is_none(), "uploaded refs are not pending");
    }

    #[test]
    fn test_fully_shared_requires_all_three_flags() {
        let mut form = OnboardingForm {
            use_corporate_info: true,
            profile_same_as_corporate: true,
            business_details_same_as_corporate: true,
            ..Default::default()
        };
        assert!(form.fully_shared());

        form.profile_same_as_corporate = false;
        assert!(!form.fully_shared());
    }
}
