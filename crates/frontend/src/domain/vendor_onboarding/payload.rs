//! Submission payload assembly.
//!
//! Pure functions: the orchestrator collects pending uploads, performs
//! them, then assembles the composite request from form state, the
//! corporate record, and the freshly returned storage keys.

use super::machine::ValidationErrors;
use super::state::{FileRef, OnboardingForm, SelectedFile};
use contracts::domain::vendor::{
    BusinessDetails, CorporateUser, CreateVendorRequest, DocumentSet, DocumentType,
    PersonalProfile, StoredDocument, VendorName, VendorSection,
};

/// A local selection that must be uploaded before assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub doc_type: DocumentType,
    pub file: SelectedFile,
}

/// Collect every not-yet-uploaded file on the active path. Sections
/// copied from the corporate record contribute nothing; their documents
/// already live in remote storage.
pub fn collect_pending_uploads(form: &OnboardingForm) -> Vec<PendingUpload> {
    if form.fully_shared() {
        return vec![];
    }

    let mut pending = vec![];

    if !form.profile_same_as_corporate {
        for (doc_type, file_ref) in [
            (DocumentType::IdFront, &form.id_front),
            (DocumentType::IdBack, &form.id_back),
        ] {
            if let Some(file) = file_ref.pending() {
                pending.push(PendingUpload {
                    doc_type,
                    file: file.clone(),
                });
            }
        }
    }

    if !form.business_details_same_as_corporate {
        for (doc_type, file_ref) in form.business_document_refs() {
            if let Some(file) = file_ref.pending() {
                pending.push(PendingUpload {
                    doc_type,
                    file: file.clone(),
                });
            }
        }
    }

    pending
}

/// Dialing prefixes recognized when deriving a country code from a phone
/// number, longest first. Unmatched numbers fall back to `+1`.
const DIALING_PREFIXES: &[&str] = &[
    "+234", "+233", "+254", "+255", "+256", "+27", "+44", "+49", "+33", "+91", "+1",
];

pub const DEFAULT_COUNTRY_CODE: &str = "+1";

/// Derive a country code from a leading `+<digits>` prefix.
pub fn derive_country_code(phone: &str) -> &'static str {
    let trimmed = phone.trim();
    if !trimmed.starts_with('+') {
        return DEFAULT_COUNTRY_CODE;
    }
    DIALING_PREFIXES
        .iter()
        .find(|prefix| trimmed.starts_with(**prefix))
        .copied()
        .unwrap_or(DEFAULT_COUNTRY_CODE)
}

/// Pick the stored form of a document slot: a freshly uploaded key wins
/// over a key kept from an earlier upload.
fn resolve_document(
    file_ref: &FileRef,
    doc_type: DocumentType,
    uploaded: &[StoredDocument],
) -> Option<StoredDocument> {
    if let Some(doc) = uploaded.iter().find(|d| d.doc_type == doc_type) {
        return Some(doc.clone());
    }
    file_ref.remote_key.as_ref().map(|key| StoredDocument {
        file_key: key.clone(),
        file_name: file_ref
            .local
            .as_ref()
            .map(|f| f.name.clone())
            .unwrap_or_else(|| doc_type.as_str().to_string()),
        doc_type,
    })
}

fn corporate_or_err<'a>(
    corporate: Option<&'a CorporateUser>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<&'a CorporateUser> {
    if corporate.is_none() {
        errors.push(field, "Corporate account record is unavailable");
    }
    corporate
}

/// Assemble the composite vendor-creation request.
///
/// Each of the four sections resolves independently from its own flag,
/// so a shared personal section never leaks into freshly entered business
/// data and vice versa. The fully-shared path short-circuits to four
/// `use_corporate_info` markers with no data duplication.
pub fn assemble_request(
    form: &OnboardingForm,
    corporate: Option<&CorporateUser>,
    uploaded: &[StoredDocument],
) -> Result<CreateVendorRequest, ValidationErrors> {
    if form.fully_shared() {
        return Ok(CreateVendorRequest {
            vendor_name: VendorSection::use_corporate(),
            personal_details: VendorSection::use_corporate(),
            business_details: VendorSection::use_corporate(),
            business_documents: VendorSection::use_corporate(),
        });
    }

    let mut errors = ValidationErrors::default();

    let vendor_name = if form.use_corporate_info {
        match corporate_or_err(corporate, "vendor_name", &mut errors) {
            Some(corporate) => VendorSection::Provided(VendorName {
                name: corporate.display_name.clone(),
            }),
            None => VendorSection::use_corporate(),
        }
    } else {
        VendorSection::Provided(VendorName {
            name: form.vendor_name.trim().to_string(),
        })
    };

    let personal_details = if form.profile_same_as_corporate {
        match corporate_or_err(corporate, "personal_details", &mut errors) {
            Some(corporate) => {
                let details = match &corporate.personal_details {
                    Some(details) => details.clone(),
                    None => {
                        errors.push(
                            "personal_details",
                            "Corporate account has no personal details on file",
                        );
                        Default::default()
                    }
                };
                VendorSection::Provided(PersonalProfile {
                    details,
                    id_images: corporate.id_images.clone(),
                })
            }
            None => VendorSection::use_corporate(),
        }
    } else {
        let mut id_images = vec![];
        match resolve_document(&form.id_front, DocumentType::IdFront, uploaded) {
            Some(doc) => id_images.push(doc),
            None => errors.push("front_id", "Upload the front of your ID"),
        }
        if let Some(doc) = resolve_document(&form.id_back, DocumentType::IdBack, uploaded) {
            id_images.push(doc);
        }
        VendorSection::Provided(PersonalProfile {
            details: form.personal.clone(),
            id_images,
        })
    };

    let (business_details, business_documents) = if form.business_details_same_as_corporate {
        match corporate_or_err(corporate, "business_details", &mut errors) {
            Some(corporate) => {
                let details = match corporate.business_details.first() {
                    Some(details) => details.clone(),
                    None => {
                        errors.push(
                            "business_details",
                            "Corporate account has no business details on file",
                        );
                        Default::default()
                    }
                };
                (
                    VendorSection::Provided(details),
                    VendorSection::Provided(DocumentSet {
                        documents: corporate.business_documents.clone(),
                    }),
                )
            }
            None => (VendorSection::use_corporate(), VendorSection::use_corporate()),
        }
    } else {
        let details = BusinessDetails {
            country_code: derive_country_code(&form.business.business_phone).to_string(),
            ..form.business.clone()
        };

        let mut documents = vec![];
        for (doc_type, file_ref) in form.business_document_refs() {
            match resolve_document(file_ref, doc_type, uploaded) {
                Some(doc) => documents.push(doc),
                None => {
                    if doc_type.is_required() {
                        errors.push(doc_type.as_str(), "This document is required");
                    }
                }
            }
        }

        (
            VendorSection::Provided(details),
            VendorSection::Provided(DocumentSet { documents }),
        )
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CreateVendorRequest {
        vendor_name,
        personal_details,
        business_details,
        business_documents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::vendor::PersonalDetails;

    fn selected(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            mime: "image/png".to_string(),
            size: 3,
            bytes: vec![1, 2, 3],
        }
    }

    fn pending_ref(name: &str) -> FileRef {
        FileRef {
            local: Some(selected(name)),
            remote_key: None,
        }
    }

    fn stored(key: &str, doc_type: DocumentType) -> StoredDocument {
        StoredDocument {
            file_key: key.to_string(),
            file_name: format!("{}.png", doc_type.as_str()),
            doc_type,
        }
    }

    fn corporate_record() -> CorporateUser {
        CorporateUser {
            id: "corp-1".to_string(),
            display_name: "Dash Holdings".to_string(),
            email: Some("corp@example.com".to_string()),
            phone: Some("+2348011111111".to_string()),
            personal_details: Some(PersonalDetails {
                first_name: "Chief".to_string(),
                last_name: "Okafor".to_string(),
                dob: "1980-01-01".to_string(),
                street_address: "1 Corporate Way".to_string(),
                id_type: "passport".to_string(),
                id_number: "C0000001".to_string(),
                phone: "+2348011111111".to_string(),
                email: "corp@example.com".to_string(),
            }),
            id_images: vec![
                stored("corp-id-front", DocumentType::IdFront),
                stored("corp-id-back", DocumentType::IdBack),
            ],
            business_details: vec![BusinessDetails {
                business_name: "Dash Holdings Ltd".to_string(),
                business_email: "biz@example.com".to_string(),
                business_phone: "+2348011111111".to_string(),
                business_address: "1 Corporate Way".to_string(),
                registration_number: "RC-100001".to_string(),
                country_code: "+234".to_string(),
            }],
            business_documents: vec![
                stored("corp-logo", DocumentType::Logo),
                stored("corp-cert", DocumentType::CertificateOfIncorporation),
                stored("corp-license", DocumentType::BusinessLicense),
                stored("corp-utility", DocumentType::UtilityBill),
            ],
        }
    }

    fn fully_shared_form() -> OnboardingForm {
        OnboardingForm {
            use_corporate_info: true,
            profile_same_as_corporate: true,
            business_details_same_as_corporate: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_fully_shared_collects_no_uploads() {
        // Even with stray local selections, the fully-shared path uploads
        // nothing.
        let mut form = fully_shared_form();
        form.logo = pending_ref("logo.png");
        form.id_front = pending_ref("front.png");
        assert!(collect_pending_uploads(&form).is_empty());
    }

    #[test]
    fn test_fully_shared_payload_is_four_markers() {
        let request = assemble_request(&fully_shared_form(), None, &[]).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        let expected_marker = serde_json::json!({ "use_corporate_info": true });
        for key in [
            "vendor_name",
            "personal_details",
            "business_details",
            "business_documents",
        ] {
            assert_eq!(json[key], expected_marker, "section {}", key);
        }
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_shared_profile_fresh_business_has_no_cross_contamination() {
        let form = OnboardingForm {
            vendor_name: "Dash Lagos".to_string(),
            profile_same_as_corporate: true,
            business: BusinessDetails {
                business_name: "Dash Lagos Ltd".to_string(),
                business_email: "lagos@example.com".to_string(),
                business_phone: "+2348099999999".to_string(),
                business_address: "5 Island Rd".to_string(),
                registration_number: "RC-200002".to_string(),
                country_code: String::new(),
            },
            logo: pending_ref("logo.png"),
            certificate_of_incorporation: pending_ref("cert.pdf"),
            business_license: pending_ref("license.pdf"),
            utility_bill: pending_ref("bill.pdf"),
            ..Default::default()
        };

        let pending = collect_pending_uploads(&form);
        let pending_types: Vec<DocumentType> = pending.iter().map(|p| p.doc_type).collect();
        // Shared personal section contributes no uploads.
        assert!(!pending_types.contains(&DocumentType::IdFront));
        assert_eq!(pending_types.len(), 4);

        let uploaded = vec![
            stored("fresh-logo", DocumentType::Logo),
            stored("fresh-cert", DocumentType::CertificateOfIncorporation),
            stored("fresh-license", DocumentType::BusinessLicense),
            stored("fresh-utility", DocumentType::UtilityBill),
        ];
        let corporate = corporate_record();
        let request = assemble_request(&form, Some(&corporate), &uploaded).unwrap();

        // Personal section comes from the corporate record.
        let personal = request.personal_details.provided().unwrap();
        assert_eq!(personal.details.first_name, "Chief");
        let personal_keys: Vec<&str> =
            personal.id_images.iter().map(|d| d.file_key.as_str()).collect();
        assert_eq!(personal_keys, vec!["corp-id-front", "corp-id-back"]);

        // Business documents come from the fresh uploads only.
        let documents = &request.business_documents.provided().unwrap().documents;
        assert!(documents.iter().all(|d| d.file_key.starts_with("fresh-")));
        assert_eq!(documents.len(), 4);

        // Freshly entered business details, with the derived country code.
        let business = request.business_details.provided().unwrap();
        assert_eq!(business.business_name, "Dash Lagos Ltd");
        assert_eq!(business.country_code, "+234");
    }

    #[test]
    fn test_shared_business_reuses_corporate_keys_without_upload() {
        let form = OnboardingForm {
            vendor_name: "Dash Abuja".to_string(),
            business_details_same_as_corporate: true,
            profile_same_as_corporate: true,
            ..Default::default()
        };
        assert!(collect_pending_uploads(&form).is_empty());

        let corporate = corporate_record();
        let request = assemble_request(&form, Some(&corporate), &[]).unwrap();
        let documents = &request.business_documents.provided().unwrap().documents;
        assert!(documents.iter().all(|d| d.file_key.starts_with("corp-")));
    }

    #[test]
    fn test_missing_required_document_fails_assembly() {
        let form = OnboardingForm {
            vendor_name: "Dash Kano".to_string(),
            personal: PersonalDetails::default(),
            id_front: pending_ref("front.png"),
            logo: pending_ref("logo.png"),
            // certificate, license and utility bill missing
            ..Default::default()
        };
        let uploaded = vec![
            stored("fresh-front", DocumentType::IdFront),
            stored("fresh-logo", DocumentType::Logo),
        ];
        let errors = assemble_request(&form, None, &uploaded).unwrap_err();
        assert!(errors.get("certificate_of_incorporation").is_some());
        assert!(errors.get("business_license").is_some());
        assert!(errors.get("utility_bill").is_some());
        assert!(errors.get("articles_of_incorporation").is_none());
        assert!(errors.get("logo").is_none());
    }

    #[test]
    fn test_existing_remote_key_is_not_reuploaded() {
        let form = OnboardingForm {
            logo: FileRef {
                local: Some(selected("logo.png")),
                remote_key: Some("already-there".to_string()),
            },
            ..Default::default()
        };
        let pending = collect_pending_uploads(&form);
        assert!(pending.iter().all(|p| p.doc_type != DocumentType::Logo));

        let resolved = resolve_document(&form.logo, DocumentType::Logo, &[]).unwrap();
        assert_eq!(resolved.file_key, "already-there");
        assert_eq!(resolved.file_name, "logo.png");
    }

    #[test]
    fn test_derive_country_code() {
        assert_eq!(derive_country_code("+2348012345678"), "+234");
        assert_eq!(derive_country_code("+447911123456"), "+44");
        assert_eq!(derive_country_code("+15551234567"), "+1");
        assert_eq!(derive_country_code("08012345678"), DEFAULT_COUNTRY_CODE);
        assert_eq!(derive_country_code(""), DEFAULT_COUNTRY_CODE);
        assert_eq!(derive_country_code("+999000"), DEFAULT_COUNTRY_CODE);
    }
}
