use super::state::SelectedFile;
use crate::shared::api_utils::api_base;
use contracts::domain::vendor::{
    CorporateUser, CreateVendorRequest, DocumentType, StoredDocument, SubmissionError,
    VendorAccount,
};
use contracts::system::uploads::UploadResponse;
use gloo_net::http::Request;

/// Fetch the corporate account record (with nested details and document
/// keys) for "same as corporate" sections.
pub async fn fetch_corporate_user(id: &str) -> Result<CorporateUser, String> {
    let url = format!(
        "{}/api/corporate-users/{}",
        api_base(),
        urlencoding::encode(id)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Corporate lookup failed: {}", response.status()));
    }

    response
        .json::<CorporateUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Upload one document and return its storage record.
pub async fn upload_document(
    doc_type: DocumentType,
    file: &SelectedFile,
) -> Result<StoredDocument, String> {
    let url = format!(
        "{}/api/uploads?doc_type={}&file_name={}",
        api_base(),
        doc_type.as_str(),
        urlencoding::encode(&file.name)
    );

    let body = js_sys::Uint8Array::from(file.bytes.as_slice());
    let response = Request::post(&url)
        .header(
            "Content-Type",
            if file.mime.is_empty() {
                "application/octet-stream"
            } else {
                file.mime.as_str()
            },
        )
        .body(body)
        .map_err(|e| format!("Failed to build upload request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to upload {}: {}", doc_type.as_str(), e))?;

    if !response.ok() {
        return Err(format!(
            "Upload of {} failed: {}",
            doc_type.as_str(),
            response.status()
        ));
    }

    let uploaded = response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("Failed to parse upload response: {}", e))?;

    Ok(StoredDocument {
        file_key: uploaded.file_key,
        file_name: uploaded.file_name,
        doc_type,
    })
}

/// Submit the composite vendor-creation payload.
pub async fn create_vendor(
    request: &CreateVendorRequest,
) -> Result<VendorAccount, SubmissionError> {
    let response = Request::post(&format!("{}/api/vendors", api_base()))
        .json(request)
        .map_err(|e| SubmissionError {
            status: 0,
            message: Some(format!("Failed to serialize request: {}", e)),
        })?
        .send()
        .await
        .map_err(|e| SubmissionError {
            status: 0,
            message: Some(format!("Failed to send request: {}", e)),
        })?;

    if !response.ok() {
        let status = response.status();
        // Prefer the server-supplied message when the body carries one.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            });
        return Err(SubmissionError { status, message });
    }

    response
        .json::<VendorAccount>()
        .await
        .map_err(|e| SubmissionError {
            status: 0,
            message: Some(format!("Failed to parse response: {}", e)),
        })
}
