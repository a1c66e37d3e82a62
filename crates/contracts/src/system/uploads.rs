use serde::{Deserialize, Serialize};

/// Response of the file upload service for a stored binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_key: String,
    pub file_name: String,
}

/// Short-lived display URL for an already-stored file key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresignedUrlResponse {
    pub url: String,
}
