use serde::{Deserialize, Serialize};

/// Account kind assigned by the backend at registration time.
///
/// `CorporateVendor` is a corporate account that also owns a vendor
/// profile; `CorporateAdmin`/`CorporateSuperAdmin` are staff tiers inside
/// a corporate account; `Branch` is a branch-manager login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    User,
    Vendor,
    Corporate,
    CorporateVendor,
    CorporateAdmin,
    CorporateSuperAdmin,
    Branch,
}

impl UserType {
    /// Account kinds that can switch between vendor and corporate contexts.
    pub fn is_switchable(&self) -> bool {
        matches!(
            self,
            UserType::Vendor | UserType::Corporate | UserType::CorporateVendor
        )
    }
}

/// Review state of an account as reported by the profile service.
///
/// Unrecognized wire values map to `Unknown` instead of failing the whole
/// identity deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Pending,
    Active,
    Approved,
    Verified,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl AccountStatus {
    /// `approved` and `verified` are the only states that unlock the
    /// approval-gated corporate menu items. `active` is account liveness,
    /// not an approval tier.
    pub fn is_approved(&self) -> bool {
        matches!(self, AccountStatus::Approved | AccountStatus::Verified)
    }
}

/// Read-only projection of the signed-in user, owned by the profile service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub user_type: UserType,
    pub status: AccountStatus,
    pub display_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserIdentity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_approval() {
        assert!(AccountStatus::Approved.is_approved());
        assert!(AccountStatus::Verified.is_approved());
        assert!(!AccountStatus::Active.is_approved());
        assert!(!AccountStatus::Pending.is_approved());
        assert!(!AccountStatus::Rejected.is_approved());
    }

    #[test]
    fn test_unknown_status_degrades() {
        let status: AccountStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, AccountStatus::Unknown);
        assert!(!status.is_approved());
    }

    #[test]
    fn test_user_type_wire_format() {
        let t: UserType = serde_json::from_str("\"corporate_super_admin\"").unwrap();
        assert_eq!(t, UserType::CorporateSuperAdmin);
        assert_eq!(
            serde_json::to_string(&UserType::CorporateVendor).unwrap(),
            "\"corporate_vendor\""
        );
    }
}
