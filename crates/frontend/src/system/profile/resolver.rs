//! Active-profile resolution.
//!
//! A multi-role account (vendor, corporate, corporate-vendor) operates in
//! exactly one context at a time. The context is resolved from three
//! ordered sources: the `account` URL parameter, the persisted
//! preference, then a default derived from the account kind. Regular
//! users and branch managers have a fixed context and resolve to no
//! profile at all.

use crate::shared::route::{with_query_param, ACCOUNT_PARAM};
use contracts::system::auth::UserType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Vendor,
    Corporate,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Vendor => "vendor",
            ProfileKind::Corporate => "corporate",
        }
    }

    /// Parse a profile value from the URL or storage. Anything but the
    /// two known values is treated as absent.
    pub fn from_param(value: &str) -> Option<ProfileKind> {
        match value {
            "vendor" => Some(ProfileKind::Vendor),
            "corporate" => Some(ProfileKind::Corporate),
            _ => None,
        }
    }
}

/// Which of the three sources produced the resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Url,
    Storage,
    UserTypeDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveProfile {
    pub kind: ProfileKind,
    pub source: ProfileSource,
}

/// Resolve the active profile. Pure; callers own writing the result back
/// to the URL or storage.
///
/// Precedence, first match wins:
/// 1. non-switchable account kinds resolve to `None`;
/// 2. a valid `account` URL parameter;
/// 3. a valid persisted preference;
/// 4. default derived from the account kind.
pub fn resolve_active_profile(
    user_type: UserType,
    url_param: Option<&str>,
    persisted: Option<&str>,
) -> Option<ActiveProfile> {
    if !user_type.is_switchable() {
        return None;
    }

    if let Some(kind) = url_param.and_then(ProfileKind::from_param) {
        return Some(ActiveProfile {
            kind,
            source: ProfileSource::Url,
        });
    }

    if let Some(kind) = persisted.and_then(ProfileKind::from_param) {
        return Some(ActiveProfile {
            kind,
            source: ProfileSource::Storage,
        });
    }

    let kind = match user_type {
        UserType::Corporate => ProfileKind::Corporate,
        // CorporateVendor defaults to its vendor context.
        _ => ProfileKind::Vendor,
    };
    Some(ActiveProfile {
        kind,
        source: ProfileSource::UserTypeDefault,
    })
}

/// Thread the active profile through a route link so a reload or deep
/// link lands in the same context. Parameter-map merge, so decorating an
/// already-decorated route overwrites instead of duplicating.
pub fn decorate_route(route: &str, active: Option<&ActiveProfile>) -> String {
    match active {
        None => route.to_string(),
        Some(profile) => with_query_param(route, ACCOUNT_PARAM, profile.kind.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_param_wins_over_storage_and_default() {
        let resolved = resolve_active_profile(
            UserType::CorporateVendor,
            Some("corporate"),
            Some("vendor"),
        )
        .unwrap();
        assert_eq!(resolved.kind, ProfileKind::Corporate);
        assert_eq!(resolved.source, ProfileSource::Url);
    }

    #[test]
    fn test_storage_wins_over_default() {
        let resolved =
            resolve_active_profile(UserType::Corporate, None, Some("vendor")).unwrap();
        assert_eq!(resolved.kind, ProfileKind::Vendor);
        assert_eq!(resolved.source, ProfileSource::Storage);
    }

    #[test]
    fn test_defaults_by_user_type() {
        let cases = [
            (UserType::Vendor, ProfileKind::Vendor),
            (UserType::Corporate, ProfileKind::Corporate),
            (UserType::CorporateVendor, ProfileKind::Vendor),
        ];
        for (user_type, expected) in cases {
            let resolved = resolve_active_profile(user_type, None, None).unwrap();
            assert_eq!(resolved.kind, expected);
            assert_eq!(resolved.source, ProfileSource::UserTypeDefault);
        }
    }

    #[test]
    fn test_fixed_context_kinds_resolve_to_none() {
        for user_type in [
            UserType::User,
            UserType::Branch,
            UserType::CorporateAdmin,
            UserType::CorporateSuperAdmin,
        ] {
            assert_eq!(
                resolve_active_profile(user_type, Some("vendor"), Some("corporate")),
                None,
                "{:?} must not expose a switchable profile",
                user_type
            );
        }
    }

    #[test]
    fn test_invalid_values_are_treated_as_absent() {
        let resolved =
            resolve_active_profile(UserType::CorporateVendor, Some("admin"), Some("nope"))
                .unwrap();
        assert_eq!(resolved.kind, ProfileKind::Vendor);
        assert_eq!(resolved.source, ProfileSource::UserTypeDefault);
    }

    #[test]
    fn test_decorate_route() {
        let active = ActiveProfile {
            kind: ProfileKind::Vendor,
            source: ProfileSource::Url,
        };
        assert_eq!(
            decorate_route("/dashboard", Some(&active)),
            "/dashboard?account=vendor"
        );
        assert_eq!(decorate_route("/dashboard", None), "/dashboard");
    }

    #[test]
    fn test_decorate_route_is_stable_under_redecoration() {
        let active = ActiveProfile {
            kind: ProfileKind::Corporate,
            source: ProfileSource::Storage,
        };
        let once = decorate_route("/settings?tab=branches", Some(&active));
        let twice = decorate_route(&once, Some(&active));
        assert_eq!(once, twice);
        assert_eq!(once, "/settings?account=corporate&tab=branches");
    }
}
