//! Navigation-model derivation.
//!
//! One fixed section template per account context. Derived fresh on every
//! render from live identity/status inputs; never cached, since a stale
//! status would render a stale menu.

use crate::system::profile::ProfileKind;
use contracts::system::auth::{AccountStatus, UserType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    pub sections: Vec<NavSection>,
}

fn item(label: &'static str, icon: &'static str, path: &'static str, current: &str) -> NavItem {
    NavItem {
        label,
        icon,
        path,
        is_active: path == current,
    }
}

fn branch_template(current: &str) -> NavigationModel {
    NavigationModel {
        sections: vec![NavSection {
            title: "Branch",
            items: vec![
                item("Dashboard", "dashboard", "/dashboard", current),
                item("My Experience", "store", "/my-experience", current),
                item("Redemptions", "receipt", "/redemptions", current),
            ],
        }],
    }
}

fn vendor_template(current: &str) -> NavigationModel {
    NavigationModel {
        sections: vec![
            NavSection {
                title: "Overview",
                items: vec![
                    item("Dashboard", "dashboard", "/dashboard", current),
                    item("Cards", "card", "/cards", current),
                    item("Redemptions", "receipt", "/redemptions", current),
                ],
            },
            NavSection {
                title: "Management",
                items: vec![
                    item("Branches", "branch", "/branches", current),
                    item("Payment Methods", "card", "/payment-methods", current),
                ],
            },
            NavSection {
                title: "Settings & Support",
                items: vec![
                    item("Settings", "settings", "/settings", current),
                    item("Contact", "help", "/contact", current),
                ],
            },
        ],
    }
}

fn corporate_template(
    user_type: UserType,
    status: AccountStatus,
    current: &str,
) -> NavigationModel {
    let approved = status.is_approved();
    let super_admin = user_type == UserType::CorporateSuperAdmin;

    let mut sections = vec![NavSection {
        title: "Overview",
        items: vec![item("Dashboard", "dashboard", "/dashboard", current)],
    }];

    if approved {
        sections.push(NavSection {
            title: "Commerce",
            items: vec![
                item("Purchase", "cart", "/purchase", current),
                item("Requests", "inbox", "/requests", current),
            ],
        });
    }

    // Admin management and notifications are super-admin surface; a plain
    // corporate admin never sees them, approved or not.
    if approved && super_admin {
        sections.push(NavSection {
            title: "Administration",
            items: vec![
                item("Admins", "users", "/admins", current),
                item("Notifications", "bell", "/notifications", current),
            ],
        });
    }

    sections.push(NavSection {
        title: "Settings & Support",
        items: vec![
            item("Settings", "settings", "/settings", current),
            item("Contact", "help", "/contact", current),
        ],
    });

    NavigationModel { sections }
}

fn regular_template(current: &str) -> NavigationModel {
    NavigationModel {
        sections: vec![
            NavSection {
                title: "Gift Cards",
                items: vec![
                    item("Browse Vendors", "compass", "/vendors", current),
                    item("My Cards", "gift", "/my-cards", current),
                ],
            },
            NavSection {
                title: "Account",
                items: vec![
                    item("Dashboard", "dashboard", "/dashboard", current),
                    item("Recipients", "users", "/recipients", current),
                ],
            },
            NavSection {
                title: "Settings & Support",
                items: vec![
                    item("Settings", "settings", "/settings", current),
                    item("Contact", "help", "/contact", current),
                ],
            },
        ],
    }
}

/// Derive the navigation sections for the current account context.
///
/// Branch managers and corporate staff tiers have a fixed context keyed
/// directly off the account kind (no switchable profile); everyone else
/// is keyed off the resolved profile, with the regular-user template as
/// the fallback.
pub fn derive_navigation_model(
    active: Option<ProfileKind>,
    user_type: UserType,
    status: AccountStatus,
    current_path: &str,
) -> NavigationModel {
    match user_type {
        UserType::Branch => branch_template(current_path),
        UserType::CorporateAdmin | UserType::CorporateSuperAdmin => {
            corporate_template(user_type, status, current_path)
        }
        _ => match active {
            Some(ProfileKind::Vendor) => vendor_template(current_path),
            Some(ProfileKind::Corporate) => {
                corporate_template(user_type, status, current_path)
            }
            None => regular_template(current_path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(model: &NavigationModel) -> Vec<&'static str> {
        model
            .sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.label))
            .collect()
    }

    fn section_titles(model: &NavigationModel) -> Vec<&'static str> {
        model.sections.iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_regular_user_template() {
        let model = derive_navigation_model(
            None,
            UserType::User,
            AccountStatus::Active,
            "/dashboard",
        );
        assert_eq!(
            section_titles(&model),
            vec!["Gift Cards", "Account", "Settings & Support"]
        );
    }

    #[test]
    fn test_branch_template_ignores_account_profile() {
        // Branch managers keep their fixed menu even when an `account`
        // parameter resolved upstream; the template is keyed off the kind.
        let model = derive_navigation_model(
            Some(ProfileKind::Corporate),
            UserType::Branch,
            AccountStatus::Approved,
            "/dashboard",
        );
        assert_eq!(
            labels(&model),
            vec!["Dashboard", "My Experience", "Redemptions"]
        );
    }

    #[test]
    fn test_pending_corporate_admin_never_sees_admin_items() {
        for status in [
            AccountStatus::Pending,
            AccountStatus::Active,
            AccountStatus::Rejected,
            AccountStatus::Approved,
            AccountStatus::Verified,
        ] {
            let model = derive_navigation_model(
                None,
                UserType::CorporateAdmin,
                status,
                "/dashboard",
            );
            let items = labels(&model);
            assert!(!items.contains(&"Admins"), "status {:?}", status);
            assert!(!items.contains(&"Notifications"), "status {:?}", status);
        }
    }

    #[test]
    fn test_approved_super_admin_sees_admin_items() {
        let model = derive_navigation_model(
            None,
            UserType::CorporateSuperAdmin,
            AccountStatus::Approved,
            "/dashboard",
        );
        let items = labels(&model);
        assert!(items.contains(&"Admins"));
        assert!(items.contains(&"Notifications"));
        assert!(items.contains(&"Purchase"));
        assert!(items.contains(&"Requests"));
    }

    #[test]
    fn test_unapproved_corporate_hides_commerce() {
        let model = derive_navigation_model(
            Some(ProfileKind::Corporate),
            UserType::Corporate,
            AccountStatus::Pending,
            "/dashboard",
        );
        let items = labels(&model);
        assert!(!items.contains(&"Purchase"));
        assert!(!items.contains(&"Requests"));
        assert_eq!(
            section_titles(&model),
            vec!["Overview", "Settings & Support"]
        );
    }

    #[test]
    fn test_vendor_template_order_is_fixed() {
        let model = derive_navigation_model(
            Some(ProfileKind::Vendor),
            UserType::CorporateVendor,
            AccountStatus::Approved,
            "/branches",
        );
        assert_eq!(
            labels(&model),
            vec![
                "Dashboard",
                "Cards",
                "Redemptions",
                "Branches",
                "Payment Methods",
                "Settings",
                "Contact"
            ]
        );
    }

    #[test]
    fn test_active_flag_matches_current_path() {
        let model = derive_navigation_model(
            Some(ProfileKind::Vendor),
            UserType::Vendor,
            AccountStatus::Approved,
            "/cards",
        );
        let active: Vec<&str> = model
            .sections
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|i| i.is_active)
            .map(|i| i.label)
            .collect();
        assert_eq!(active, vec!["Cards"]);
    }
}
