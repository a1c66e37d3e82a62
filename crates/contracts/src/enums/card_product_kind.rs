use serde::{Deserialize, Serialize};

/// Gift-card product tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardProductKind {
    DashX,
    DashPro,
    DashPass,
    DashGo,
}

impl CardProductKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CardProductKind::DashX => "DashX",
            CardProductKind::DashPro => "DashPro",
            CardProductKind::DashPass => "DashPass",
            CardProductKind::DashGo => "DashGo",
        }
    }

    pub fn all() -> Vec<CardProductKind> {
        vec![
            CardProductKind::DashX,
            CardProductKind::DashPro,
            CardProductKind::DashPass,
            CardProductKind::DashGo,
        ]
    }
}
