pub mod context;
pub mod resolver;

pub use context::{use_profile, ProfileContext};
pub use resolver::{decorate_route, resolve_active_profile, ActiveProfile, ProfileKind, ProfileSource};
