//! Sidebar collapse state.
//!
//! Two inputs: the persisted user preference (written only by the
//! explicit toggle) and a viewport-width override. Narrow viewports force
//! the collapsed rendering without touching the stored preference.

pub const COLLAPSE_BREAKPOINT_PX: f64 = 992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub fn toggled(self) -> SidebarMode {
        match self {
            SidebarMode::Expanded => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == SidebarMode::Collapsed
    }
}

/// Mount-time state: narrow viewport forces collapsed, else the persisted
/// preference, else expanded.
pub fn initial_mode(viewport_width: f64, persisted: Option<bool>) -> SidebarMode {
    if viewport_width <= COLLAPSE_BREAKPOINT_PX {
        return SidebarMode::Collapsed;
    }
    match persisted {
        Some(true) => SidebarMode::Collapsed,
        Some(false) => SidebarMode::Expanded,
        None => SidebarMode::Expanded,
    }
}

/// Render-time state: the viewport override applies on top of the chosen
/// mode for the current render only.
pub fn effective_mode(chosen: SidebarMode, viewport_width: f64) -> SidebarMode {
    if viewport_width <= COLLAPSE_BREAKPOINT_PX {
        SidebarMode::Collapsed
    } else {
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_narrow_viewport_forces_collapsed() {
        assert_eq!(initial_mode(992.0, Some(false)), SidebarMode::Collapsed);
        assert_eq!(initial_mode(640.0, None), SidebarMode::Collapsed);
    }

    #[test]
    fn test_initial_mode_wide_viewport_uses_preference() {
        assert_eq!(initial_mode(1280.0, Some(true)), SidebarMode::Collapsed);
        assert_eq!(initial_mode(1280.0, Some(false)), SidebarMode::Expanded);
        assert_eq!(initial_mode(1280.0, None), SidebarMode::Expanded);
    }

    #[test]
    fn test_viewport_override_does_not_flip_the_choice() {
        let chosen = SidebarMode::Expanded;
        assert_eq!(effective_mode(chosen, 800.0), SidebarMode::Collapsed);
        // Back on a wide viewport the original choice still applies.
        assert_eq!(effective_mode(chosen, 1280.0), SidebarMode::Expanded);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(SidebarMode::Expanded.toggled(), SidebarMode::Collapsed);
        assert_eq!(
            SidebarMode::Expanded.toggled().toggled(),
            SidebarMode::Expanded
        );
    }
}
