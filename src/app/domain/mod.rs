pub mod prefs;
pub mod shortcuts;
pub mod sidebar;

pub use prefs::ThemePrefs;
pub use sidebar::SidebarState;

/// Shared UI state threaded through the view layer.
///
/// Holds the two process-lifetime stores so handlers get explicit references
/// instead of ambient globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePrefs,
    pub sidebar: SidebarState,
}
