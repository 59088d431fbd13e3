//! Global keyboard shortcuts.
//!
//! A fixed table of modifier+key combinations resolves to action tags, and
//! applying an action mutates the shared [`UiState`]. Ctrl and Cmd are both
//! bound to the same actions on every platform; the original bindings never
//! distinguished them and neither do we.
//!
//! Bindings:
//!
//! | Combination       | Action        |
//! |-------------------|---------------|
//! | Ctrl+E / Cmd+E    | ToggleSidebar |
//! | Ctrl+K / Cmd+K    | FocusSearch   |
//! | Escape            | Dismiss       |

use super::UiState;

/// A key identity, separate from its modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Escape,
}

/// A pressed key together with its modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub command: bool,
    pub key: KeyPress,
}

/// Action tag a key combination resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ToggleSidebar,
    FocusSearch,
    /// Escape: close the sidebar if open, and blur the search box if there is
    /// one. Both effects fire from the same event when both apply.
    Dismiss,
}

/// Focus/blur sink for the search box.
///
/// The view layer may have no search box at all; callers pass `None` then and
/// every search action becomes a no-op.
pub trait SearchTarget {
    fn focus(&mut self);
    fn blur(&mut self);
}

/// Resolve a key combination against the binding table.
pub fn resolve(combo: KeyCombo) -> Option<ShortcutAction> {
    let modified = combo.ctrl || combo.command;
    match combo.key {
        KeyPress::Escape => Some(ShortcutAction::Dismiss),
        KeyPress::Char('e') if modified => Some(ShortcutAction::ToggleSidebar),
        KeyPress::Char('k') if modified => Some(ShortcutAction::FocusSearch),
        _ => None,
    }
}

/// Apply a resolved action to the UI state.
///
/// Returns `true` when the event was consumed and the toolkit's default
/// handling must be suppressed. ToggleSidebar and FocusSearch always consume,
/// even when the search target is absent; Dismiss consumes only if at least
/// one of its two effects had something to do.
pub fn apply(
    action: ShortcutAction,
    ui: &mut UiState,
    search: Option<&mut dyn SearchTarget>,
) -> bool {
    match action {
        ShortcutAction::ToggleSidebar => {
            ui.sidebar.toggle();
            true
        }
        ShortcutAction::FocusSearch => {
            if let Some(search) = search {
                search.focus();
            }
            true
        }
        ShortcutAction::Dismiss => {
            let had_open_sidebar = ui.sidebar.open;
            if had_open_sidebar {
                ui.sidebar.close();
            }
            let had_search = search.is_some();
            if let Some(search) = search {
                search.blur();
            }
            had_open_sidebar || had_search
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{SidebarState, ThemePrefs};

    fn ui(open: bool) -> UiState {
        UiState {
            theme: ThemePrefs { light: true },
            sidebar: SidebarState { open },
        }
    }

    #[derive(Default)]
    struct RecordingSearch {
        focused: u32,
        blurred: u32,
    }

    impl SearchTarget for RecordingSearch {
        fn focus(&mut self) {
            self.focused += 1;
        }

        fn blur(&mut self) {
            self.blurred += 1;
        }
    }

    fn combo(ctrl: bool, command: bool, key: KeyPress) -> KeyCombo {
        KeyCombo { ctrl, command, key }
    }

    #[test]
    fn test_resolve_sidebar_bindings() {
        assert_eq!(
            resolve(combo(true, false, KeyPress::Char('e'))),
            Some(ShortcutAction::ToggleSidebar)
        );
        assert_eq!(
            resolve(combo(false, true, KeyPress::Char('e'))),
            Some(ShortcutAction::ToggleSidebar)
        );
    }

    #[test]
    fn test_resolve_search_bindings() {
        assert_eq!(
            resolve(combo(true, false, KeyPress::Char('k'))),
            Some(ShortcutAction::FocusSearch)
        );
        assert_eq!(
            resolve(combo(false, true, KeyPress::Char('k'))),
            Some(ShortcutAction::FocusSearch)
        );
    }

    #[test]
    fn test_resolve_escape() {
        assert_eq!(
            resolve(combo(false, false, KeyPress::Escape)),
            Some(ShortcutAction::Dismiss)
        );
    }

    #[test]
    fn test_unmodified_letters_do_not_bind() {
        assert_eq!(resolve(combo(false, false, KeyPress::Char('e'))), None);
        assert_eq!(resolve(combo(false, false, KeyPress::Char('k'))), None);
        assert_eq!(resolve(combo(true, false, KeyPress::Char('x'))), None);
    }

    #[test]
    fn test_toggle_sidebar_flips_and_consumes() {
        let mut state = ui(false);
        assert!(apply(ShortcutAction::ToggleSidebar, &mut state, None));
        assert!(state.sidebar.open);
        assert!(apply(ShortcutAction::ToggleSidebar, &mut state, None));
        assert!(!state.sidebar.open);
    }

    #[test]
    fn test_focus_search_consumes_even_without_target() {
        let mut state = ui(false);
        assert!(apply(ShortcutAction::FocusSearch, &mut state, None));
    }

    #[test]
    fn test_focus_search_focuses_target() {
        let mut state = ui(false);
        let mut search = RecordingSearch::default();
        assert!(apply(ShortcutAction::FocusSearch, &mut state, Some(&mut search)));
        assert_eq!(search.focused, 1);
        assert_eq!(search.blurred, 0);
    }

    #[test]
    fn test_dismiss_closed_sidebar_blurs_search() {
        let mut state = ui(false);
        let mut search = RecordingSearch::default();

        let consumed = apply(ShortcutAction::Dismiss, &mut state, Some(&mut search));
        assert!(consumed);
        assert_eq!(search.blurred, 1);
        // Already closed; close is a no-op
        assert!(!state.sidebar.open);
    }

    #[test]
    fn test_dismiss_does_both_from_one_event() {
        let mut state = ui(true);
        let mut search = RecordingSearch::default();

        let consumed = apply(ShortcutAction::Dismiss, &mut state, Some(&mut search));
        assert!(consumed);
        assert!(!state.sidebar.open);
        assert_eq!(search.blurred, 1);
    }

    #[test]
    fn test_dismiss_open_sidebar_no_search() {
        let mut state = ui(true);
        assert!(apply(ShortcutAction::Dismiss, &mut state, None));
        assert!(!state.sidebar.open);
    }

    #[test]
    fn test_dismiss_nothing_to_do_is_not_consumed() {
        let mut state = ui(false);
        assert!(!apply(ShortcutAction::Dismiss, &mut state, None));
    }
}
