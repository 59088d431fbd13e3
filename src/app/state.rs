use fltk::{
    browser::HoldBrowser,
    group::Flex,
    input::Input,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    window::Window,
};

use super::domain::shortcuts::{self, SearchTarget, ShortcutAction};
use super::domain::{SidebarState, UiState};
use super::infrastructure::storage::JsonFileStorage;
use super::services::content::{self, Page};
use crate::ui::main_window::{MainWidgets, SIDEBAR_WIDTH};
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Main application coordinator: owns the widgets, the two UI stores and the
/// preference storage, and applies store changes back to the live widgets.
pub struct AppState {
    pub ui: UiState,
    pub storage: JsonFileStorage,
    pub pages: Vec<Page>,
    /// Browser line -> index into `pages`, in display order.
    visible: Vec<usize>,
    current: Option<usize>,
    wind: Window,
    row: Flex,
    menu: MenuBar,
    sidebar: Flex,
    search: Input,
    browser: HoldBrowser,
    content: HelpView,
}

/// The live search box as seen by the shortcut dispatcher. Blurring moves
/// focus to the content pane; FLTK has no unfocused state to return to.
struct SearchBox {
    input: Input,
    content: HelpView,
}

impl SearchTarget for SearchBox {
    fn focus(&mut self) {
        let _ = self.input.take_focus();
    }

    fn blur(&mut self) {
        let _ = self.content.take_focus();
    }
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        storage: JsonFileStorage,
        pages: Vec<Page>,
        ui: UiState,
    ) -> Self {
        let MainWidgets {
            wind,
            row,
            menu,
            sidebar,
            search,
            browser,
            content,
        } = widgets;

        let mut state = Self {
            ui,
            storage,
            pages,
            visible: Vec::new(),
            current: None,
            wind,
            row,
            menu,
            sidebar,
            search,
            browser,
            content,
        };

        state.apply_theme_to_widgets();
        state.sync_sidebar();
        state.refresh_browser();
        if !state.pages.is_empty() {
            state.open_page(1);
        }
        state
    }

    /// Handle a resolved keyboard shortcut. Returns `true` when the event was
    /// consumed and the toolkit default must be suppressed.
    pub fn handle_shortcut(&mut self, action: ShortcutAction) -> bool {
        // In this layout the search box lives inside the sidebar, unlike the
        // always-visible navbar input the bindings come from. take_focus on a
        // hidden Input silently fails, so reveal the sidebar first.
        if must_reveal_sidebar(action, self.ui.sidebar) {
            self.ui.sidebar.toggle();
            self.sync_sidebar();
        }

        let mut search = SearchBox {
            input: self.search.clone(),
            content: self.content.clone(),
        };
        let consumed = shortcuts::apply(action, &mut self.ui, Some(&mut search));
        self.sync_sidebar();
        consumed
    }

    pub fn toggle_sidebar(&mut self) {
        self.ui.sidebar.toggle();
        self.sync_sidebar();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.ui.theme.toggle(&mut self.storage);
        self.apply_theme_to_widgets();
        self.update_menu_checkbox("View/Toggle Dark Mode", self.ui.theme.is_dark());
    }

    /// Rebuild the sidebar page list from the current search query.
    pub fn refresh_browser(&mut self) {
        let query = self.search.value();
        self.visible = content::filter_pages(&self.pages, &query);
        self.browser.clear();
        for &index in &self.visible {
            self.browser.add(&self.pages[index].title);
        }
    }

    /// Show the page behind the given browser line (1-based).
    pub fn open_page(&mut self, line: usize) {
        let Some(&index) = line.checked_sub(1).and_then(|i| self.visible.get(i)) else {
            return;
        };
        let page = &self.pages[index];

        match content::render_page(&page.path) {
            Ok(html) => {
                self.content.set_value(&html);
                self.current = Some(index);
                self.wind
                    .set_label(&format!("{} - \u{1f980} FerrisDocs", page.title));
            }
            Err(e) => eprintln!("Failed to render {}: {}", page.path.display(), e),
        }
    }

    /// Open the current page's source file with the system handler.
    pub fn open_current_in_browser(&self) {
        if let Some(index) = self.current {
            if let Err(e) = open::that(&self.pages[index].path) {
                eprintln!("Failed to open page externally: {}", e);
            }
        }
    }

    fn sync_sidebar(&mut self) {
        if self.ui.sidebar.open {
            self.row.fixed(&self.sidebar, SIDEBAR_WIDTH);
            self.sidebar.show();
        } else {
            self.row.fixed(&self.sidebar, 0);
            self.sidebar.hide();
        }
        // Nudge the flex row so it re-layouts with the new fixed width
        let (x, y, w, h) = (self.row.x(), self.row.y(), self.row.w(), self.row.h());
        self.row.resize(x, y, w, h);
        self.wind.redraw();
    }

    fn apply_theme_to_widgets(&mut self) {
        apply_theme(
            &mut self.wind,
            &mut self.menu,
            &mut self.search,
            &mut self.browser,
            &mut self.content,
            self.ui.theme.is_dark(),
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.wind, self.ui.theme.is_dark());
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}

/// Focusing the search box only works once the sidebar holding it is showing.
fn must_reveal_sidebar(action: ShortcutAction, sidebar: SidebarState) -> bool {
    action == ShortcutAction::FocusSearch && !sidebar.open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_search_reveals_closed_sidebar() {
        assert!(must_reveal_sidebar(
            ShortcutAction::FocusSearch,
            SidebarState { open: false }
        ));
        assert!(!must_reveal_sidebar(
            ShortcutAction::FocusSearch,
            SidebarState { open: true }
        ));
    }

    #[test]
    fn test_other_actions_leave_sidebar_alone() {
        assert!(!must_reveal_sidebar(
            ShortcutAction::Dismiss,
            SidebarState { open: false }
        ));
        assert!(!must_reveal_sidebar(
            ShortcutAction::ToggleSidebar,
            SidebarState { open: false }
        ));
    }
}
