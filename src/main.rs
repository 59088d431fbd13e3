use std::cell::RefCell;
use std::env;
use std::path::PathBuf;
use std::rc::Rc;

use fltk::{
    app, dialog,
    enums::{Event, Key},
    prelude::*,
};

use ferris_docs::app::domain::shortcuts::{self, KeyCombo, KeyPress, ShortcutAction};
use ferris_docs::app::services::content;
use ferris_docs::app::state::AppState;
use ferris_docs::app::{
    JsonFileStorage, Message, SidebarState, ThemePrefs, UiState, detect_system_dark_mode,
};
use ferris_docs::ui::main_window::build_main_window;
use ferris_docs::ui::menu::build_menu;

/// Translate the current FLTK key event into a combo the dispatcher knows,
/// or None for keys that cannot be bound.
fn current_key_combo() -> Option<KeyCombo> {
    let key = app::event_key();
    let press = if key == Key::Escape {
        KeyPress::Escape
    } else if key == Key::from_char('e') {
        KeyPress::Char('e')
    } else if key == Key::from_char('k') {
        KeyPress::Char('k')
    } else {
        return None;
    };

    Some(KeyCombo {
        ctrl: app::is_event_ctrl(),
        command: app::is_event_command(),
        key: press,
    })
}

fn show_about() {
    dialog::message_default(&format!(
        "\u{1f980} FerrisDocs {}\n\nA minimalist viewer for static markdown sites.",
        env!("CARGO_PKG_VERSION")
    ));
}

fn main() {
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let site_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let pages = match content::scan_site(&site_dir) {
        Ok(pages) => pages,
        Err(e) => {
            dialog::alert_default(&format!("Error reading site directory: {}", e));
            Vec::new()
        }
    };

    let mut storage = JsonFileStorage::load();
    let theme = ThemePrefs::init(&mut storage, detect_system_dark_mode());
    let ui = UiState {
        theme,
        sidebar: SidebarState::default(),
    };

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, theme.is_dark());

    let mut wind = widgets.wind.clone();
    let state = Rc::new(RefCell::new(AppState::new(widgets, storage, pages, ui)));

    wind.show();
    // Needs a valid HWND, so only after show()
    #[cfg(target_os = "windows")]
    ferris_docs::ui::theme::set_windows_titlebar_theme(&wind, theme.is_dark());

    // Global shortcut handler. Returning true consumes the event, which
    // suppresses FLTK's default handling for bound combinations.
    wind.handle({
        let state = state.clone();
        move |_, event| {
            if event != Event::KeyDown {
                return false;
            }
            match current_key_combo().and_then(shortcuts::resolve) {
                Some(action) => state.borrow_mut().handle_shortcut(action),
                None => false,
            }
        }
    });

    // An unconsumed Escape must not fall through to FLTK's close-window
    // default; quitting stays on the Quit menu item and the window manager.
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            sender.send(Message::Quit);
        }
    });

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::ToggleSidebar => state.borrow_mut().toggle_sidebar(),
                Message::ToggleDarkMode => state.borrow_mut().toggle_dark_mode(),
                Message::FocusSearch => {
                    state.borrow_mut().handle_shortcut(ShortcutAction::FocusSearch);
                }
                Message::SearchChanged => state.borrow_mut().refresh_browser(),
                Message::PageSelected(line) => state.borrow_mut().open_page(line),
                Message::OpenInBrowser => state.borrow().open_current_in_browser(),
                Message::ShowAbout => show_about(),
                Message::Quit => app.quit(),
            }
        }
    }
}
