use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;

/// Build the menu bar. Entries mirror the keyboard shortcuts but declare no
/// FLTK shortcut of their own: the global key handler in main owns Ctrl/Cmd+E,
/// Ctrl/Cmd+K and Escape, and declaring them here too would dispatch twice.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/Open Page in Browser", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenInBrowser) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // View
    menu.add("View/Toggle Sidebar", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleSidebar) });
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Go
    menu.add("Go/Search", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FocusSearch) });

    // Help
    menu.add("Help/About FerrisDocs", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
