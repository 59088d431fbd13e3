use fltk::{
    app::Sender,
    browser::HoldBrowser,
    enums::CallbackTrigger,
    group::Flex,
    input::Input,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    window::Window,
};

use crate::app::messages::Message;

pub const SIDEBAR_WIDTH: i32 = 220;
pub const MENU_HEIGHT: i32 = 30;
pub const SEARCH_HEIGHT: i32 = 28;

pub struct MainWidgets {
    pub wind: Window,
    pub row: Flex,
    pub menu: MenuBar,
    pub sidebar: Flex,
    pub search: Input,
    pub browser: HoldBrowser,
    pub content: HelpView,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "\u{1f980} FerrisDocs");
    wind.set_xclass("FerrisDocs");

    let mut column = Flex::new(0, 0, 800, 600, None);
    column.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    column.fixed(&menu, MENU_HEIGHT);

    let mut row = Flex::new(0, 0, 0, 0, None);
    row.set_type(fltk::group::FlexType::Row);

    // Sidebar: search box over the page list. Starts hidden; the visibility
    // store opens it.
    let mut sidebar = Flex::new(0, 0, 0, 0, None);
    sidebar.set_type(fltk::group::FlexType::Column);

    let mut search = Input::new(0, 0, 0, 0, None);
    search.set_tooltip("Filter pages (Ctrl+K)");
    sidebar.fixed(&search, SEARCH_HEIGHT);

    let mut browser = HoldBrowser::new(0, 0, 0, 0, "");
    sidebar.end();

    row.fixed(&sidebar, 0);
    sidebar.hide();

    let content = HelpView::new(0, 0, 0, 0, "");

    row.end();
    column.end();
    wind.resizable(&column);
    wind.end();

    search.set_trigger(CallbackTrigger::Changed);
    search.set_callback({
        let s = *sender;
        move |_| s.send(Message::SearchChanged)
    });

    browser.set_callback({
        let s = *sender;
        move |b| {
            let line = b.value();
            if line > 0 {
                s.send(Message::PageSelected(line as usize));
            }
        }
    });

    MainWidgets {
        wind,
        row,
        menu,
        sidebar,
        search,
        browser,
        content,
    }
}
