use fltk::{
    app,
    browser::HoldBrowser,
    enums::Color,
    input::Input,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    window::Window,
};

/// Widget colors for one theme.
///
/// The light palette follows the warm paper look of the site's "retro" theme,
/// the dark palette its blue-black "night" theme.
pub struct Palette {
    pub window: Color,
    pub pane: Color,
    pub text: Color,
    pub menu: Color,
    pub menu_text: Color,
    pub selection: Color,
    pub input: Color,
}

fn retro() -> Palette {
    Palette {
        window: Color::from_rgb(228, 216, 180),
        pane: Color::from_rgb(236, 227, 202),
        text: Color::from_rgb(40, 36, 37),
        menu: Color::from_rgb(236, 227, 202),
        menu_text: Color::from_rgb(40, 36, 37),
        selection: Color::from_rgb(239, 152, 149),
        input: Color::from_rgb(245, 238, 217),
    }
}

fn night() -> Palette {
    Palette {
        window: Color::from_rgb(11, 18, 33),
        pane: Color::from_rgb(15, 23, 42),
        text: Color::from_rgb(200, 203, 208),
        menu: Color::from_rgb(22, 31, 51),
        menu_text: Color::from_rgb(200, 203, 208),
        selection: Color::from_rgb(56, 189, 248),
        input: Color::from_rgb(30, 41, 59),
    }
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark { night() } else { retro() }
}

/// Apply a theme to the live widgets.
pub fn apply_theme(
    window: &mut Window,
    menu: &mut MenuBar,
    search: &mut Input,
    browser: &mut HoldBrowser,
    content: &mut HelpView,
    is_dark: bool,
) {
    let p = palette(is_dark);

    // Scheme-wide defaults first so widgets without explicit colors
    // (browser items, scrollbars) follow along
    let (wr, wg, wb) = p.window.to_rgb();
    app::background(wr, wg, wb);
    let (pr, pg, pb) = p.pane.to_rgb();
    app::background2(pr, pg, pb);
    let (tr, tg, tb) = p.text.to_rgb();
    app::foreground(tr, tg, tb);

    window.set_color(p.window);
    window.set_label_color(p.text);

    menu.set_color(p.menu);
    menu.set_text_color(p.menu_text);
    menu.set_selection_color(p.selection);

    search.set_color(p.input);
    search.set_text_color(p.text);
    search.set_cursor_color(p.text);
    search.set_selection_color(p.selection);

    browser.set_color(p.pane);
    browser.set_selection_color(p.selection);

    content.set_color(p.pane);
    content.set_text_color(p.text);

    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 (Windows 11 / Windows 10 2004+), then 19 for
        // 1809-1903 builds that used the undocumented value
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
