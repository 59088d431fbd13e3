/// All messages that can be sent through the FLTK channel.
/// Menu callbacks and widget callbacks send one of these; the dispatch loop
/// in main handles them. Keyboard shortcuts bypass the channel because their
/// handler must decide synchronously whether the event was consumed.
#[derive(Debug, Clone)]
pub enum Message {
    // View
    ToggleSidebar,
    ToggleDarkMode,

    // Search
    FocusSearch,
    SearchChanged,

    // Navigation
    PageSelected(usize),
    OpenInBrowser,

    // App
    ShowAbout,
    Quit,
}
