/// Session-local visibility of the navigation sidebar.
///
/// Never persisted; every launch starts with the sidebar closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }
}
