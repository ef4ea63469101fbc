//! The host window as seen by the window-state code.

use casement_common::Rect;

/// A native window owned by the host GUI framework.
pub trait HostWindow {
    /// Current outer position and size.
    fn bounds(&self) -> Rect;

    fn set_bounds(&mut self, bounds: Rect);

    fn is_minimized(&self) -> bool;

    fn is_maximized(&self) -> bool;

    /// Show or hide the developer tools, where the host has them.
    fn toggle_dev_tools(&mut self) {}
}

/// An in-memory window with no native counterpart.
///
/// Backs the CLI and tests: it records what the window-state code asks
/// of it and reports whatever state it was put in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessWindow {
    bounds: Option<Rect>,
    minimized: bool,
    maximized: bool,
    dev_tools_open: bool,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves and resizes the window as a user drag would, leaving the
    /// minimized and maximized states.
    pub fn move_to(&mut self, bounds: Rect) {
        self.minimized = false;
        self.maximized = false;
        self.bounds = Some(bounds);
    }

    /// Maximizes onto `display`; reported bounds become the display's.
    pub fn maximize(&mut self, display: Rect) {
        self.maximized = true;
        self.minimized = false;
        self.bounds = Some(display);
    }

    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    pub fn dev_tools_open(&self) -> bool {
        self.dev_tools_open
    }
}

impl HostWindow for HeadlessWindow {
    fn bounds(&self) -> Rect {
        self.bounds.unwrap_or(Rect::new(0, 0, 0, 0))
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn is_minimized(&self) -> bool {
        self.minimized
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn toggle_dev_tools(&mut self) {
        self.dev_tools_open = !self.dev_tools_open;
    }
}
