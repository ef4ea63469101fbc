//! Window geometry persistence and the window owner built on it.
//!
//! A window's last good rectangle is saved when it closes and restored on
//! the next launch, provided it still fits entirely on one of the
//! connected displays. Otherwise the window starts centered on the
//! primary display at its preferred size.

pub mod app_window;
pub mod host;
pub mod state;
pub mod store;

pub use app_window::{AppWindow, KeyPress, WebPreferences, WindowEvent, WindowEventKind};
pub use host::{HeadlessWindow, HostWindow};
pub use state::{GeometrySource, Phase, Resolution, WindowStateManager};
pub use store::{GeometryStore, JsonFileStore, MemoryStore};
