//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Size used when the config leaves `width`/`height` unset.
pub const FALLBACK_WINDOW_WIDTH: u32 = 800;
pub const FALLBACK_WINDOW_HEIGHT: u32 = 600;

/// Main window settings.
///
/// `width`/`height` are the preferred size used to build the centered
/// default geometry; a restored geometry from a previous session wins
/// when it is still visible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Run page content isolated from the host process.
    pub isolated: bool,
    /// Script injected before page content loads. Empty for none.
    pub preload: String,
    pub title: String,
}

impl WindowConfig {
    /// Configured size, with the fallback applied per axis.
    pub fn preferred_size(&self) -> (u32, u32) {
        (
            self.width.unwrap_or(FALLBACK_WINDOW_WIDTH),
            self.height.unwrap_or(FALLBACK_WINDOW_HEIGHT),
        )
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            isolated: true,
            preload: String::new(),
            title: "Casement".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
