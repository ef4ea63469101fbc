//! Window size validation.

use crate::schema::CasementConfig;

use super::helpers::validate_range;

pub(crate) const MIN_WINDOW_EDGE: u32 = 100;
pub(crate) const MAX_WINDOW_EDGE: u32 = 16384;

/// Validate the preferred window size, when one is configured.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &CasementConfig) {
    if let Some(width) = config.window.width {
        validate_range(errors, "window.width", width, MIN_WINDOW_EDGE, MAX_WINDOW_EDGE);
    }
    if let Some(height) = config.window.height {
        validate_range(errors, "window.height", height, MIN_WINDOW_EDGE, MAX_WINDOW_EDGE);
    }
}
