//! Display topology queries.
//!
//! The host GUI framework owns the real monitor list; the window-state
//! code only needs the bounds, asked for fresh on every restore.

use casement_common::{PlatformError, Rect};

/// Reports the bounds of connected displays in desktop coordinates.
pub trait DisplayQuery {
    /// Bounds of the primary display.
    fn primary(&self) -> Result<Rect, PlatformError>;

    /// Bounds of every connected display, primary included.
    fn all(&self) -> Result<Vec<Rect>, PlatformError>;
}

impl<D: DisplayQuery + ?Sized> DisplayQuery for &D {
    fn primary(&self) -> Result<Rect, PlatformError> {
        (**self).primary()
    }

    fn all(&self) -> Result<Vec<Rect>, PlatformError> {
        (**self).all()
    }
}

/// A fixed display layout. The first display is the primary one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDisplays {
    displays: Vec<Rect>,
}

impl StaticDisplays {
    pub fn new(displays: Vec<Rect>) -> Self {
        Self { displays }
    }

    pub fn single(bounds: Rect) -> Self {
        Self::new(vec![bounds])
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

impl DisplayQuery for StaticDisplays {
    fn primary(&self) -> Result<Rect, PlatformError> {
        self.displays
            .first()
            .copied()
            .ok_or_else(|| PlatformError::DisplayError("no displays connected".into()))
    }

    fn all(&self) -> Result<Vec<Rect>, PlatformError> {
        Ok(self.displays.clone())
    }
}
