//! Pure geometry decisions: the centered default and the visibility check.

use casement_common::Rect;

/// Where a resolved geometry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometrySource {
    /// Saved geometry, still fully visible on a display.
    Restored,
    /// Nothing was saved for this window.
    Default,
    /// Saved geometry no longer fits on any display.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub geometry: Rect,
    pub source: GeometrySource,
}

/// Preferred size centered on the primary display.
///
/// Without primary bounds the window is placed at the origin. Sizes past
/// `i32::MAX` saturate.
pub fn default_geometry(primary: Option<Rect>, (width, height): (u32, u32)) -> Rect {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    match primary {
        Some(primary) => Rect::centered_in(&primary, width, height),
        None => Rect::new(0, 0, width, height),
    }
}

/// `true` when `candidate` has a positive size and fits entirely inside
/// at least one display. Straddling two displays does not count.
pub fn is_visible(candidate: &Rect, displays: &[Rect]) -> bool {
    candidate.width > 0
        && candidate.height > 0
        && displays.iter().any(|display| display.contains(candidate))
}

/// Picks the saved geometry when it is visible, the default otherwise.
///
/// Invisible geometry is replaced wholesale rather than nudged onto a
/// display.
pub fn ensure_visible(saved: Option<Rect>, default: Rect, displays: &[Rect]) -> Resolution {
    match saved {
        Some(saved) if is_visible(&saved, displays) => Resolution {
            geometry: saved,
            source: GeometrySource::Restored,
        },
        Some(_) => Resolution {
            geometry: default,
            source: GeometrySource::Reset,
        },
        None => Resolution {
            geometry: default,
            source: GeometrySource::Default,
        },
    }
}
