use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PlatformError;

/// A window or display rectangle in desktop coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Returns `true` if `other` lies entirely inside `self`.
    ///
    /// Edges may touch. Computed in `i64` so rectangles near the `i32`
    /// limits do not overflow.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// A `width` x `height` rectangle centered in `area`'s extent.
    ///
    /// Only the area's size is used, so the result is relative to the
    /// desktop origin. Offsets floor toward negative infinity and go
    /// negative when the window is larger than the area.
    pub fn centered_in(area: &Rect, width: i32, height: i32) -> Self {
        let x = (area.width as i64 - width as i64).div_euclid(2);
        let y = (area.height as i64 - height as i64).div_euclid(2);
        Self {
            x: x as i32,
            y: y as i32,
            width,
            height,
        }
    }
}

impl fmt::Display for Rect {
    /// X11 geometry form: `800x600+100+100`, `800x600-1920+0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{:+}{:+}", self.width, self.height, self.x, self.y)
    }
}

impl FromStr for Rect {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlatformError::InvalidGeometry(s.to_string());
        let s = s.trim();

        let (width, rest) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let offset_at = rest.find(['+', '-']).ok_or_else(invalid)?;
        let (height, offsets) = rest.split_at(offset_at);

        // Second sign marks the start of the y offset.
        let y_at = offsets[1..]
            .find(['+', '-'])
            .map(|i| i + 1)
            .ok_or_else(invalid)?;
        let (x, y) = offsets.split_at(y_at);

        let parse = |v: &str| v.parse::<i32>().map_err(|_| invalid());
        let width = parse(width)?;
        let height = parse(height)?;
        if width < 0 || height < 0 {
            return Err(invalid());
        }

        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
            width,
            height,
        })
    }
}
