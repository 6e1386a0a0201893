//! Axis-aligned bounding boxes in viewport units.
//!
//! The viewport's left boundary is `x = 0` and its right boundary is
//! `x = viewport_width`.  Items travel toward decreasing `x`.

/// An axis-aligned rectangle.  `x`/`y` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Left edge.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Right (leading-on-entry) edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + self.height * 0.5
    }

    /// Same size and `y`, moved horizontally so the left edge sits at `x`.
    #[inline]
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }
}
