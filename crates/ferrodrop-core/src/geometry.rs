use crate::math::{Axis, Vec2};

/// Axis-aligned rectangle.
///
/// `x`/`y` are the left/top edges. Edges are inclusive for hit testing, so a
/// point on the shared border of two adjacent rectangles hits both; callers
/// that care pick the first match.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from `top, left, width, height`, the order DOM measurements use.
    pub const fn from_tlwh(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self::new(left, top, width, height)
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Whether the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Start edge along `axis` (left for X, top for Y).
    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Extent along `axis` (width for X, height for Y).
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Midpoint along `axis`.
    pub fn midpoint(&self, axis: Axis) -> f32 {
        self.start(axis) + self.extent(axis) / 2.0
    }

    /// Whether `value` lies within the rectangle's span on `axis`.
    pub fn spans(&self, axis: Axis, value: f32) -> bool {
        let start = self.start(axis);
        value >= start && value <= start + self.extent(axis)
    }

    /// Position of `value` along `axis` as a fraction of the extent.
    ///
    /// Returns `None` for rectangles with no extent on that axis.
    pub fn fraction(&self, axis: Axis, value: f32) -> Option<f32> {
        let extent = self.extent(axis);
        if extent <= 0.0 {
            return None;
        }
        Some((value - self.start(axis)) / extent)
    }
}
