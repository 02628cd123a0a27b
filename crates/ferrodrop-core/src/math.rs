/// Vector math backed by [`glam`].
///
/// Pointer positions, offsets and deltas are all [`Vec2`] values in the
/// host's coordinate space (y grows downward for screen surfaces).
///
/// ```
/// use ferrodrop_core::math::Vec2;
///
/// let pointer = Vec2::new(120.0, 48.0);
/// let grab = Vec2::new(20.0, 8.0);
/// assert_eq!(pointer - grab, Vec2::new(100.0, 40.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::{Vec2, vec2};

/// Axis along which a one-dimensional collection is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Left to right.
    X,
    /// Top to bottom.
    #[default]
    Y,
}

impl Axis {
    /// Component of `v` along this axis.
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// The other axis.
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_component() {
        let v = Vec2::new(3.0, 7.0);
        assert_eq!(Axis::X.of(v), 3.0);
        assert_eq!(Axis::Y.of(v), 7.0);
        assert_eq!(Axis::X.perpendicular(), Axis::Y);
    }
}
