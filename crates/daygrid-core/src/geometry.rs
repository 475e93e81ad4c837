#![forbid(unsafe_code)]

//! Pixel-space geometry.

/// The content box events are positioned within, in pixels.
///
/// Padding is the caller's concern: `left`/`top` already point at the first
/// usable pixel and `width`/`height` cover only the usable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerGeometry {
    /// Left edge of the content box.
    pub left: f32,
    /// Top edge of the content box.
    pub top: f32,
    /// Usable width.
    pub width: f32,
    /// Usable height.
    pub height: f32,
}

impl ContainerGeometry {
    /// Create a content box.
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// An event frame in container pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl PxRect {
    /// Create a frame from its four edges.
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Frame width (negative when degenerate).
    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Frame height (negative when degenerate).
    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_extents() {
        let geometry = ContainerGeometry::new(4.0, 10.0, 100.0, 480.0);
        assert_eq!(geometry.right(), 104.0);
        assert_eq!(geometry.bottom(), 490.0);

        let frame = PxRect::new(4.0, 10.0, 54.0, 70.0);
        assert_eq!(frame.width(), 50.0);
        assert_eq!(frame.height(), 60.0);
    }
}
