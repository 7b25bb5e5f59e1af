//! Linear interpolation of animatable values

use lumen_core::{Point, Rect, Size};

/// A value that can be blended between two endpoints
pub trait Interpolate: Copy {
    /// Blend from `self` (t = 0) to `to` (t = 1)
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Point {
    fn lerp(self, to: Self, t: f32) -> Self {
        Point::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
    }
}

impl Interpolate for Size {
    fn lerp(self, to: Self, t: f32) -> Self {
        Size::new(self.width.lerp(to.width, t), self.height.lerp(to.height, t))
    }
}

impl Interpolate for Rect {
    fn lerp(self, to: Self, t: f32) -> Self {
        Rect {
            origin: self.origin.lerp(to.origin, t),
            size: self.size.lerp(to.size, t),
        }
    }
}
