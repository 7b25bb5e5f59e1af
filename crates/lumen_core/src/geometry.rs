//! Geometry in logical pixels
//!
//! Origins are top-left, `y` grows downward.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Same rect with a different height, origin unchanged
    pub fn with_height(self, height: f32) -> Self {
        Rect::new(self.origin.x, self.origin.y, self.size.width, height)
    }

    /// Same rect with a different y origin
    pub fn with_y(self, y: f32) -> Self {
        Rect::new(self.origin.x, y, self.size.width, self.size.height)
    }

    /// Mirror the rect about a container of the given width.
    ///
    /// `x` becomes `container_width - max_x`; used to lay out for RTL.
    pub fn flipped_horizontally(self, container_width: f32) -> Self {
        Rect::new(
            container_width - self.max_x(),
            self.origin.y,
            self.size.width,
            self.size.height,
        )
    }
}

/// Effective horizontal layout direction of a view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }

    /// Place `frame` inside a container of `container_width` for this direction
    pub fn resolve(self, frame: Rect, container_width: f32) -> Rect {
        match self {
            LayoutDirection::LeftToRight => frame,
            LayoutDirection::RightToLeft => frame.flipped_horizontally(container_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_mirrors_about_container() {
        let frame = Rect::new(0.0, 0.0, 100.0, 4.0);
        assert_eq!(frame.flipped_horizontally(200.0), Rect::new(100.0, 0.0, 100.0, 4.0));

        let frame = Rect::new(20.0, 1.0, 30.0, 4.0);
        assert_eq!(frame.flipped_horizontally(200.0), Rect::new(150.0, 1.0, 30.0, 4.0));
    }

    #[test]
    fn test_direction_resolve() {
        let frame = Rect::new(0.0, 0.0, 50.0, 2.0);
        assert_eq!(LayoutDirection::LeftToRight.resolve(frame, 80.0), frame);
        assert_eq!(
            LayoutDirection::RightToLeft.resolve(frame, 80.0),
            Rect::new(30.0, 0.0, 50.0, 2.0)
        );
    }

    #[test]
    fn test_rect_helpers() {
        let r = Rect::new(1.0, 2.0, 10.0, 4.0);
        assert_eq!(r.max_x(), 11.0);
        assert_eq!(r.max_y(), 6.0);
        assert_eq!(r.with_height(0.0).with_y(4.0), Rect::new(1.0, 4.0, 10.0, 0.0));
        assert!(r.with_height(0.0).is_empty());
        assert_eq!(Rect::from(Size::new(3.0, 5.0)), Rect::new(0.0, 0.0, 3.0, 5.0));
    }
}
