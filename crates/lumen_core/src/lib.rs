//! Lumen Core Types
//!
//! Foundational value types shared by every Lumen crate:
//!
//! - **Geometry**: points, sizes and rectangles in logical pixels
//! - **Layout direction**: left-to-right / right-to-left mirroring
//! - **Color**: RGBA colors with hue/saturation/brightness conversion

pub mod color;
pub mod geometry;

pub use color::{Color, Hsba};
pub use geometry::{LayoutDirection, Point, Rect, Size};
