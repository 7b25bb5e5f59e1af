//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Motion durations and easings
//! - Accessibility timings

mod accessibility;
mod color;
mod motion;

pub use accessibility::*;
pub use color::*;
pub use motion::*;
