//! Lumen Theme System
//!
//! Design tokens consumed by Lumen widgets.
//!
//! A [`Theme`] is a plain value: widgets receive it explicitly, there is no
//! process-wide theme state. Load one from TOML with [`Theme::from_toml_str`]
//! or [`Theme::load`], or start from [`Theme::default`].
//!
//! # Tokens
//!
//! - [`ColorTokens`]: semantic colors
//! - [`MotionTokens`]: durations and easings, converted to
//!   [`lumen_animation::AnimationTiming`] for the scheduler
//! - [`AccessibilityTokens`]: announcement timing

mod error;
pub mod theme;
pub mod tokens;

pub use error::ThemeError;
pub use theme::Theme;
pub use tokens::*;
