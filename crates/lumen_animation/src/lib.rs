//! Lumen Animation System
//!
//! Timed transitions driven by an explicit clock.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible cubic bezier curves and common presets
//! - **Timing**: duration + curve descriptors injected from design tokens
//! - **Scheduler**: keyed animations that hand their completion back to the owner
//! - **Debounce**: restartable one-shot timers
//!
//! Nothing here reads the wall clock. Owners advance time with `tick`/`advance`
//! so tests and headless hosts stay deterministic.

pub mod easing;
pub mod interpolate;
pub mod scheduler;
pub mod timer;
pub mod timing;

pub use easing::Easing;
pub use interpolate::Interpolate;
pub use scheduler::{AnimationId, AnimationScheduler, Completion, FinishedAnimation};
pub use timer::DebounceTimer;
pub use timing::AnimationTiming;
