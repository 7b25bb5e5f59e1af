//! Lumen Widget Library
//!
//! Widgets driven by an explicit host: the host pushes bounds and layout
//! direction, ticks time through [`Widget::update`], and delivers
//! accessibility announcements through an [`AccessibilityBridge`].

pub mod accessibility;
pub mod progress_view;
pub mod widget;

pub use accessibility::{AccessibilityBridge, AccessibilityTraits};
pub use progress_view::{default_track_color, BackwardAnimationMode, ProgressView};
pub use widget::{Widget, WidgetId};

pub use lumen_animation::Completion;
