//! Lumen host runtime
//!
//! Drives widgets frame by frame without a window and records what they
//! announce to assistive technology.
//!
//! # Example
//!
//! ```
//! use lumen_app::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut view = ProgressView::new();
//!     let mut a11y = RecordingAccessibility::new();
//!     a11y.set_focused(Some(view.id()));
//!
//!     let cfg = HeadlessRunConfig { width: 200, height: 4, max_frames: 80, tick_ms: 16 };
//!     HeadlessRuntime::run(cfg, &mut view, &mut a11y, |ctx, view| {
//!         if ctx.frame_index == 0 {
//!             view.set_progress_animated(0.5, true, None);
//!         }
//!     })?;
//!
//!     assert_eq!(view.fill_frame().width(), 100.0);
//!     assert_eq!(a11y.announcements()[0].value, "fifty percent");
//!     Ok(())
//! }
//! ```

mod accessibility;
mod headless;


pub use accessibility::{Announcement, RecordingAccessibility};
pub use headless::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::accessibility::{Announcement, RecordingAccessibility};
    pub use crate::headless::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};

    pub use lumen_core::{Color, LayoutDirection, Rect, Size};
    pub use lumen_i18n::{PercentFormat, PercentStyle};
    pub use lumen_theme::Theme;
    pub use lumen_widgets::{
        AccessibilityBridge, BackwardAnimationMode, Completion, ProgressView, Widget, WidgetId,
    };
}
