//! Base widget trait and types

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lumen_core::{LayoutDirection, Rect};

use crate::accessibility::AccessibilityBridge;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique widget identifier
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Host resized or moved the widget; triggers layout
    fn set_bounds(&mut self, bounds: Rect);

    /// Effective layout direction changed; triggers layout
    fn set_layout_direction(&mut self, direction: LayoutDirection);

    /// Advance animations and timers by `dt` (call each frame)
    fn update(&mut self, dt: Duration, accessibility: &mut dyn AccessibilityBridge);

    /// Whether any animation is still running
    fn is_animating(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }
}
