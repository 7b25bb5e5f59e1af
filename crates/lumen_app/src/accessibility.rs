use lumen_widgets::{AccessibilityBridge, WidgetId};
use tracing::info;

/// A value-changed announcement posted by a widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub widget: WidgetId,
    pub value: String,
}

/// Accessibility bridge that keeps every announcement in memory.
///
/// Stands in for a screen reader in headless runs and tests.
#[derive(Debug, Default)]
pub struct RecordingAccessibility {
    focused: Option<WidgetId>,
    announcements: Vec<Announcement>,
}

impl RecordingAccessibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move assistive focus to `widget`, or clear it with `None`
    pub fn set_focused(&mut self, widget: Option<WidgetId>) {
        self.focused = widget;
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn take_announcements(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.announcements)
    }
}

impl AccessibilityBridge for RecordingAccessibility {
    fn is_focused(&self, widget: WidgetId) -> bool {
        self.focused == Some(widget)
    }

    fn post_value_changed(&mut self, widget: WidgetId, value: &str) {
        info!(?widget, value, "value changed");
        self.announcements.push(Announcement {
            widget,
            value: value.to_string(),
        });
    }
}
