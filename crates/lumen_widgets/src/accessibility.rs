//! Accessibility plumbing shared by widgets

use std::time::Duration;

use lumen_animation::DebounceTimer;
use tracing::debug;

use crate::widget::WidgetId;

/// Host-side delivery of accessibility notifications
pub trait AccessibilityBridge {
    /// Whether assistive technology currently focuses `widget`
    fn is_focused(&self, widget: WidgetId) -> bool;

    /// Announce that the value of `widget` changed to `value`
    fn post_value_changed(&mut self, widget: WidgetId, value: &str);
}

/// Static accessibility traits a widget reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityTraits {
    /// The value changes often; screen readers should poll rather than interrupt
    pub updates_frequently: bool,
}

/// Debounced value-change announcements for one widget.
///
/// Every [`ValueAnnouncer::schedule`] replaces the pending announcement, so a
/// burst of changes yields one announcement carrying the value at fire time.
#[derive(Clone, Debug)]
pub(crate) struct ValueAnnouncer {
    timer: DebounceTimer,
}

impl ValueAnnouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            timer: DebounceTimer::new(delay),
        }
    }

    pub(crate) fn set_delay(&mut self, delay: Duration) {
        self.timer.set_delay(delay);
    }

    pub(crate) fn schedule(&mut self) {
        self.timer.schedule();
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Advance the timer; when it fires and `widget` has focus, announce `value()`
    pub(crate) fn poll(
        &mut self,
        dt: Duration,
        widget: WidgetId,
        bridge: &mut dyn AccessibilityBridge,
        value: impl FnOnce() -> String,
    ) -> bool {
        if !self.timer.advance(dt) {
            return false;
        }
        if !bridge.is_focused(widget) {
            debug!(?widget, "value announcement dropped, widget not focused");
            return false;
        }
        let value = value();
        debug!(?widget, %value, "announcing value change");
        bridge.post_value_changed(widget, &value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Bridge {
        focused: Option<WidgetId>,
        posted: Vec<String>,
    }

    impl AccessibilityBridge for Bridge {
        fn is_focused(&self, widget: WidgetId) -> bool {
            self.focused == Some(widget)
        }

        fn post_value_changed(&mut self, _widget: WidgetId, value: &str) {
            self.posted.push(value.to_string());
        }
    }

    #[test]
    fn test_announces_only_with_focus() {
        let id = WidgetId::next();
        let mut bridge = Bridge::default();
        let mut announcer = ValueAnnouncer::new(Duration::from_secs(1));

        announcer.schedule();
        assert!(!announcer.poll(Duration::from_secs(1), id, &mut bridge, || "a".into()));
        assert!(bridge.posted.is_empty());

        bridge.focused = Some(id);
        announcer.schedule();
        assert!(announcer.poll(Duration::from_secs(1), id, &mut bridge, || "b".into()));
        assert_eq!(bridge.posted, vec!["b".to_string()]);
        assert!(!announcer.is_pending());
    }
}
