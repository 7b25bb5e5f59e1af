//! Linear progress indicator
//!
//! Two layers: the *track* spans the full bounds, the *fill* covers
//! `ceil(progress * width)` from the leading edge. Progress and visibility
//! changes can animate; animations run on the view's own
//! [`AnimationScheduler`] and are advanced by [`Widget::update`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use lumen_core::Rect;
//! use lumen_widgets::{AccessibilityBridge, ProgressView, Widget, WidgetId};
//!
//! struct NoScreenReader;
//! impl AccessibilityBridge for NoScreenReader {
//!     fn is_focused(&self, _: WidgetId) -> bool { false }
//!     fn post_value_changed(&mut self, _: WidgetId, _: &str) {}
//! }
//!
//! let mut view = ProgressView::new();
//! view.set_bounds(Rect::new(0.0, 0.0, 200.0, 4.0));
//! view.set_progress_animated(0.5, true, None);
//! while view.is_animating() {
//!     view.update(Duration::from_millis(16), &mut NoScreenReader);
//! }
//! assert_eq!(view.fill_frame(), Rect::new(0.0, 0.0, 100.0, 4.0));
//! ```

use std::time::Duration;

use lumen_animation::{AnimationId, AnimationScheduler, Completion, FinishedAnimation, Interpolate};
use lumen_core::{Color, LayoutDirection, Rect};
use lumen_i18n::{PercentFormat, PercentFormatter};
use lumen_theme::{ColorToken, MotionToken, MotionTokens, Theme};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::accessibility::{AccessibilityBridge, AccessibilityTraits, ValueAnnouncer};
use crate::widget::{Widget, WidgetId};

/// Saturation multiplier applied to the progress color for the default track
const TRACK_SATURATION_RATIO: f32 = 0.3;

const DEFAULT_ACCESSIBILITY_LABEL: &str = "Progress";

/// How the fill animates when progress decreases
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackwardAnimationMode {
    /// Snap the fill to empty, then animate up to the new value
    #[default]
    Reset,
    /// Animate straight from the old value down to the new one
    Continuous,
}

/// Track color derived from a progress color: same hue, brightness and
/// alpha, saturation scaled down. Colors without an HSB form give transparent.
pub fn default_track_color(progress_color: Color) -> Color {
    match progress_color.to_hsba() {
        Some(mut hsba) => {
            hsba.saturation = (hsba.saturation * TRACK_SATURATION_RATIO).min(1.0);
            Color::from_hsba(hsba)
        }
        None => {
            warn!(?progress_color, "progress color has no HSB form, track is transparent");
            Color::TRANSPARENT
        }
    }
}

/// How a computed frame is applied to a layer
#[derive(Clone, Copy, Debug)]
enum Apply {
    /// Update the model frame; a running animation retargets to it
    Set,
    /// Jump to the frame, detaching any running animation
    Snap,
    /// Animate from the presented frame to the new one
    Animate(AnimationId),
}

/// A visual layer with a model frame and an optional running animation
#[derive(Clone, Copy, Debug, Default)]
struct Layer {
    model: Rect,
    from: Rect,
    animation: Option<AnimationId>,
}

impl Layer {
    fn presented(&self, scheduler: &AnimationScheduler) -> Rect {
        match self.animation.and_then(|id| scheduler.fraction(id)) {
            Some(t) => self.from.lerp(self.model, t),
            None => self.model,
        }
    }

    fn apply(&mut self, frame: Rect, how: Apply, scheduler: &AnimationScheduler) {
        match how {
            Apply::Set => self.model = frame,
            Apply::Snap => {
                self.model = frame;
                self.from = frame;
                self.animation = None;
            }
            Apply::Animate(id) => {
                self.from = self.presented(scheduler);
                self.model = frame;
                self.animation = Some(id);
            }
        }
    }

    fn settle(&mut self, id: AnimationId) {
        if self.animation == Some(id) {
            self.animation = None;
            self.from = self.model;
        }
    }
}

/// Linear progress indicator
pub struct ProgressView {
    id: WidgetId,
    progress: f32,
    backward_mode: BackwardAnimationMode,

    theme_color: Color,
    progress_color: Option<Color>,
    track_color: Option<Color>,
    corner_radius: f32,

    bounds: Rect,
    layout_direction: LayoutDirection,
    hidden: bool,
    /// Set while a hide animation runs; layout is suppressed meanwhile
    animating_hide: bool,
    hide_animation: Option<AnimationId>,
    show_animation: Option<AnimationId>,
    /// Visibility animations overtaken by the opposite change; they complete with `false`
    superseded: SmallVec<[AnimationId; 2]>,

    fill: Layer,
    track: Layer,
    scheduler: AnimationScheduler,
    motion: MotionTokens,

    announcer: ValueAnnouncer,
    formatter: PercentFormatter,
    accessibility_label: String,
}

impl ProgressView {
    /// Create a progress view styled by the default theme
    pub fn new() -> Self {
        Self::with_theme(&Theme::default())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            id: WidgetId::next(),
            progress: 0.0,
            backward_mode: BackwardAnimationMode::default(),
            theme_color: theme.colors.get(ColorToken::Primary),
            progress_color: None,
            track_color: None,
            corner_radius: 0.0,
            bounds: Rect::ZERO,
            layout_direction: LayoutDirection::default(),
            hidden: false,
            animating_hide: false,
            hide_animation: None,
            show_animation: None,
            superseded: SmallVec::new(),
            fill: Layer::default(),
            track: Layer::default(),
            scheduler: AnimationScheduler::new(),
            motion: theme.motion.clone(),
            announcer: ValueAnnouncer::new(theme.accessibility.announcement_delay()),
            formatter: PercentFormatter::default(),
            accessibility_label: DEFAULT_ACCESSIBILITY_LABEL.to_string(),
        }
    }

    /// Re-apply theme colors and motion; explicit color overrides are kept
    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme_color = theme.colors.get(ColorToken::Primary);
        self.motion = theme.motion.clone();
        self.announcer
            .set_delay(theme.accessibility.announcement_delay());
    }

    // ========================================================================
    // Progress
    // ========================================================================

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Set progress without animation. Clamped to 0..=1; NaN reads as 0.
    pub fn set_progress(&mut self, progress: f32) {
        self.store_progress(progress);
        self.layout(Apply::Set);
    }

    /// Set progress, optionally animating the fill.
    ///
    /// Decreasing progress in [`BackwardAnimationMode::Reset`] first empties the
    /// fill, then animates up to the new value. Without animation `completion`
    /// runs before this returns; otherwise it runs from [`Widget::update`] once
    /// the animation ends.
    pub fn set_progress_animated(
        &mut self,
        progress: f32,
        animated: bool,
        completion: Option<Completion>,
    ) {
        let target = clamp_progress(progress);
        if target < self.progress && self.backward_mode == BackwardAnimationMode::Reset {
            self.store_progress(0.0);
            self.layout_progress(Apply::Snap);
        }
        self.store_progress(target);

        let timing = self.motion.timing(MotionToken::SetProgress);
        if !animated || timing.is_immediate() {
            self.layout_progress(Apply::Snap);
            if let Some(completion) = completion {
                completion(true);
            }
            return;
        }

        let id = self.scheduler.start(timing, completion);
        self.layout_progress(Apply::Animate(id));
    }

    fn store_progress(&mut self, progress: f32) {
        let progress = clamp_progress(progress);
        if progress != self.progress {
            debug!(id = ?self.id, from = self.progress, to = progress, "progress changed");
        }
        self.progress = progress;
        self.announcer.schedule();
    }

    pub fn backward_animation_mode(&self) -> BackwardAnimationMode {
        self.backward_mode
    }

    pub fn set_backward_animation_mode(&mut self, mode: BackwardAnimationMode) {
        self.backward_mode = mode;
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hidden state the view is at or heading to
    fn target_hidden(&self) -> bool {
        self.hidden || self.animating_hide
    }

    /// Collapse the view to its bottom edge, or expand it back.
    ///
    /// Asking for the state the view is already at (or animating to) only runs
    /// `completion(true)`. The hidden flag is set when the hide finishes.
    pub fn set_hidden(&mut self, hidden: bool, animated: bool, completion: Option<Completion>) {
        if hidden == self.target_hidden() {
            if let Some(completion) = completion {
                completion(true);
            }
            return;
        }
        debug!(id = ?self.id, hidden, animated, "visibility change");

        let timing = self.motion.timing(MotionToken::ShowHide);
        let animated = animated && !timing.is_immediate();

        if hidden {
            if let Some(pending) = self.show_animation.take() {
                self.superseded.push(pending);
            }
            let bottom = self.bounds.height();
            let track_end = self.track.model.with_height(0.0).with_y(bottom);
            let fill_end = self.fill.model.with_height(0.0).with_y(bottom);

            if !animated {
                self.track.apply(track_end, Apply::Snap, &self.scheduler);
                self.fill.apply(fill_end, Apply::Snap, &self.scheduler);
                self.hidden = true;
                if let Some(completion) = completion {
                    completion(true);
                }
                return;
            }

            self.animating_hide = true;
            let id = self.scheduler.start(timing, completion);
            self.hide_animation = Some(id);
            self.track.apply(track_end, Apply::Animate(id), &self.scheduler);
            self.fill.apply(fill_end, Apply::Animate(id), &self.scheduler);
        } else {
            if let Some(pending) = self.hide_animation.take() {
                self.superseded.push(pending);
            }
            self.animating_hide = false;
            self.hidden = false;

            let track_end = self.bounds.size.to_rect();
            let fill_end = self.fill_layout_frame();
            if !animated {
                self.track.apply(track_end, Apply::Snap, &self.scheduler);
                self.fill.apply(fill_end, Apply::Snap, &self.scheduler);
                if let Some(completion) = completion {
                    completion(true);
                }
                return;
            }

            let id = self.scheduler.start(timing, completion);
            self.show_animation = Some(id);
            self.track.apply(track_end, Apply::Animate(id), &self.scheduler);
            self.fill.apply(fill_end, Apply::Animate(id), &self.scheduler);
        }
    }

    // ========================================================================
    // Colors and shape
    // ========================================================================

    pub fn progress_color(&self) -> Color {
        self.progress_color.unwrap_or(self.theme_color)
    }

    /// `None` restores the theme's primary color
    pub fn set_progress_color(&mut self, color: Option<Color>) {
        self.progress_color = color;
    }

    /// Explicit track color, or the desaturated progress color
    pub fn track_color(&self) -> Color {
        self.track_color
            .unwrap_or_else(|| default_track_color(self.progress_color()))
    }

    /// `None` restores the derived track color
    pub fn set_track_color(&mut self, color: Option<Color>) {
        self.track_color = color;
    }

    /// Corner radius of both layers, at most half the bounds height
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius.min(self.bounds.height() / 2.0).max(0.0)
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    }

    // ========================================================================
    // Layout
    // ========================================================================

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Fill frame as currently presented (mid-animation included)
    pub fn fill_frame(&self) -> Rect {
        self.fill.presented(&self.scheduler)
    }

    /// Track frame as currently presented (mid-animation included)
    pub fn track_frame(&self) -> Rect {
        self.track.presented(&self.scheduler)
    }

    /// Fill frame the layer is at or animating to
    pub fn fill_target_frame(&self) -> Rect {
        self.fill.model
    }

    /// Track frame the layer is at or animating to
    pub fn track_target_frame(&self) -> Rect {
        self.track.model
    }

    /// Lay out both layers for the current bounds, progress and visibility
    pub fn layout_subviews(&mut self) {
        self.layout(Apply::Set);
    }

    fn fill_layout_frame(&self) -> Rect {
        let width = self.bounds.width();
        let fill = Rect::new(0.0, 0.0, (self.progress * width).ceil(), self.bounds.height());
        self.layout_direction.resolve(fill, width)
    }

    fn track_layout_frame(&self) -> Rect {
        let size = self.bounds.size;
        if self.hidden {
            Rect::new(0.0, size.height, size.width, 0.0)
        } else {
            size.to_rect()
        }
    }

    fn layout(&mut self, how: Apply) {
        self.layout_layers(how, how);
    }

    /// Progress change: `how` drives the fill only, the track retargets so a
    /// running visibility animation keeps its timing
    fn layout_progress(&mut self, how: Apply) {
        self.layout_layers(how, Apply::Set);
    }

    fn layout_layers(&mut self, fill_how: Apply, track_how: Apply) {
        if self.animating_hide {
            trace!(id = ?self.id, "layout suppressed during hide animation");
            return;
        }
        let fill = self.fill_layout_frame();
        let track = self.track_layout_frame();
        trace!(id = ?self.id, ?fill, ?track, ?fill_how, ?track_how, "layout");
        self.fill.apply(fill, fill_how, &self.scheduler);
        self.track.apply(track, track_how, &self.scheduler);
    }

    // ========================================================================
    // Accessibility
    // ========================================================================

    /// Current progress as a spoken percentage
    pub fn accessibility_value(&self) -> String {
        self.formatter.format(self.progress)
    }

    pub fn accessibility_label(&self) -> &str {
        &self.accessibility_label
    }

    pub fn set_accessibility_label(&mut self, label: impl Into<String>) {
        self.accessibility_label = label.into();
    }

    pub fn accessibility_traits(&self) -> AccessibilityTraits {
        AccessibilityTraits {
            updates_frequently: true,
        }
    }

    /// Locale and style of [`ProgressView::accessibility_value`]
    pub fn set_value_format(&mut self, format: PercentFormat) {
        self.formatter.set_format(format);
    }

    pub fn value_formatter_mut(&mut self) -> &mut PercentFormatter {
        &mut self.formatter
    }

    /// Whether a value announcement is waiting for its quiet period
    pub fn has_pending_announcement(&self) -> bool {
        self.announcer.is_pending()
    }

    // ========================================================================
    // Frame driving
    // ========================================================================

    fn finish_animation(&mut self, finished: FinishedAnimation) {
        let id = finished.id;
        self.fill.settle(id);
        self.track.settle(id);

        if self.hide_animation == Some(id) {
            self.hide_animation = None;
            self.animating_hide = false;
            self.hidden = true;
            debug!(id = ?self.id, "hide finished");
        }
        if self.show_animation == Some(id) {
            self.show_animation = None;
        }

        let overtaken = match self.superseded.iter().position(|s| *s == id) {
            Some(pos) => {
                self.superseded.swap_remove(pos);
                true
            }
            None => false,
        };
        finished.complete(!overtaken);
    }
}

impl Default for ProgressView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ProgressView {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout(Apply::Set);
    }

    fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.layout_direction = direction;
        self.layout(Apply::Set);
    }

    fn update(&mut self, dt: Duration, accessibility: &mut dyn AccessibilityBridge) {
        for finished in self.scheduler.tick(dt) {
            self.finish_animation(finished);
        }
        let id = self.id;
        let formatter = &self.formatter;
        let progress = self.progress;
        self.announcer
            .poll(dt, id, accessibility, || formatter.format(progress));
    }

    fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }
}

fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(-0.5), 0.0);
        assert_eq!(clamp_progress(1.5), 1.0);
        assert_eq!(clamp_progress(0.25), 0.25);
        assert_eq!(clamp_progress(f32::NAN), 0.0);
        assert_eq!(clamp_progress(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_default_track_color_desaturates_blue() {
        let track = default_track_color(Color::BLUE);
        let hsba = track.to_hsba().unwrap();
        assert!((hsba.saturation - 0.3).abs() < 1e-5);
        assert!((hsba.hue - 2.0 / 3.0).abs() < 1e-5);
        assert!((hsba.brightness - 1.0).abs() < 1e-5);
        assert_eq!(hsba.alpha, 1.0);
        assert!((track.r - 0.7).abs() < 1e-5);
        assert!((track.g - 0.7).abs() < 1e-5);
        assert_eq!(track.b, 1.0);
    }

    #[test]
    fn test_default_track_color_invalid_is_transparent() {
        assert_eq!(
            default_track_color(Color::rgb(f32::NAN, 0.0, 0.0)),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn test_layer_retargets_running_animation() {
        let mut scheduler = AnimationScheduler::new();
        let mut layer = Layer::default();
        layer.apply(Rect::new(0.0, 0.0, 100.0, 4.0), Apply::Snap, &scheduler);

        let timing =
            lumen_animation::AnimationTiming::from_millis(100, lumen_animation::Easing::Linear);
        let id = scheduler.start(timing, None);
        layer.apply(Rect::new(0.0, 0.0, 200.0, 4.0), Apply::Animate(id), &scheduler);
        scheduler.tick(Duration::from_millis(50));
        assert_eq!(layer.presented(&scheduler).width(), 150.0);

        layer.apply(Rect::new(0.0, 0.0, 300.0, 4.0), Apply::Set, &scheduler);
        assert_eq!(layer.presented(&scheduler).width(), 200.0);
        assert_eq!(layer.model.width(), 300.0);
    }

    #[test]
    fn test_corner_radius_is_capped() {
        let mut view = ProgressView::new();
        view.set_bounds(Rect::new(0.0, 0.0, 100.0, 4.0));
        view.set_corner_radius(10.0);
        assert_eq!(view.corner_radius(), 2.0);
        view.set_corner_radius(f32::NAN);
        assert_eq!(view.corner_radius(), 0.0);
    }

    #[test]
    fn test_theme_defaults() {
        let view = ProgressView::new();
        assert_eq!(view.progress_color(), Color::from_hex(0x2196F3));
        assert_eq!(view.track_color(), default_track_color(Color::from_hex(0x2196F3)));
        assert_eq!(view.backward_animation_mode(), BackwardAnimationMode::Reset);
        assert_eq!(view.accessibility_label(), "Progress");
        assert!(view.accessibility_traits().updates_frequently);
    }
}
