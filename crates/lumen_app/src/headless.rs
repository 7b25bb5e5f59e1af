//! Headless frame driver for widgets.

use std::time::Duration;

use anyhow::{bail, Result};
use lumen_core::Rect;
use lumen_widgets::{AccessibilityBridge, Widget};
use tracing::{debug, trace};

/// Configuration for deterministic headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Logical width given to the widget.
    pub width: u32,
    /// Logical height given to the widget.
    pub height: u32,
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Logical milliseconds between frames.
    pub tick_ms: u64,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 4,
            max_frames: 60,
            tick_ms: 16,
        }
    }
}

impl HeadlessRunConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("headless dimensions must be non-zero");
        }
        if self.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if self.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        Ok(())
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Frame context passed to headless frame callbacks.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessContext {
    pub frame_index: u32,
    pub width: u32,
    pub height: u32,
    pub elapsed_ms: u64,
}

/// Deterministic headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget against `widget`.
    ///
    /// The widget gets bounds of `width x height` before the first frame.
    /// Each frame calls `on_frame` (where the caller mutates the widget),
    /// then advances the widget by one tick.
    pub fn run<W, F>(
        cfg: HeadlessRunConfig,
        widget: &mut W,
        accessibility: &mut dyn AccessibilityBridge,
        mut on_frame: F,
    ) -> Result<()>
    where
        W: Widget,
        F: FnMut(&HeadlessContext, &mut W),
    {
        cfg.validate()?;
        debug!(?cfg, widget = ?widget.id(), "headless run starting");

        widget.set_bounds(Rect::new(0.0, 0.0, cfg.width as f32, cfg.height as f32));
        let tick = cfg.tick();

        for frame in 0..cfg.max_frames {
            let elapsed_ms = cfg.tick_ms.saturating_mul(frame as u64);
            let ctx = HeadlessContext {
                frame_index: frame,
                width: cfg.width,
                height: cfg.height,
                elapsed_ms,
            };
            on_frame(&ctx, widget);
            widget.update(tick, accessibility);
            trace!(frame, elapsed_ms, animating = widget.is_animating(), "frame");
        }

        Ok(())
    }

    /// Tick `widget` until no animation is running, at most `max_frames` times.
    ///
    /// Returns the number of frames that were needed.
    pub fn settle<W: Widget>(
        cfg: HeadlessRunConfig,
        widget: &mut W,
        accessibility: &mut dyn AccessibilityBridge,
    ) -> Result<u32> {
        cfg.validate()?;
        let tick = cfg.tick();
        for frame in 0..cfg.max_frames {
            if !widget.is_animating() {
                return Ok(frame);
            }
            widget.update(tick, accessibility);
        }
        if widget.is_animating() {
            bail!(
                "widget still animating after {} frames of {}ms",
                cfg.max_frames,
                cfg.tick_ms
            );
        }
        Ok(cfg.max_frames)
    }
}
