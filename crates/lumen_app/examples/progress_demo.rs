//! Progress Demo
//!
//! Drives a progress view through fill, decrease, hide and show without a
//! window, logging frames and announcements.
//!
//! Run with:
//! `RUST_LOG=debug cargo run -p lumen_app --example progress_demo [theme.toml]`

use anyhow::{Context, Result};
use lumen_app::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let theme = match std::env::args().nth(1) {
        Some(path) => Theme::load(&path).with_context(|| format!("loading theme {path}"))?,
        None => Theme::default(),
    };

    let mut view = ProgressView::with_theme(&theme);
    let mut a11y = RecordingAccessibility::new();
    a11y.set_focused(Some(view.id()));

    let cfg = HeadlessRunConfig {
        width: 320,
        height: 4,
        max_frames: 240,
        tick_ms: 16,
    };

    HeadlessRuntime::run(cfg, &mut view, &mut a11y, |ctx, view| {
        match ctx.frame_index {
            0 => view.set_progress_animated(0.8, true, None),
            40 => view.set_progress_animated(0.3, true, None),
            80 => {
                view.set_backward_animation_mode(BackwardAnimationMode::Continuous);
                view.set_progress_animated(0.1, true, None);
            }
            120 => view.set_hidden(
                true,
                true,
                Some(Box::new(|finished: bool| info!(finished, "hide completed"))),
            ),
            180 => view.set_hidden(false, true, None),
            _ => {}
        }
        if ctx.frame_index % 8 == 0 {
            info!(
                frame = ctx.frame_index,
                elapsed_ms = ctx.elapsed_ms,
                fill = ?view.fill_frame(),
                track = ?view.track_frame(),
                hidden = view.is_hidden(),
                "frame"
            );
        }
    })?;

    for announcement in a11y.announcements() {
        info!(value = %announcement.value, "announced");
    }
    info!(
        progress_color = %view.progress_color().to_hex_string(),
        track_color = %view.track_color().to_hex_string(),
        "done"
    );
    Ok(())
}
