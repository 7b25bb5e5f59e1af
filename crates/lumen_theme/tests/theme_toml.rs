use std::time::Duration;

use lumen_animation::Easing;
use lumen_core::Color;
use lumen_theme::{ColorToken, EasingToken, MotionSpec, MotionToken, Theme, ThemeError};
use pretty_assertions::assert_eq;

#[test]
fn empty_toml_yields_default_theme() {
    let theme = Theme::from_toml_str("").unwrap();
    assert_eq!(theme, Theme::default());
    assert_eq!(theme.colors.get(ColorToken::Primary), Color::from_hex(0x2196F3));
    assert_eq!(
        theme.motion.get(MotionToken::SetProgress),
        MotionSpec::new(250, EasingToken::Standard)
    );
    assert_eq!(
        theme.accessibility.announcement_delay(),
        Duration::from_secs(1)
    );
}

#[test]
fn partial_sections_keep_other_defaults() {
    let src = r##"
[colors]
primary = "#6200EE"

[motion.show_hide]
easing = "decelerate"
"##;
    let theme = Theme::from_toml_str(src).unwrap();
    assert_eq!(theme.colors.primary, Color::from_hex(0x6200EE));
    assert_eq!(theme.motion.show_hide.duration_ms, 250);
    assert_eq!(theme.motion.show_hide.easing, EasingToken::Decelerate);
    assert_eq!(theme.motion.set_progress, MotionSpec::default());

    let timing = theme.motion.timing(MotionToken::ShowHide);
    assert_eq!(timing.duration, Duration::from_millis(250));
    assert_eq!(timing.easing, Easing::DECELERATE);
}

#[test]
fn invalid_color_is_a_parse_error() {
    let err = Theme::from_toml_str("[colors]\nprimary = \"blue\"\n").unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)), "{err}");
}

#[test]
fn overly_long_motion_is_rejected() {
    let err = Theme::from_toml_str("[motion.set_progress]\nduration_ms = 60000\n").unwrap_err();
    assert!(matches!(err, ThemeError::Invalid(_)), "{err}");
}

#[test]
fn missing_file_reports_path() {
    let err = Theme::load("/definitely/not/here/theme.toml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here/theme.toml"));
}

#[test]
fn theme_serializes_back_to_toml() {
    let theme = Theme::default();
    let src = toml::to_string(&theme).unwrap();
    assert!(src.contains("primary = \"#2196F3\""));
    assert_eq!(Theme::from_toml_str(&src).unwrap(), theme);
}
