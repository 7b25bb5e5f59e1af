//! Theme: the full token set handed to widgets

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ThemeError;
use crate::tokens::{AccessibilityTokens, ColorTokens, MotionTokens};

const MAX_MOTION_MS: u64 = 10_000;

/// A complete set of design tokens.
///
/// Every section is optional in TOML; missing values fall back to defaults.
///
/// ```toml
/// [colors]
/// primary = "#6200EE"
///
/// [motion.set_progress]
/// duration_ms = 300
/// easing = "decelerate"
///
/// [accessibility]
/// announcement_delay_ms = 1000
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ColorTokens,
    pub motion: MotionTokens,
    pub accessibility: AccessibilityTokens,
}

impl Theme {
    /// Parse a theme from TOML source
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        let theme: Theme = toml::from_str(src)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&src)?;
        debug!(path = %path.display(), "loaded theme");
        Ok(theme)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        for (name, spec) in [
            ("set_progress", self.motion.set_progress),
            ("show_hide", self.motion.show_hide),
        ] {
            if spec.duration_ms > MAX_MOTION_MS {
                return Err(ThemeError::Invalid(format!(
                    "motion `{name}` lasts {}ms (max {MAX_MOTION_MS}ms)",
                    spec.duration_ms
                )));
            }
        }
        Ok(())
    }
}
