//! Color tokens for theming

use lumen_core::Color;
use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Brand color; the default fill of progress indicators
    Primary,
}

/// Complete set of color tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTokens {
    pub primary: Color,
}

impl ColorTokens {
    /// Get color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            // Material blue 500
            primary: Color::from_hex(0x2196F3),
        }
    }
}
