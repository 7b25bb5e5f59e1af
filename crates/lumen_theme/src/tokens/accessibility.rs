//! Accessibility tokens

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityTokens {
    /// Quiet period before a value change is announced to assistive technology
    pub announcement_delay_ms: u64,
}

impl AccessibilityTokens {
    pub fn announcement_delay(&self) -> Duration {
        Duration::from_millis(self.announcement_delay_ms)
    }
}

impl Default for AccessibilityTokens {
    fn default() -> Self {
        Self {
            announcement_delay_ms: 1000,
        }
    }
}
