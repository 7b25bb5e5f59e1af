//! Motion tokens: durations and easing curves

use lumen_animation::{AnimationTiming, Easing};
use serde::{Deserialize, Serialize};

/// Named easing curves
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingToken {
    Linear,
    #[default]
    Standard,
    Decelerate,
    Accelerate,
    Sharp,
}

impl EasingToken {
    pub fn easing(self) -> Easing {
        match self {
            EasingToken::Linear => Easing::Linear,
            EasingToken::Standard => Easing::STANDARD,
            EasingToken::Decelerate => Easing::DECELERATE,
            EasingToken::Accelerate => Easing::ACCELERATE,
            EasingToken::Sharp => Easing::SHARP,
        }
    }
}

/// Duration and curve for one kind of motion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSpec {
    pub duration_ms: u64,
    pub easing: EasingToken,
}

impl MotionSpec {
    pub const fn new(duration_ms: u64, easing: EasingToken) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    pub fn timing(&self) -> AnimationTiming {
        AnimationTiming::from_millis(self.duration_ms, self.easing.easing())
    }
}

impl Default for MotionSpec {
    fn default() -> Self {
        Self::new(250, EasingToken::Standard)
    }
}

/// Semantic motion token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MotionToken {
    /// Fill width change of a progress indicator
    SetProgress,
    /// Collapse / expand of a progress indicator
    ShowHide,
}

/// Complete set of motion tokens
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTokens {
    pub set_progress: MotionSpec,
    pub show_hide: MotionSpec,
}

impl MotionTokens {
    pub fn get(&self, token: MotionToken) -> MotionSpec {
        match token {
            MotionToken::SetProgress => self.set_progress,
            MotionToken::ShowHide => self.show_hide,
        }
    }

    /// Timing descriptor ready for the animation scheduler
    pub fn timing(&self, token: MotionToken) -> AnimationTiming {
        self.get(token).timing()
    }
}
