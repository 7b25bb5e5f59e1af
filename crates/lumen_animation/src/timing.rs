//! Animation timing descriptors

use std::time::Duration;

use crate::easing::Easing;

/// Duration and curve of one timed animation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationTiming {
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationTiming {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn from_millis(duration_ms: u64, easing: Easing) -> Self {
        Self::new(Duration::from_millis(duration_ms), easing)
    }

    /// Zero-length timing; changes apply at once
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }

    /// Eased fraction after `elapsed` of this timing
    pub fn fraction(&self, elapsed: Duration) -> f32 {
        if self.is_immediate() || elapsed >= self.duration {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_linear() {
        let timing = AnimationTiming::from_millis(200, Easing::Linear);
        assert_eq!(timing.fraction(Duration::ZERO), 0.0);
        assert!((timing.fraction(Duration::from_millis(50)) - 0.25).abs() < 1e-6);
        assert_eq!(timing.fraction(Duration::from_millis(200)), 1.0);
        assert_eq!(timing.fraction(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_immediate_is_always_done() {
        let timing = AnimationTiming::immediate();
        assert!(timing.is_immediate());
        assert_eq!(timing.fraction(Duration::ZERO), 1.0);
    }
}
