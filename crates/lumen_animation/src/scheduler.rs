//! Animation scheduler
//!
//! Tracks the clock of every running timed animation. The scheduler does not
//! own the animated values: owners keep `from`/`to` pairs keyed by
//! [`AnimationId`] and sample [`AnimationScheduler::fraction`] when presenting.
//! Finished animations are handed back from [`AnimationScheduler::tick`] so the
//! owner can settle its own state before the completion callback runs.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use crate::timing::AnimationTiming;

new_key_type! {
    pub struct AnimationId;
}

/// Callback invoked when an animation ends; the flag reports whether it ran to the end
pub type Completion = Box<dyn FnOnce(bool)>;

struct Animation {
    timing: AnimationTiming,
    elapsed: Duration,
    /// Start order, keeps completion order stable when several finish in one tick
    seq: u64,
    completion: Option<Completion>,
}

/// An animation that reached its end during a tick
pub struct FinishedAnimation {
    pub id: AnimationId,
    completion: Option<Completion>,
}

impl FinishedAnimation {
    /// Run the completion callback, if any
    pub fn complete(self, finished: bool) {
        if let Some(completion) = self.completion {
            completion(finished);
        }
    }
}

impl std::fmt::Debug for FinishedAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinishedAnimation")
            .field("id", &self.id)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

/// The scheduler that advances all running animations
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Animation>,
    next_seq: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Start a timed animation. Running animations are left alone.
    pub fn start(&mut self, timing: AnimationTiming, completion: Option<Completion>) -> AnimationId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.animations.insert(Animation {
            timing,
            elapsed: Duration::ZERO,
            seq,
            completion,
        });
        trace!(?id, duration_ms = timing.duration.as_millis() as u64, "animation started");
        id
    }

    /// Eased fraction of a running animation, `None` once it has finished
    pub fn fraction(&self, id: AnimationId) -> Option<f32> {
        self.animations
            .get(id)
            .map(|anim| anim.timing.fraction(anim.elapsed))
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.animations.contains_key(id)
    }

    /// Advance every animation by `dt` and return those that reached their end
    pub fn tick(&mut self, dt: Duration) -> Vec<FinishedAnimation> {
        let mut done: Vec<(u64, AnimationId)> = Vec::new();
        for (id, anim) in self.animations.iter_mut() {
            anim.elapsed = anim.elapsed.saturating_add(dt);
            if anim.elapsed >= anim.timing.duration {
                done.push((anim.seq, id));
            }
        }
        done.sort_unstable_by_key(|(seq, _)| *seq);

        done.into_iter()
            .filter_map(|(_, id)| {
                let anim = self.animations.remove(id)?;
                trace!(?id, "animation finished");
                Some(FinishedAnimation {
                    id,
                    completion: anim.completion,
                })
            })
            .collect()
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Get the number of running animations
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
