//! # Channel Animation
//!
//! One scalar animating from a start value to a target value under a
//! [`TransitionProfile`], sampled against the host's clock.
//!
//! ## Interruption
//! ```text
//! value
//!   ▲            retarget at t1
//!   │                 │
//! B ┤       ╭─────────●
//!   │     ╭─╯         ╲
//!   │   ╭─╯            ╲__
//! A ┤───╯                 ╲____
//!   │                          ╲______ C
//!   └───────┬─────────┬──────────────────► time
//!           t0        t1
//! ```
//! A retarget starts the new leg from the value sampled at `t1`, never from
//! the old start or the old target, so the curve stays continuous.

use std::time::Duration;

use crate::profile::TransitionProfile;

/// Targets closer than this are treated as unchanged.
pub const TARGET_EPSILON: f32 = 1e-3;

/// A single interpolated channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelAnimation {
    pub start_value: f32,
    pub target_value: f32,
    pub start_time: Duration,
    pub profile: TransitionProfile,
}

impl ChannelAnimation {
    /// A channel at rest on `value`.
    pub fn settled(value: f32) -> Self {
        ChannelAnimation {
            start_value: value,
            target_value: value,
            start_time: Duration::ZERO,
            profile: TransitionProfile::instant(),
        }
    }

    /// Value at `now`. Times before `start_time` sample as the start value.
    pub fn value_at(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.start_time);
        let fraction = self.profile.progress(elapsed);
        if fraction >= 1.0 {
            return self.target_value;
        }
        self.start_value + (self.target_value - self.start_value) * fraction
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start_time) >= self.profile.total()
    }

    /// Restarts toward `target` from the value at `now`.
    pub fn retarget(&mut self, now: Duration, target: f32, profile: TransitionProfile) {
        self.start_value = self.value_at(now);
        self.target_value = target;
        self.start_time = now;
        self.profile = profile;
    }

    /// Retargets only if `target` differs from the current target.
    ///
    /// Returns whether a new leg was started.
    pub fn follow(&mut self, now: Duration, target: f32, profile: TransitionProfile) -> bool {
        if (self.target_value - target).abs() <= TARGET_EPSILON {
            return false;
        }
        self.retarget(now, target, profile);
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
