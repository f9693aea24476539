//! # Transition Profiles
//!
//! Timing for every animated channel, keyed by the directed state pair.
//!
//! ## Stock Table
//! ```text
//! ┌──────────────────────┬──────────┬────────────────┬────────────────┬──────────────────────┐
//! │ from → to            │ height   │ offset         │ corner         │ content (in / out)   │
//! ├──────────────────────┼──────────┼────────────────┼────────────────┼──────────────────────┤
//! │ Collapsed → Expanded │ 500      │ 150            │ 150            │ 150 +150 / 150       │
//! │ Expanded → Collapsed │ 283      │ 433 +67        │ 433 +67        │ 117 +117 / 117       │
//! │ any other pair       │ 500      │ 450            │ 150            │ instant swap         │
//! └──────────────────────┴──────────┴────────────────┴────────────────┴──────────────────────┘
//!   durations in ms, "+d" is a start delay
//!   geometry eases fast-out-slow-in, content fades are linear
//! ```
//!
//! The diagonal (`from == to`) holds the reflow profiles used when the
//! target moves without a state change: cart count or viewport changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::easing::Easing;
use crate::state::CartState;

// =============================================================================
// Single Channel Profile
// =============================================================================

/// Duration, start delay and curve for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransitionProfile {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl TransitionProfile {
    /// A fast-out-slow-in tween with no delay.
    pub const fn tween(duration_ms: u32) -> Self {
        TransitionProfile {
            duration_ms,
            delay_ms: 0,
            easing: Easing::FastOutSlowIn,
        }
    }

    /// Completes on the first sample.
    pub const fn instant() -> Self {
        TransitionProfile {
            duration_ms: 0,
            delay_ms: 0,
            easing: Easing::Linear,
        }
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0 && self.delay_ms == 0
    }

    /// Delay plus duration.
    pub fn total(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms) + u64::from(self.duration_ms))
    }

    /// Eased progress after `elapsed`: 0 during the delay, 1 once done.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let delay = Duration::from_millis(u64::from(self.delay_ms));
        if elapsed < delay {
            return 0.0;
        }
        if self.duration_ms == 0 {
            return 1.0;
        }
        let running = (elapsed - delay).as_secs_f32() * 1000.0;
        self.easing.apply(running / self.duration_ms as f32)
    }
}

// =============================================================================
// Per-Pair Profiles
// =============================================================================

/// Incoming and outgoing halves of the content cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrossfadeProfile {
    pub fade_in: TransitionProfile,
    pub fade_out: TransitionProfile,
}

impl CrossfadeProfile {
    pub const fn instant() -> Self {
        CrossfadeProfile {
            fade_in: TransitionProfile::instant(),
            fade_out: TransitionProfile::instant(),
        }
    }
}

/// Everything that animates for one directed state pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChannelProfiles {
    pub height: TransitionProfile,
    pub offset: TransitionProfile,
    pub corner: TransitionProfile,
    pub content: CrossfadeProfile,
}

impl ChannelProfiles {
    pub const fn instant() -> Self {
        ChannelProfiles {
            height: TransitionProfile::instant(),
            offset: TransitionProfile::instant(),
            corner: TransitionProfile::instant(),
            content: CrossfadeProfile::instant(),
        }
    }

    /// Longest channel, i.e. when the transition has settled.
    pub fn settle_time(&self) -> Duration {
        [
            self.height.total(),
            self.offset.total(),
            self.corner.total(),
            self.content.fade_in.total(),
            self.content.fade_out.total(),
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
    }
}

/// Checkout button enter and exit timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutProfiles {
    pub enter_fade: TransitionProfile,
    pub enter_scale: TransitionProfile,
    pub exit_fade: TransitionProfile,
    pub exit_scale: TransitionProfile,
}

impl CheckoutProfiles {
    pub const SHRINE: CheckoutProfiles = CheckoutProfiles {
        enter_fade: TransitionProfile::tween(150)
            .delayed(150)
            .eased(Easing::Linear),
        enter_scale: TransitionProfile::tween(250)
            .delayed(250)
            .eased(Easing::LinearOutSlowIn),
        exit_fade: TransitionProfile::tween(117).eased(Easing::Linear),
        exit_scale: TransitionProfile::tween(100).eased(Easing::FastOutLinearIn),
    };

    pub const fn instant() -> Self {
        CheckoutProfiles {
            enter_fade: TransitionProfile::instant(),
            enter_scale: TransitionProfile::instant(),
            exit_fade: TransitionProfile::instant(),
            exit_scale: TransitionProfile::instant(),
        }
    }
}

impl Default for CheckoutProfiles {
    fn default() -> Self {
        CheckoutProfiles::SHRINE
    }
}

// =============================================================================
// Transition Table
// =============================================================================

/// `(from, to) → ChannelProfiles` for all nine pairs, plus checkout timing.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTable {
    pairs: [[ChannelProfiles; 3]; 3],
    checkout: CheckoutProfiles,
}

impl TransitionTable {
    /// The stock Shrine timings.
    pub fn shrine() -> Self {
        let mut pairs = [[ChannelProfiles::default(); 3]; 3];
        for from in CartState::ALL {
            for to in CartState::ALL {
                pairs[from.index()][to.index()] = shrine_pair(from, to);
            }
        }
        TransitionTable {
            pairs,
            checkout: CheckoutProfiles::SHRINE,
        }
    }

    /// Every channel settles on the first frame.
    pub fn reduced_motion() -> Self {
        TransitionTable {
            pairs: [[ChannelProfiles::instant(); 3]; 3],
            checkout: CheckoutProfiles::instant(),
        }
    }

    pub fn get(&self, from: CartState, to: CartState) -> &ChannelProfiles {
        &self.pairs[from.index()][to.index()]
    }

    /// Profiles for re-targeting within `state`.
    pub fn reflow(&self, state: CartState) -> &ChannelProfiles {
        self.get(state, state)
    }

    pub fn checkout(&self) -> &CheckoutProfiles {
        &self.checkout
    }

    /// Replaces one pair's profiles.
    pub fn with_profiles(mut self, from: CartState, to: CartState, profiles: ChannelProfiles) -> Self {
        self.pairs[from.index()][to.index()] = profiles;
        self
    }

    pub fn with_checkout(mut self, checkout: CheckoutProfiles) -> Self {
        self.checkout = checkout;
        self
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        TransitionTable::shrine()
    }
}

fn shrine_pair(from: CartState, to: CartState) -> ChannelProfiles {
    use CartState::{Collapsed, Expanded};

    let height = match (from, to) {
        (Expanded, Collapsed) => TransitionProfile::tween(283),
        _ => TransitionProfile::tween(500),
    };
    let offset = match (from, to) {
        (Collapsed, Expanded) => TransitionProfile::tween(150),
        (Expanded, Collapsed) => TransitionProfile::tween(433).delayed(67),
        _ => TransitionProfile::tween(450),
    };
    let corner = match (from, to) {
        (Expanded, Collapsed) => TransitionProfile::tween(433).delayed(67),
        _ => TransitionProfile::tween(150),
    };
    let content = match (from, to) {
        (Collapsed, Expanded) => CrossfadeProfile {
            fade_in: TransitionProfile::tween(150)
                .delayed(150)
                .eased(Easing::Linear),
            fade_out: TransitionProfile::tween(150).eased(Easing::Linear),
        },
        (Expanded, Collapsed) => CrossfadeProfile {
            fade_in: TransitionProfile::tween(117)
                .delayed(117)
                .eased(Easing::Linear),
            fade_out: TransitionProfile::tween(117).eased(Easing::Linear),
        },
        _ => CrossfadeProfile::instant(),
    };

    ChannelProfiles {
        height,
        offset,
        corner,
        content,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use CartState::{Collapsed, Expanded, Hidden};

    #[test]
    fn test_collapse_timings() {
        let table = TransitionTable::shrine();
        let p = table.get(Expanded, Collapsed);
        assert_eq!(p.height.duration_ms, 283);
        assert_eq!(p.offset.duration_ms, 433);
        assert_eq!(p.offset.delay_ms, 67);
        assert_eq!(p.corner, p.offset);
        assert_eq!(p.content.fade_in.delay_ms, 117);
        assert_eq!(p.settle_time(), Duration::from_millis(500));
    }

    #[test]
    fn test_expand_timings() {
        let table = TransitionTable::shrine();
        let p = table.get(Collapsed, Expanded);
        assert_eq!(p.height.duration_ms, 500);
        assert_eq!(p.offset.duration_ms, 150);
        assert_eq!(p.corner.duration_ms, 150);
        assert_eq!(p.content.fade_in.total(), Duration::from_millis(300));
        assert_eq!(p.height.easing, Easing::FastOutSlowIn);
    }

    #[test]
    fn test_hidden_pairs_swap_content_instantly() {
        let table = TransitionTable::shrine();
        for (from, to) in [(Collapsed, Hidden), (Hidden, Collapsed), (Expanded, Hidden), (Hidden, Expanded)] {
            let p = table.get(from, to);
            assert_eq!(p.offset.duration_ms, 450);
            assert_eq!(p.content, CrossfadeProfile::instant());
        }
        assert_eq!(table.reflow(Collapsed).offset.duration_ms, 450);
    }

    #[test]
    fn test_reduced_motion_is_all_instant() {
        let table = TransitionTable::reduced_motion();
        for from in CartState::ALL {
            for to in CartState::ALL {
                assert_eq!(table.get(from, to).settle_time(), Duration::ZERO);
            }
        }
        assert!(table.checkout().enter_scale.is_instant());
    }

    #[test]
    fn test_progress_respects_delay() {
        let p = TransitionProfile::tween(100).delayed(50).eased(Easing::Linear);
        assert_eq!(p.progress(Duration::from_millis(20)), 0.0);
        assert!((p.progress(Duration::from_millis(100)) - 0.5).abs() < 1e-4);
        assert_eq!(p.progress(Duration::from_millis(400)), 1.0);
        assert_eq!(TransitionProfile::instant().progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_override_single_pair() {
        let table = TransitionTable::shrine().with_profiles(Hidden, Collapsed, ChannelProfiles::instant());
        assert_eq!(table.get(Hidden, Collapsed).settle_time(), Duration::ZERO);
        assert_eq!(table.get(Collapsed, Hidden).offset.duration_ms, 450);
    }
}
