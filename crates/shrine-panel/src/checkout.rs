//! # Checkout Button
//!
//! Floats over the expanded sheet. Enters with a delayed fade and a
//! 0.8 → 1.0 scale-up; exits with a quick fade and scale-down.

use std::time::Duration;

use serde::Serialize;
use ts_rs::TS;

use crate::channel::ChannelAnimation;
use crate::profile::CheckoutProfiles;

/// Scale of the button while hidden.
pub const HIDDEN_SCALE: f32 = 0.8;

/// Sampled button appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CheckoutFrame {
    pub visible: bool,
    pub alpha: f32,
    pub scale: f32,
}

#[derive(Debug, Clone)]
pub struct CheckoutButton {
    visible: bool,
    alpha: ChannelAnimation,
    scale: ChannelAnimation,
}

impl CheckoutButton {
    pub fn settled(visible: bool) -> Self {
        let (alpha, scale) = if visible { (1.0, 1.0) } else { (0.0, HIDDEN_SCALE) };
        CheckoutButton {
            visible,
            alpha: ChannelAnimation::settled(alpha),
            scale: ChannelAnimation::settled(scale),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Starts the enter or exit animation. No-op if already heading there.
    pub fn set_visible(&mut self, now: Duration, visible: bool, profiles: &CheckoutProfiles) -> bool {
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        if visible {
            self.alpha.retarget(now, 1.0, profiles.enter_fade);
            self.scale.retarget(now, 1.0, profiles.enter_scale);
        } else {
            self.alpha.retarget(now, 0.0, profiles.exit_fade);
            self.scale.retarget(now, HIDDEN_SCALE, profiles.exit_scale);
        }
        true
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.alpha.is_finished(now) && self.scale.is_finished(now)
    }

    pub fn sample(&self, now: Duration) -> CheckoutFrame {
        let alpha = self.alpha.value_at(now);
        CheckoutFrame {
            // still drawn while fading out
            visible: self.visible || alpha > 0.0,
            alpha,
            scale: self.scale.value_at(now),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
