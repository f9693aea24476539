//! # Content Cross-fade
//!
//! The panel shows the glance strip unless expanded, where it shows the
//! item list. Swapping between them fades the incoming view in and the
//! outgoing view out on independent timings.

use std::time::Duration;

use serde::Serialize;
use ts_rs::TS;

use crate::channel::ChannelAnimation;
use crate::profile::CrossfadeProfile;
use crate::state::CartState;

/// Which view fills the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PanelContent {
    /// Cart icon, up to three thumbnails and the overflow badge.
    Glance,
    /// Header, every cart line and the totals.
    ItemList,
}

impl PanelContent {
    pub fn for_state(state: CartState) -> Self {
        match state {
            CartState::Expanded => PanelContent::ItemList,
            CartState::Collapsed | CartState::Hidden => PanelContent::Glance,
        }
    }
}

/// Sampled cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ContentFrame {
    pub incoming: PanelContent,
    pub incoming_alpha: f32,
    /// Present until its fade-out completes.
    pub outgoing: Option<PanelContent>,
    pub outgoing_alpha: f32,
}

/// Two-view cross-fade.
#[derive(Debug, Clone)]
pub struct Crossfade {
    current: PanelContent,
    previous: Option<PanelContent>,
    incoming: ChannelAnimation,
    outgoing: ChannelAnimation,
}

impl Crossfade {
    pub fn settled(content: PanelContent) -> Self {
        Crossfade {
            current: content,
            previous: None,
            incoming: ChannelAnimation::settled(1.0),
            outgoing: ChannelAnimation::settled(0.0),
        }
    }

    pub fn current(&self) -> PanelContent {
        self.current
    }

    /// Starts fading toward `target`. No-op if it is already the incoming view.
    ///
    /// Interrupting a fade swaps the roles: the view that was fading out
    /// becomes incoming and resumes from its current alpha.
    pub fn show(&mut self, now: Duration, target: PanelContent, profile: &CrossfadeProfile) -> bool {
        if target == self.current {
            return false;
        }

        let incoming_alpha = self.incoming.value_at(now);
        let outgoing_alpha = match self.previous {
            Some(previous) if previous == target => self.outgoing.value_at(now),
            _ => 0.0,
        };

        self.previous = Some(self.current);
        self.current = target;

        self.outgoing = ChannelAnimation::settled(incoming_alpha);
        self.outgoing.retarget(now, 0.0, profile.fade_out);
        self.incoming = ChannelAnimation::settled(outgoing_alpha);
        self.incoming.retarget(now, 1.0, profile.fade_in);
        true
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.incoming.is_finished(now) && self.outgoing.is_finished(now)
    }

    pub fn sample(&self, now: Duration) -> ContentFrame {
        let outgoing_done = self.outgoing.is_finished(now);
        ContentFrame {
            incoming: self.current,
            incoming_alpha: self.incoming.value_at(now),
            outgoing: if outgoing_done { None } else { self.previous },
            outgoing_alpha: if outgoing_done {
                0.0
            } else {
                self.outgoing.value_at(now)
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TransitionTable;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_content_for_state() {
        assert_eq!(PanelContent::for_state(CartState::Expanded), PanelContent::ItemList);
        assert_eq!(PanelContent::for_state(CartState::Collapsed), PanelContent::Glance);
        assert_eq!(PanelContent::for_state(CartState::Hidden), PanelContent::Glance);
    }

    #[test]
    fn test_expand_fade_timing() {
        let table = TransitionTable::shrine();
        let profile = table.get(CartState::Collapsed, CartState::Expanded).content;
        let mut fade = Crossfade::settled(PanelContent::Glance);
        assert!(fade.show(ms(0), PanelContent::ItemList, &profile));

        let early = fade.sample(ms(75));
        assert_eq!(early.incoming, PanelContent::ItemList);
        assert_eq!(early.incoming_alpha, 0.0);
        assert_eq!(early.outgoing, Some(PanelContent::Glance));
        assert!((early.outgoing_alpha - 0.5).abs() < 1e-3);

        let late = fade.sample(ms(225));
        assert_eq!(late.outgoing, None);
        assert!((late.incoming_alpha - 0.5).abs() < 1e-3);

        assert!(!fade.is_finished(ms(299)));
        assert!(fade.is_finished(ms(300)));
        assert_eq!(fade.sample(ms(300)).incoming_alpha, 1.0);
    }

    #[test]
    fn test_instant_swap() {
        let mut fade = Crossfade::settled(PanelContent::Glance);
        fade.show(ms(10), PanelContent::ItemList, &CrossfadeProfile::instant());
        let frame = fade.sample(ms(10));
        assert_eq!(frame.incoming_alpha, 1.0);
        assert_eq!(frame.outgoing, None);
    }

    #[test]
    fn test_reverse_mid_fade_resumes_alpha() {
        let table = TransitionTable::shrine();
        let expand = table.get(CartState::Collapsed, CartState::Expanded).content;
        let collapse = table.get(CartState::Expanded, CartState::Collapsed).content;

        let mut fade = Crossfade::settled(PanelContent::Glance);
        fade.show(ms(0), PanelContent::ItemList, &expand);
        let before = fade.sample(ms(75));

        fade.show(ms(75), PanelContent::Glance, &collapse);
        let after = fade.sample(ms(75));
        assert_eq!(after.incoming, PanelContent::Glance);
        assert!((after.incoming_alpha - before.outgoing_alpha).abs() < 1e-3);
        assert!(!fade.show(ms(80), PanelContent::Glance, &collapse));
    }
}
