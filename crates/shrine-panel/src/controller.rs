//! # Panel Controller
//!
//! Owns the discrete [`CartState`] and every animated channel of the cart
//! panel.
//!
//! ## Frame Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request_state(to, now)                                                 │
//! │    │  same state? ──► ignored                                           │
//! │    ▼                                                                    │
//! │  commit ──► retarget height / offset / corner / content / checkout      │
//! │    │        from their values at `now`, with table[(from, to)]         │
//! │    ▼                                                                    │
//! │  observer.state_changed(to)                                             │
//! │                                                                         │
//! │  tick(now)                                                              │
//! │    │  reconcile: count or viewport moved a target? ──► reflow leg       │
//! │    ▼                                                                    │
//! │  sample ──► animating? ──► observer.geometry_updated(frame)             │
//! │    │                                                                    │
//! │    ▼  just settled                                                      │
//! │  observer.transition_finished(state, &mut requests)                     │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  drain requests ──► request_state(..) for each, in order                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller never reads a clock: `now` is the host's monotonic frame
//! time. Item count and viewport are pushed in by the host and take effect
//! on the next tick.

use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, trace};
use ts_rs::TS;

use shrine_core::Viewport;

use crate::channel::ChannelAnimation;
use crate::checkout::{CheckoutButton, CheckoutFrame};
use crate::content::{ContentFrame, Crossfade, PanelContent};
use crate::geometry::{GeometrySnapshot, PanelMetrics};
use crate::profile::TransitionTable;
use crate::state::CartState;

// =============================================================================
// Observer Interface
// =============================================================================

/// State requests issued from inside an observer callback.
///
/// Queued requests are committed in order before the controller call that
/// invoked the callback returns.
#[derive(Debug, Default)]
pub struct PanelRequests {
    queue: VecDeque<CartState>,
}

impl PanelRequests {
    pub fn request(&mut self, state: CartState) {
        self.queue.push_back(state);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    fn pop(&mut self) -> Option<CartState> {
        self.queue.pop_front()
    }
}

/// Receives panel side effects. Every method defaults to a no-op.
pub trait PanelObserver {
    /// A request was committed.
    fn state_changed(&mut self, _state: CartState) {}

    /// A frame was sampled while channels were moving, plus the final
    /// resting frame.
    fn geometry_updated(&mut self, _frame: &PanelFrame) {}

    /// Every channel of the transition into `state` has settled. Fires once
    /// per committed request that was not interrupted.
    fn transition_finished(&mut self, _state: CartState, _requests: &mut PanelRequests) {}
}

impl PanelObserver for () {}

// =============================================================================
// Frame
// =============================================================================

/// Everything the renderer needs to draw the panel at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PanelFrame {
    pub state: CartState,
    pub geometry: GeometrySnapshot,
    pub content: ContentFrame,
    pub checkout: CheckoutFrame,
    pub animating: bool,
}

// =============================================================================
// Controller
// =============================================================================

/// The cart panel state machine.
#[derive(Debug, Clone)]
pub struct PanelController {
    metrics: PanelMetrics,
    table: TransitionTable,
    state: CartState,
    item_count: usize,
    viewport: Viewport,
    height: ChannelAnimation,
    offset: ChannelAnimation,
    corner: ChannelAnimation,
    content: Crossfade,
    checkout: CheckoutButton,
    /// Channels moved since the last resting frame was reported.
    in_flight: bool,
    /// Committed state whose completion has not been reported yet.
    settling: Option<CartState>,
}

impl PanelController {
    /// A controller at rest in `state`.
    pub fn new(state: CartState, item_count: usize, viewport: Viewport, table: TransitionTable) -> Self {
        let metrics = PanelMetrics::SHRINE;
        let rest = GeometrySnapshot::target(&metrics, state, item_count, viewport);
        PanelController {
            metrics,
            table,
            state,
            item_count,
            viewport,
            height: ChannelAnimation::settled(rest.height),
            offset: ChannelAnimation::settled(rest.x_offset),
            corner: ChannelAnimation::settled(rest.corner_radius),
            content: Crossfade::settled(PanelContent::for_state(state)),
            checkout: CheckoutButton::settled(state.is_expanded()),
            in_flight: false,
            settling: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> CartState {
        self.state
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Resting geometry for the current state, count and viewport.
    pub fn target_geometry(&self) -> GeometrySnapshot {
        GeometrySnapshot::target(&self.metrics, self.state, self.item_count, self.viewport)
    }

    // -------------------------------------------------------------------------
    // Host Inputs
    // -------------------------------------------------------------------------

    /// Records the cart size. Takes effect on the next tick.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count != self.item_count {
            debug!(from = self.item_count, to = item_count, "Cart item count changed");
            self.item_count = item_count;
        }
    }

    /// Records the viewport bounds. Takes effect on the next tick.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(
                width = viewport.width(),
                height = viewport.height(),
                "Cart panel viewport changed"
            );
            self.viewport = viewport;
        }
    }

    /// Swaps the timing table; channels already in flight keep their legs.
    pub fn set_table(&mut self, table: TransitionTable) {
        self.table = table;
    }

    // -------------------------------------------------------------------------
    // State Requests
    // -------------------------------------------------------------------------

    /// Commits a transition to `target`.
    ///
    /// Returns `false` (and does nothing) when already in `target`. Otherwise
    /// every channel restarts from its value at `now` toward the new target,
    /// with the profiles for `(current, target)`.
    pub fn request_state(
        &mut self,
        target: CartState,
        now: Duration,
        observer: &mut dyn PanelObserver,
    ) -> bool {
        if target == self.state {
            debug!(state = %target, "Ignoring request for the current cart state");
            return false;
        }

        let from = self.state;
        let interrupted = self.settling.is_some();
        self.state = target;

        let profiles = *self.table.get(from, target);
        let goal = self.target_geometry();
        self.height.retarget(now, goal.height, profiles.height);
        self.offset.retarget(now, goal.x_offset, profiles.offset);
        self.corner.retarget(now, goal.corner_radius, profiles.corner);
        self.content
            .show(now, PanelContent::for_state(target), &profiles.content);
        let checkout = *self.table.checkout();
        self.checkout
            .set_visible(now, target.is_expanded(), &checkout);

        self.in_flight = true;
        self.settling = Some(target);

        info!(
            from = %from,
            to = %target,
            item_count = self.item_count,
            interrupted,
            "Cart panel state committed"
        );
        observer.state_changed(target);
        true
    }

    // -------------------------------------------------------------------------
    // Frames
    // -------------------------------------------------------------------------

    /// Advances to `now` and reports side effects.
    pub fn tick(&mut self, now: Duration, observer: &mut dyn PanelObserver) -> PanelFrame {
        self.reconcile(now);

        let frame = self.sample(now);
        if frame.animating {
            trace!(
                height = frame.geometry.height,
                x_offset = frame.geometry.x_offset,
                corner_radius = frame.geometry.corner_radius,
                "Cart panel frame"
            );
            observer.geometry_updated(&frame);
            return frame;
        }

        if self.in_flight {
            self.in_flight = false;
            observer.geometry_updated(&frame);
        }

        let Some(settled) = self.settling.take() else {
            return frame;
        };

        debug!(state = %settled, "Cart panel transition finished");
        let mut requests = PanelRequests::default();
        observer.transition_finished(settled, &mut requests);

        let mut chained = false;
        while let Some(next) = requests.pop() {
            chained |= self.request_state(next, now, observer);
        }

        if chained {
            self.sample(now)
        } else {
            frame
        }
    }

    /// Samples every channel at `now` without side effects.
    pub fn sample(&self, now: Duration) -> PanelFrame {
        PanelFrame {
            state: self.state,
            geometry: GeometrySnapshot {
                height: self.height.value_at(now),
                x_offset: self.offset.value_at(now),
                corner_radius: self.corner.value_at(now),
            },
            content: self.content.sample(now),
            checkout: self.checkout.sample(now),
            animating: self.is_animating(now),
        }
    }

    /// A committed request has not reported `transition_finished` yet.
    /// Geometry re-targets from count or viewport changes do not count.
    pub fn is_settling(&self) -> bool {
        self.settling.is_some()
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        !(self.height.is_finished(now)
            && self.offset.is_finished(now)
            && self.corner.is_finished(now)
            && self.content.is_finished(now)
            && self.checkout.is_finished(now))
    }

    /// Re-targets channels whose derived goal moved without a state change.
    fn reconcile(&mut self, now: Duration) {
        let goal = self.target_geometry();
        let reflow = *self.table.reflow(self.state);

        let mut moved = self.height.follow(now, goal.height, reflow.height);
        moved |= self.offset.follow(now, goal.x_offset, reflow.offset);
        moved |= self.corner.follow(now, goal.corner_radius, reflow.corner);

        if moved {
            debug!(
                state = %self.state,
                item_count = self.item_count,
                x_offset = goal.x_offset,
                height = goal.height,
                "Cart panel geometry re-targeted"
            );
            self.in_flight = true;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn viewport() -> Viewport {
        Viewport::new(400.0, 800.0)
    }

    #[derive(Default)]
    struct Recorder {
        changes: Vec<CartState>,
        frames: usize,
        finished: Vec<CartState>,
        chain: Option<CartState>,
    }

    impl PanelObserver for Recorder {
        fn state_changed(&mut self, state: CartState) {
            self.changes.push(state);
        }

        fn geometry_updated(&mut self, _frame: &PanelFrame) {
            self.frames += 1;
        }

        fn transition_finished(&mut self, state: CartState, requests: &mut PanelRequests) {
            self.finished.push(state);
            if let Some(next) = self.chain.take() {
                requests.request(next);
            }
        }
    }

    #[test]
    fn test_starts_at_rest() {
        let panel = PanelController::new(CartState::Collapsed, 2, viewport(), TransitionTable::shrine());
        let frame = panel.sample(ms(0));
        assert!(!frame.animating);
        assert_eq!(frame.geometry.x_offset, 400.0 - 192.0);
        assert_eq!(frame.content.incoming, PanelContent::Glance);
        assert!(!frame.checkout.visible);
    }

    #[test]
    fn test_same_state_request_is_ignored() {
        let mut panel = PanelController::new(CartState::Collapsed, 0, viewport(), TransitionTable::shrine());
        let mut recorder = Recorder::default();
        assert!(!panel.request_state(CartState::Collapsed, ms(0), &mut recorder));
        assert!(recorder.changes.is_empty());
        assert!(!panel.is_animating(ms(0)));
    }

    #[test]
    fn test_resize_animates_without_settling() {
        let mut panel = PanelController::new(CartState::Expanded, 2, viewport(), TransitionTable::shrine());
        panel.set_viewport(Viewport::new(600.0, 900.0));
        panel.tick(ms(10), &mut ());

        assert!(panel.is_animating(ms(20)));
        assert!(!panel.is_settling());

        panel.request_state(CartState::Collapsed, ms(20), &mut ());
        assert!(panel.is_settling());
    }

    #[test]
    fn test_finish_fires_once() {
        let mut panel = PanelController::new(CartState::Collapsed, 1, viewport(), TransitionTable::shrine());
        let mut recorder = Recorder::default();
        panel.request_state(CartState::Expanded, ms(0), &mut recorder);

        for t in (0..=700).step_by(16) {
            panel.tick(ms(t), &mut recorder);
        }
        panel.tick(ms(800), &mut recorder);

        assert_eq!(recorder.changes, vec![CartState::Expanded]);
        assert_eq!(recorder.finished, vec![CartState::Expanded]);
        assert!(recorder.frames > 1);
    }

    #[test]
    fn test_interrupted_transition_does_not_finish() {
        let mut panel = PanelController::new(CartState::Collapsed, 1, viewport(), TransitionTable::shrine());
        let mut recorder = Recorder::default();
        panel.request_state(CartState::Expanded, ms(0), &mut recorder);
        panel.tick(ms(100), &mut recorder);
        panel.request_state(CartState::Hidden, ms(100), &mut recorder);
        panel.tick(ms(2000), &mut recorder);

        assert_eq!(recorder.finished, vec![CartState::Hidden]);
    }

    #[test]
    fn test_reentrant_request_commits_before_tick_returns() {
        let mut panel = PanelController::new(CartState::Collapsed, 1, viewport(), TransitionTable::shrine());
        let mut recorder = Recorder {
            chain: Some(CartState::Collapsed),
            ..Recorder::default()
        };
        panel.request_state(CartState::Expanded, ms(0), &mut recorder);
        let frame = panel.tick(ms(1000), &mut recorder);

        assert_eq!(panel.state(), CartState::Collapsed);
        assert_eq!(frame.state, CartState::Collapsed);
        assert!(frame.animating);
        assert_eq!(recorder.changes, vec![CartState::Expanded, CartState::Collapsed]);
    }

    #[test]
    fn test_reduced_motion_settles_on_first_tick() {
        let mut panel = PanelController::new(CartState::Collapsed, 3, viewport(), TransitionTable::reduced_motion());
        let mut recorder = Recorder::default();
        panel.request_state(CartState::Expanded, ms(5), &mut recorder);
        let frame = panel.tick(ms(5), &mut recorder);

        assert!(!frame.animating);
        assert_eq!(frame.geometry.height, 800.0);
        assert_eq!(frame.checkout.alpha, 1.0);
        assert_eq!(recorder.finished, vec![CartState::Expanded]);
    }
}
