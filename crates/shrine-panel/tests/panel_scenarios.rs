//! End-to-end panel scenarios driven by a simulated 60 Hz clock.

use std::time::Duration;

use shrine_core::Viewport;
use shrine_panel::{
    collapsed_width, CartState, PanelController, PanelFrame, PanelObserver, PanelRequests,
    TransitionTable,
};

const FRAME_MS: u64 = 16;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn viewport() -> Viewport {
    Viewport::new(411.0, 731.0)
}

#[derive(Default)]
struct Log {
    changes: Vec<CartState>,
    frames: Vec<PanelFrame>,
    finished: Vec<CartState>,
}

impl PanelObserver for Log {
    fn state_changed(&mut self, state: CartState) {
        self.changes.push(state);
    }

    fn geometry_updated(&mut self, frame: &PanelFrame) {
        self.frames.push(*frame);
    }

    fn transition_finished(&mut self, state: CartState, _requests: &mut PanelRequests) {
        self.finished.push(state);
    }
}

fn run(panel: &mut PanelController, log: &mut Log, from: u64, to: u64) -> PanelFrame {
    let mut last = panel.sample(ms(from));
    let mut t = from;
    while t <= to {
        last = panel.tick(ms(t), log);
        t += FRAME_MS;
    }
    last
}

// ── Expand with five items ──────────────────────────────────────────────

#[test]
fn expanding_five_items_settles_full_screen() {
    let mut panel = PanelController::new(CartState::Collapsed, 5, viewport(), TransitionTable::shrine());
    let mut log = Log::default();

    assert_eq!(panel.sample(ms(0)).geometry.x_offset, 411.0 - collapsed_width(5));

    panel.request_state(CartState::Expanded, ms(0), &mut log);
    let end = run(&mut panel, &mut log, 0, 700);

    assert_eq!(log.changes, vec![CartState::Expanded]);
    assert_eq!(log.finished, vec![CartState::Expanded]);
    assert!(!end.animating);
    assert_eq!(end.geometry.height, 731.0);
    assert_eq!(end.geometry.x_offset, 0.0);
    assert_eq!(end.geometry.corner_radius, 0.0);
    assert_eq!(end.checkout.alpha, 1.0);

    // offset finishes at 150 ms while height is still moving
    let mid = log
        .frames
        .iter()
        .find(|f| f.geometry.x_offset == 0.0)
        .copied()
        .unwrap();
    assert!(mid.geometry.height < 731.0);
}

// ── Interruption ────────────────────────────────────────────────────────

#[test]
fn interruption_continues_from_sampled_values() {
    let mut panel = PanelController::new(CartState::Collapsed, 2, viewport(), TransitionTable::shrine());
    let mut log = Log::default();

    panel.request_state(CartState::Expanded, ms(0), &mut log);
    run(&mut panel, &mut log, 0, 80);
    let before = panel.sample(ms(90));

    panel.request_state(CartState::Collapsed, ms(90), &mut log);
    let after = panel.sample(ms(90));

    assert!((before.geometry.height - after.geometry.height).abs() < 1e-3);
    assert!((before.geometry.x_offset - after.geometry.x_offset).abs() < 1e-3);
    assert!((before.geometry.corner_radius - after.geometry.corner_radius).abs() < 1e-3);

    let end = run(&mut panel, &mut log, 90, 1200);
    assert_eq!(end.geometry.height, 56.0);
    assert_eq!(end.geometry.x_offset, 411.0 - collapsed_width(2));
    assert_eq!(log.finished, vec![CartState::Collapsed]);
}

// ── Derived re-targeting ────────────────────────────────────────────────

#[test]
fn count_change_while_collapsed_moves_offset_without_state_change() {
    let mut panel = PanelController::new(CartState::Collapsed, 1, viewport(), TransitionTable::shrine());
    let mut log = Log::default();

    panel.set_item_count(4);
    assert_eq!(panel.sample(ms(0)).geometry.x_offset, 411.0 - collapsed_width(1));

    let end = run(&mut panel, &mut log, 0, 600);
    assert!(log.changes.is_empty());
    assert!(log.finished.is_empty());
    assert!(!log.frames.is_empty());
    assert_eq!(end.geometry.x_offset, 411.0 - collapsed_width(4));
    assert_eq!(end.state, CartState::Collapsed);
}

#[test]
fn count_change_while_expanded_keeps_offset() {
    let mut panel = PanelController::new(CartState::Expanded, 1, viewport(), TransitionTable::shrine());
    let mut log = Log::default();

    panel.set_item_count(9);
    let end = run(&mut panel, &mut log, 0, 100);
    assert!(log.frames.is_empty());
    assert_eq!(end.geometry.x_offset, 0.0);
}

#[test]
fn resize_retargets_expanded_height() {
    let mut panel = PanelController::new(CartState::Expanded, 0, viewport(), TransitionTable::shrine());
    let mut log = Log::default();

    panel.set_viewport(Viewport::new(800.0, 600.0));
    let end = run(&mut panel, &mut log, 0, 600);
    assert_eq!(end.geometry.height, 600.0);
}

// ── Hidden ──────────────────────────────────────────────────────────────

#[test]
fn hidden_slides_past_trailing_edge_and_back() {
    let mut panel = PanelController::new(CartState::Collapsed, 3, viewport(), TransitionTable::shrine());
    let mut log = Log::default();

    panel.request_state(CartState::Hidden, ms(0), &mut log);
    let hidden = run(&mut panel, &mut log, 0, 600);
    assert_eq!(hidden.geometry.x_offset, 411.0);

    panel.request_state(CartState::Collapsed, ms(600), &mut log);
    let back = run(&mut panel, &mut log, 600, 1200);
    assert_eq!(back.geometry.x_offset, 411.0 - collapsed_width(3));
    assert_eq!(log.finished, vec![CartState::Hidden, CartState::Collapsed]);
}
