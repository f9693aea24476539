//! # Scripted Session
//!
//! Runs a fixed shopping session against the storefront on a paced frame
//! loop, writing every notification to a sink.
//!
//! ## Frame Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  interval(1 / fps) ──► tick ──► now = start.elapsed()                   │
//! │                                   │                                     │
//! │                                   ├─► handle every scripted event due   │
//! │                                   │   at or before `now`                │
//! │                                   │                                     │
//! │                                   └─► storefront.frame(now)             │
//! │                                                                         │
//! │  Stops once `now` passes frames.run_for_ms.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Missed ticks are skipped rather than bunched: the panel samples
//! absolute time, so a late frame lands on the right geometry anyway.

use std::io::Write;
use std::time::Duration;

use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info};

use shrine_core::Category;
use shrine_panel::CartState;

use crate::config::StorefrontConfig;
use crate::error::HostResult;
use crate::events::{HostEvent, HostNotification};
use crate::host::{NotificationSink, Storefront};
use crate::sample::shrine_catalog;

// =============================================================================
// JSON Lines Sink
// =============================================================================

/// Writes one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        JsonLinesSink { out, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationSink for JsonLinesSink<W> {
    fn notify(&mut self, notification: HostNotification) -> HostResult<()> {
        serde_json::to_writer(&mut self.out, &notification)?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }
}

// =============================================================================
// Script
// =============================================================================

/// An event and the session time it fires at.
#[derive(Debug, Clone)]
pub struct ScriptedEvent {
    pub at: Duration,
    pub event: HostEvent,
}

fn at(ms: u64, event: HostEvent) -> ScriptedEvent {
    ScriptedEvent {
        at: Duration::from_millis(ms),
        event,
    }
}

/// Browse, fill the cart, peek at it, filter, then check out.
pub fn shopping_session() -> Vec<ScriptedEvent> {
    let catalog = shrine_catalog();
    let pick = |index: usize| catalog[index % catalog.len()].clone();
    let removed = pick(9);

    vec![
        at(0, HostEvent::CatalogChanged { items: Some(catalog.clone()) }),
        at(150, HostEvent::ItemAdded { item: pick(0) }),
        at(300, HostEvent::ItemAdded { item: pick(9) }),
        at(450, HostEvent::ItemAdded { item: pick(20) }),
        at(600, HostEvent::ItemAdded { item: pick(31) }),
        at(800, HostEvent::RequestState { state: CartState::Expanded }),
        at(1_000, HostEvent::ItemRemoved { id: removed.id }),
        at(1_050, HostEvent::ItemRemoved { id: removed.id }),
        at(1_500, HostEvent::RequestState { state: CartState::Collapsed }),
        // interrupts the collapse
        at(1_700, HostEvent::BackdropRevealed { revealed: true }),
        at(2_200, HostEvent::CategorySelected { category: Category::Home }),
        at(2_400, HostEvent::BackdropRevealed { revealed: false }),
        at(2_600, HostEvent::ViewportResized { width: 600.0, height: 900.0 }),
        at(2_900, HostEvent::RequestState { state: CartState::Expanded }),
        at(3_000, HostEvent::Checkout),
    ]
}

// =============================================================================
// Frame Loop
// =============================================================================

/// What a finished session did.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub frames: u64,
    pub events: usize,
    pub final_state: CartState,
    pub cart_items: usize,
}

/// Plays `script` against a fresh storefront until `frames.run_for_ms`.
pub async fn run_session(
    config: &StorefrontConfig,
    script: Vec<ScriptedEvent>,
    sink: &mut dyn NotificationSink,
) -> HostResult<SessionSummary> {
    let mut storefront = Storefront::new(config)?;
    let run_for = Duration::from_millis(config.frames.run_for_ms);

    let mut pending = script;
    pending.sort_by_key(|scripted| scripted.at);
    let mut pending = pending.into_iter().peekable();

    let mut ticker = interval(config.frame_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        fps = config.frames.fps,
        run_for_ms = config.frames.run_for_ms,
        events = pending.len(),
        "Starting scripted session"
    );

    let start = Instant::now();
    let mut frames = 0u64;
    let mut events = 0usize;

    loop {
        ticker.tick().await;
        let now = start.elapsed();

        while let Some(scripted) = pending.next_if(|scripted| scripted.at <= now) {
            debug!(at_ms = scripted.at.as_millis() as u64, event = ?scripted.event, "Dispatching event");
            storefront.handle(scripted.event, now, sink)?;
            events += 1;
        }

        storefront.frame(now, sink)?;
        frames += 1;

        if now >= run_for {
            break;
        }
    }

    let summary = SessionSummary {
        frames,
        events,
        final_state: storefront.panel().state(),
        cart_items: storefront.cart().len(),
    };
    info!(
        frames = summary.frames,
        events = summary.events,
        final_state = %summary.final_state,
        "Scripted session finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(sink: &[HostNotification], kind: &str) -> usize {
        sink.iter().filter(|n| n.kind() == kind).count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_plays_whole_script() {
        let config = StorefrontConfig::default();
        let mut sink = Vec::new();
        let summary = run_session(&config, shopping_session(), &mut sink).await.unwrap();

        assert_eq!(summary.events, shopping_session().len());
        assert_eq!(summary.cart_items, 0);
        assert_eq!(summary.final_state, CartState::Collapsed);
        assert!(summary.frames >= 200);

        assert_eq!(kinds(&sink, "item_removal_ignored"), 1);
        assert_eq!(kinds(&sink, "weave_result"), 3);
        assert!(kinds(&sink, "geometry_updated") > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reduced_motion_session_still_settles() {
        let mut config = StorefrontConfig::default();
        config.panel.reduced_motion = true;
        config.frames.fps = 30;
        let mut sink = Vec::new();
        let summary = run_session(&config, shopping_session(), &mut sink).await.unwrap();

        assert_eq!(summary.final_state, CartState::Collapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_run_skips_late_events() {
        let mut config = StorefrontConfig::default();
        config.frames.run_for_ms = 500;
        let mut sink = Vec::new();
        let summary = run_session(&config, shopping_session(), &mut sink).await.unwrap();

        assert_eq!(summary.cart_items, 3);
        assert_eq!(summary.final_state, CartState::Collapsed);
    }

    #[test]
    fn test_json_lines_sink() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.notify(HostNotification::StateChanged { state: CartState::Hidden }).unwrap();
        sink.notify(HostNotification::StateChanged { state: CartState::Collapsed }).unwrap();
        assert_eq!(sink.written(), 2);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"notification":"state_changed","state":"hidden"}"#);
    }
}
