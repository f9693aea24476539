//! # Panel Geometry
//!
//! Target geometry of the cart panel as a pure function of
//! `(state, item_count, viewport)`.
//!
//! ## Collapsed Width
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ◄24►◄40►◄16►◄40►◄16►◄40►◄16►◄40►◄16►◄32►◄16►                          │
//! │  ┌───┬────┬───┬────┬───┬────┬───┬────┬───┬────┬───┐                    │
//! │  │   │cart│   │ t1 │   │ t2 │   │ t3 │   │ +N │   │                    │
//! │  └───┴────┴───┴────┴───┴────┴───┴────┴───┴────┴───┘                    │
//! │  lead icon   ─── min(n,3) thumbnails ───  overflow  trail               │
//! │                                           (n > 3)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use shrine_core::{Viewport, GLANCE_SLOTS};

use crate::state::CartState;

// =============================================================================
// Metrics
// =============================================================================

/// Fixed panel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelMetrics {
    pub collapsed_height: f32,
    pub collapsed_corner: f32,
    pub leading_inset: f32,
    /// Cart icon and each thumbnail.
    pub slot_width: f32,
    pub slot_gap: f32,
    pub trailing_inset: f32,
    pub overflow_badge: f32,
    pub overflow_gap: f32,
}

impl PanelMetrics {
    pub const SHRINE: PanelMetrics = PanelMetrics {
        collapsed_height: 56.0,
        collapsed_corner: 24.0,
        leading_inset: 24.0,
        slot_width: 40.0,
        slot_gap: 16.0,
        trailing_inset: 16.0,
        overflow_badge: 32.0,
        overflow_gap: 16.0,
    };

    /// Width of the collapsed pill for `item_count` cart lines.
    pub fn collapsed_width(&self, item_count: usize) -> f32 {
        let shown = item_count.min(GLANCE_SLOTS) as f32;
        let base = self.leading_inset
            + self.slot_width * (shown + 1.0)
            + self.slot_gap * shown
            + self.trailing_inset;
        if item_count > GLANCE_SLOTS {
            base + self.overflow_badge + self.overflow_gap
        } else {
            base
        }
    }
}

impl Default for PanelMetrics {
    fn default() -> Self {
        PanelMetrics::SHRINE
    }
}

/// Collapsed pill width with the stock metrics.
///
/// ```rust
/// use shrine_panel::collapsed_width;
///
/// assert_eq!(collapsed_width(0), 80.0);
/// assert_eq!(collapsed_width(3), 248.0);
/// assert_eq!(collapsed_width(4), 296.0);
/// ```
pub fn collapsed_width(item_count: usize) -> f32 {
    PanelMetrics::SHRINE.collapsed_width(item_count)
}

// =============================================================================
// Snapshot
// =============================================================================

/// The three animated geometry channels at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, TS)]
#[ts(export)]
pub struct GeometrySnapshot {
    pub height: f32,
    /// Distance of the panel's leading edge from the viewport's leading edge.
    pub x_offset: f32,
    /// Radius of the top-leading corner.
    pub corner_radius: f32,
}

impl GeometrySnapshot {
    /// Resting geometry for `state`.
    pub fn target(
        metrics: &PanelMetrics,
        state: CartState,
        item_count: usize,
        viewport: Viewport,
    ) -> Self {
        let (height, corner_radius) = match state {
            CartState::Expanded => (viewport.height(), 0.0),
            CartState::Collapsed | CartState::Hidden => {
                (metrics.collapsed_height, metrics.collapsed_corner)
            }
        };
        let x_offset = match state {
            CartState::Expanded => 0.0,
            CartState::Collapsed => viewport.width() - metrics.collapsed_width(item_count),
            CartState::Hidden => viewport.width(),
        };
        GeometrySnapshot {
            height,
            x_offset,
            corner_radius,
        }
    }

    /// Panel width implied by the offset.
    pub fn width(&self, viewport: Viewport) -> f32 {
        viewport.width() - self.x_offset
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(400.0, 800.0)
    }

    #[test]
    fn test_collapsed_width_steps() {
        assert_eq!(collapsed_width(0), 80.0);
        assert_eq!(collapsed_width(1), 136.0);
        assert_eq!(collapsed_width(2), 192.0);
        assert_eq!(collapsed_width(3), 248.0);
        assert_eq!(collapsed_width(4), 296.0);
        assert_eq!(collapsed_width(10), 296.0);
    }

    #[test]
    fn test_expanded_fills_viewport() {
        let g = GeometrySnapshot::target(&PanelMetrics::SHRINE, CartState::Expanded, 5, viewport());
        assert_eq!(g.height, 800.0);
        assert_eq!(g.x_offset, 0.0);
        assert_eq!(g.corner_radius, 0.0);
        assert_eq!(g.width(viewport()), 400.0);
    }

    #[test]
    fn test_hidden_sits_past_trailing_edge() {
        for n in [0, 3, 12] {
            let g = GeometrySnapshot::target(&PanelMetrics::SHRINE, CartState::Hidden, n, viewport());
            assert_eq!(g.x_offset, 400.0);
            assert_eq!(g.height, 56.0);
            assert_eq!(g.corner_radius, 24.0);
        }
    }

    #[test]
    fn test_collapsed_offset_tracks_count() {
        let metrics = PanelMetrics::SHRINE;
        let one = GeometrySnapshot::target(&metrics, CartState::Collapsed, 1, viewport());
        let five = GeometrySnapshot::target(&metrics, CartState::Collapsed, 5, viewport());
        assert_eq!(one.x_offset, 400.0 - 136.0);
        assert_eq!(five.x_offset, 400.0 - 296.0);
    }
}
