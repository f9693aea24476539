//! # shrine-panel: Cart Panel State Machine
//!
//! Drives the cart panel between [`CartState::Expanded`],
//! [`CartState::Collapsed`] and [`CartState::Hidden`], animating its
//! height, horizontal offset, corner radius, content cross-fade and
//! checkout button on independent timings.
//!
//! ## Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PanelController                                  │
//! │                                                                         │
//! │   state ─────┬──► GeometrySnapshot::target(state, count, viewport)      │
//! │   count ─────┤        │                                                 │
//! │   viewport ──┘        ▼                                                 │
//! │             ┌──────────────┬──────────────┬──────────────┐              │
//! │             │ height       │ offset       │ corner       │  geometry    │
//! │             └──────────────┴──────────────┴──────────────┘              │
//! │             ┌─────────────────────────────┬──────────────┐              │
//! │             │ content (in + out)          │ checkout     │  appearance  │
//! │             └─────────────────────────────┴──────────────┘              │
//! │                                                                         │
//! │   Each channel: {start_value, target_value, start_time, profile}        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use shrine_core::Viewport;
//! use shrine_panel::{CartState, PanelController, TransitionTable};
//!
//! let mut panel = PanelController::new(
//!     CartState::Collapsed,
//!     2,
//!     Viewport::new(411.0, 731.0),
//!     TransitionTable::shrine(),
//! );
//! assert!(panel.request_state(CartState::Expanded, Duration::ZERO, &mut ()));
//!
//! let frame = panel.tick(Duration::from_millis(600), &mut ());
//! assert_eq!(frame.geometry.height, 731.0);
//! assert_eq!(frame.geometry.x_offset, 0.0);
//! ```

pub mod channel;
pub mod checkout;
pub mod content;
pub mod controller;
pub mod easing;
pub mod geometry;
pub mod profile;
pub mod state;

pub use channel::ChannelAnimation;
pub use checkout::{CheckoutButton, CheckoutFrame};
pub use content::{ContentFrame, Crossfade, PanelContent};
pub use controller::{PanelController, PanelFrame, PanelObserver, PanelRequests};
pub use easing::Easing;
pub use geometry::{collapsed_width, GeometrySnapshot, PanelMetrics};
pub use profile::{ChannelProfiles, CheckoutProfiles, CrossfadeProfile, TransitionProfile, TransitionTable};
pub use state::{CartState, UnknownCartState};
