//! # Host Events and Notifications
//!
//! The storefront's inbound and outbound message types.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI input                    Storefront                 Renderer        │
//! │  ────────                    ──────────                 ────────        │
//! │  HostEvent ───────────────►  handle(event, now)                         │
//! │                              frame(now) ─────────────►  HostNotification│
//! │                                                                         │
//! │  Both travel as tagged JSON, e.g.                                       │
//! │  {"event":"request_state","state":"expanded"}                           │
//! │  {"notification":"state_changed","state":"expanded"}                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use shrine_core::{CartGlance, Category, ColumnLayout, Item, ItemId, Money, WeaveGroup};
use shrine_panel::{CartState, PanelFrame};

// =============================================================================
// Inbound
// =============================================================================

/// Something the UI or the scripted session asks the host to do.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// Move the cart panel to `state`.
    RequestState { state: CartState },

    ItemAdded { item: Item },

    ItemRemoved { id: ItemId },

    /// Replace the catalog. `None` means no catalog is loaded.
    CatalogChanged { items: Option<Vec<Item>> },

    CategorySelected { category: Category },

    /// The backdrop menu opened (`true`) or closed (`false`).
    BackdropRevealed { revealed: bool },

    ViewportResized { width: f32, height: f32 },

    /// Place the order: empties the cart and collapses the panel.
    Checkout,
}

// =============================================================================
// Outbound
// =============================================================================

/// Something the renderer needs to know.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "notification", rename_all = "snake_case")]
pub enum HostNotification {
    StateChanged {
        state: CartState,
    },

    /// Sent every frame while the panel animates, and once more at rest.
    GeometryUpdated {
        frame: PanelFrame,
    },

    /// The woven catalog and where each column goes.
    WeaveResult {
        category: Category,
        groups: Vec<WeaveGroup<Item>>,
        columns: Vec<ColumnLayout>,
    },

    /// Cart contents changed.
    CartUpdated {
        item_count: usize,
        count_label: String,
        subtotal: Money,
        glance: CartGlance,
    },

    /// A removal named an item the cart no longer holds.
    ItemRemovalIgnored {
        id: ItemId,
    },

    /// The cart already holds `max` lines; the item was not added.
    ItemAdditionRejected {
        id: ItemId,
        max: usize,
    },
}

impl HostNotification {
    /// Tag name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HostNotification::StateChanged { .. } => "state_changed",
            HostNotification::GeometryUpdated { .. } => "geometry_updated",
            HostNotification::WeaveResult { .. } => "weave_result",
            HostNotification::CartUpdated { .. } => "cart_updated",
            HostNotification::ItemRemovalIgnored { .. } => "item_removal_ignored",
            HostNotification::ItemAdditionRejected { .. } => "item_addition_rejected",
        }
    }
}
