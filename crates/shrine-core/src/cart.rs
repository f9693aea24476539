//! # Cart
//!
//! The host-owned, ordered cart collection.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Touches the Cart                                 │
//! │                                                                         │
//! │  Catalog tap ────────► host.add(item) ─────────► items.push(item)      │
//! │                                                                         │
//! │  Cart row tap ───────► host.remove(id) ────────► first match removed   │
//! │                                                  (or NotInCart)         │
//! │                                                                         │
//! │  Panel controller ───► cart.len() ─────────────► collapsed width       │
//! │  Glance renderer ────► cart.glance() ──────────► 3 thumbs + "+N"       │
//! │                                                                         │
//! │  NOTE: only the host mutates. Panel and renderer read snapshots.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Insertion order is display order. The same catalog item may be added
//! more than once; each add is its own line and `remove` takes out the
//! earliest line carrying the id.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ImageRef, Item, ItemId};
use crate::{GLANCE_SLOTS, MAX_CART_ITEMS};

// =============================================================================
// Removal Outcome
// =============================================================================

/// Result of a removal request.
///
/// A removal of an item that is no longer in the cart is expected (double
/// taps racing the removal animation) and is reported, not raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item was removed; carries the removed line.
    Removed(Item),
    /// Nothing in the cart carries this id.
    NotInCart(ItemId),
}

impl Removal {
    #[inline]
    pub fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed(_))
    }
}

// =============================================================================
// Glance
// =============================================================================

/// What the collapsed strip shows: up to [`GLANCE_SLOTS`] thumbnails and an
/// overflow count for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartGlance {
    pub thumbnails: Vec<ImageRef>,
    /// Items beyond the thumbnails; zero when everything fits.
    pub overflow: usize,
}

impl CartGlance {
    /// Badge text, e.g. `"+2"`. `None` when nothing overflows.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of items.
///
/// ## Invariants
/// - Order is insertion order
/// - At most [`MAX_CART_ITEMS`] lines
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends an item.
    pub fn add(&mut self, item: Item) -> CoreResult<()> {
        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the earliest line carrying `id`.
    pub fn remove(&mut self, id: ItemId) -> Removal {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => Removal::Removed(self.items.remove(index)),
            None => Removal::NotInCart(id),
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Number of lines; this is the item count the panel sizes itself by.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view in display order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of all item prices.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Collapsed strip content.
    pub fn glance(&self) -> CartGlance {
        CartGlance {
            thumbnails: self
                .items
                .iter()
                .take(GLANCE_SLOTS)
                .map(|item| item.image.clone())
                .collect(),
            overflow: self.items.len().saturating_sub(GLANCE_SLOTS),
        }
    }

    /// Expanded header count, e.g. `"3 ITEMS"`.
    pub fn count_label(&self) -> String {
        match self.items.len() {
            1 => "1 ITEM".to_string(),
            n => format!("{n} ITEMS"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
