//! # shrine-core: Pure Catalog Logic for the Shrine Storefront
//!
//! This crate holds the data model and the algorithmic half of the storefront
//! presentation layer: the item model, the host-owned cart collection, the
//! catalog weave and the column geometry the renderer places cards with.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shrine Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Renderer (external)                          │   │
//! │  │    Catalog columns ──► Cards        Cart panel ──► Thumbnails   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ notifications                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (host composition)              │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐    │
//! │  │   ★ shrine-core (THIS CRATE) ★  │  │   shrine-panel            │    │
//! │  │                                 │  │   CartState, geometry,    │    │
//! │  │   types   cart   weave  catalog │◄─│   channel animations      │    │
//! │  │                                 │  │                           │    │
//! │  │   NO I/O • NO CLOCK • PURE      │  └───────────────────────────┘    │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item model (Item, ItemId, Vendor, Category)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Ordered, host-owned cart collection
//! - [`weave`] - The pair/single weave over a flat item sequence
//! - [`catalog`] - Column pattern selection and card geometry
//! - [`geometry`] - Viewport and Rect
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shrine_core::weave::{weave, WeaveGroup};
//!
//! let groups = weave(&["a", "b", "c", "d"]);
//! assert_eq!(
//!     groups,
//!     vec![
//!         WeaveGroup::Pair("a", "b"),
//!         WeaveGroup::Single("c"),
//!         WeaveGroup::Single("d"),
//!     ]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod money;
pub mod types;
pub mod validation;
pub mod weave;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartGlance, Removal};
pub use catalog::{
    filter_by_category, pattern_for, weave_catalog, CardAlignment, CardPlacement, CatalogLayout,
    CatalogMetrics, ColumnLayout, ColumnPattern,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use geometry::{Rect, Viewport};
pub use money::Money;
pub use types::*;
pub use weave::{weave, weave_or_empty, WeaveGroup};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of item thumbnails shown in the collapsed cart glance.
///
/// Also the slot clamp in the collapsed panel width: items beyond this count
/// collapse into a `+N` overflow badge.
pub const GLANCE_SLOTS: usize = 3;

/// Maximum items allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;
