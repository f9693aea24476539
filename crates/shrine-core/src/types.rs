//! # Domain Types
//!
//! The item model shared by the catalog and the cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     Vendor      │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  Alphi          │   │  All (filter)   │       │
//! │  │  title          │   │  Lmbrjk         │   │  Accessories    │       │
//! │  │  price (Money)  │   │  Mal, Six, ...  │   │  Clothing       │       │
//! │  │  vendor         │   └─────────────────┘   │  Home           │       │
//! │  │  category       │                         └─────────────────┘       │
//! │  │  image (opaque) │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Items are compared by `id` only. Two items with the same title and price
//! are different items; two handles to the same item share an id.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Item Id
// =============================================================================

/// Unique, immutable item identity (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(#[ts(type = "string")] Uuid);

impl ItemId {
    /// Generates a fresh id.
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        ItemId(uuid)
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Image Reference
// =============================================================================

/// Opaque handle to an item photo. The core never decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        ImageRef(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Vendor
// =============================================================================

/// Brand printed under each catalog card and in cart rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    Alphi,
    Lmbrjk,
    Mal,
    Six,
    Squiggle,
    Trace,
    Zeta,
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Vendor::Alphi => "Alphi",
            Vendor::Lmbrjk => "Lmbrjk",
            Vendor::Mal => "Mal",
            Vendor::Six => "Six",
            Vendor::Squiggle => "Squiggle",
            Vendor::Trace => "Trace",
            Vendor::Zeta => "Zeta",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Catalog category.
///
/// `All` never appears on an item; it is the "no filter" entry of the
/// category menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    Accessories,
    Clothing,
    Home,
}

impl Category {
    /// Menu order.
    pub const MENU: [Category; 4] = [
        Category::All,
        Category::Accessories,
        Category::Clothing,
        Category::Home,
    ];

    /// Returns true if an item of category `item_category` passes this filter.
    #[inline]
    pub fn admits(self, item_category: Category) -> bool {
        self == Category::All || self == item_category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::All => "all",
            Category::Accessories => "accessories",
            Category::Clothing => "clothing",
            Category::Home => "home",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Category::All),
            "accessories" => Ok(Category::Accessories),
            "clothing" => Ok(Category::Clothing),
            "home" => Ok(Category::Home),
            _ => Err(crate::error::ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::MENU.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A product shown in the catalog and carried in the cart. Immutable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub price: Money,
    pub vendor: Vendor,
    pub category: Category,
    pub image: ImageRef,
}

impl Item {
    /// Creates an item with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        price: Money,
        vendor: Vendor,
        category: Category,
        image: ImageRef,
    ) -> Self {
        Item {
            id: ItemId::new(),
            title: title.into(),
            price,
            vendor,
            category,
            image,
        }
    }

    /// Same item under an explicit id.
    #[must_use]
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }
}

/// Identity equality: only the id takes part.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tote(price: i64) -> Item {
        Item::new(
            "Vagabond sack",
            Money::from_whole(price),
            Vendor::Squiggle,
            Category::Accessories,
            ImageRef::new("photos/0-0.jpg"),
        )
    }

    #[test]
    fn test_identical_fields_are_distinct_items() {
        let a = tote(120);
        let b = tote(120);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_equality_ignores_fields_when_ids_match() {
        let a = tote(120);
        let b = tote(99).with_id(a.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_filter() {
        assert!(Category::All.admits(Category::Home));
        assert!(Category::Home.admits(Category::Home));
        assert!(!Category::Clothing.admits(Category::Home));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Home".parse::<Category>().unwrap(), Category::Home);
        assert_eq!("".parse::<Category>().unwrap(), Category::All);
        assert!("garden".parse::<Category>().is_err());
    }

    #[test]
    fn test_item_serializes_id_as_string() {
        let item = tote(120);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], item.id.to_string());
        assert_eq!(json["vendor"], "squiggle");
        assert_eq!(json["price"], 12000);
    }
}
