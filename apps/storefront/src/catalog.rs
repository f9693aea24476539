//! # Catalog State
//!
//! The loaded catalog, the active category filter and the column layout.
//! Every change produces a fresh [`HostNotification::WeaveResult`].

use tracing::debug;

use shrine_core::validation::validate_item;
use shrine_core::{weave_catalog, CatalogLayout, Category, Item, Viewport};

use crate::error::HostResult;
use crate::events::HostNotification;

#[derive(Debug, Clone)]
pub struct CatalogState {
    items: Option<Vec<Item>>,
    category: Category,
    layout: CatalogLayout,
    viewport: Viewport,
}

impl CatalogState {
    pub fn new(category: Category, viewport: Viewport) -> Self {
        CatalogState {
            items: None,
            category,
            layout: CatalogLayout::default(),
            viewport,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Number of loaded items, before filtering.
    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the catalog. Every item is validated first; on failure the
    /// old catalog stays.
    pub fn replace(&mut self, items: Option<Vec<Item>>) -> HostResult<()> {
        if let Some(items) = &items {
            for item in items {
                validate_item(item)?;
            }
        }
        debug!(
            loaded = items.is_some(),
            count = items.as_ref().map_or(0, Vec::len),
            "Catalog replaced"
        );
        self.items = items;
        Ok(())
    }

    /// Returns whether the filter changed.
    pub fn select(&mut self, category: Category) -> bool {
        if category == self.category {
            return false;
        }
        debug!(from = %self.category, to = %category, "Catalog category selected");
        self.category = category;
        true
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Filter, weave and lay out the current catalog.
    pub fn weave_result(&self) -> HostNotification {
        let groups = weave_catalog(self.items.as_deref(), self.category);
        let columns = self.layout.layout(&groups, self.viewport);
        HostNotification::WeaveResult {
            category: self.category,
            groups,
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrine_core::{ImageRef, Money, Vendor};

    fn item(title: &str, category: Category) -> Item {
        Item::new(title, Money::from_whole(20), Vendor::Zeta, category, ImageRef::new("photos/0-0.jpg"))
    }

    fn column_count(notification: &HostNotification) -> usize {
        match notification {
            HostNotification::WeaveResult { groups, columns, .. } => {
                assert_eq!(groups.len(), columns.len());
                groups.len()
            }
            other => panic!("unexpected notification {}", other.kind()),
        }
    }

    #[test]
    fn test_absent_catalog_weaves_to_nothing() {
        let state = CatalogState::new(Category::All, Viewport::new(411.0, 731.0));
        assert!(state.is_empty());
        assert_eq!(column_count(&state.weave_result()), 0);
    }

    #[test]
    fn test_category_filters_before_weaving() {
        let mut state = CatalogState::new(Category::All, Viewport::new(411.0, 731.0));
        state
            .replace(Some(vec![
                item("Garden strand", Category::Accessories),
                item("Quartet table", Category::Home),
                item("Sunshirt dress", Category::Clothing),
                item("Rainwater tray", Category::Home),
            ]))
            .unwrap();

        assert_eq!(column_count(&state.weave_result()), 3);
        assert!(state.select(Category::Home));
        assert!(!state.select(Category::Home));
        assert_eq!(column_count(&state.weave_result()), 1);
    }

    #[test]
    fn test_invalid_item_keeps_old_catalog() {
        let mut state = CatalogState::new(Category::All, Viewport::new(411.0, 731.0));
        state.replace(Some(vec![item("Gatsby hat", Category::Accessories)])).unwrap();
        let bad = item("", Category::Accessories);
        assert!(state.replace(Some(vec![bad])).is_err());
        assert_eq!(state.len(), 1);
    }
}
