//! # Sample Catalog
//!
//! The stock Shrine product line used by the scripted session. Ids are
//! fixed so runs are reproducible.

use uuid::Uuid;

use shrine_core::{Category, ImageRef, Item, ItemId, Money, Vendor};

const PRODUCTS: &[(&str, i64, Vendor, Category)] = &[
    ("Vagabond sack", 120, Vendor::Alphi, Category::Accessories),
    ("Stella sunglasses", 58, Vendor::Lmbrjk, Category::Accessories),
    ("Whitney belt", 35, Vendor::Lmbrjk, Category::Accessories),
    ("Garden strand", 98, Vendor::Alphi, Category::Accessories),
    ("Strut earrings", 34, Vendor::Six, Category::Accessories),
    ("Varsity socks", 12, Vendor::Squiggle, Category::Accessories),
    ("Weave keyring", 16, Vendor::Squiggle, Category::Accessories),
    ("Gatsby hat", 40, Vendor::Six, Category::Accessories),
    ("Shrug bag", 198, Vendor::Trace, Category::Accessories),
    ("Gilt desk trio", 58, Vendor::Six, Category::Home),
    ("Copper wire rack", 18, Vendor::Trace, Category::Home),
    ("Soothe ceramic set", 28, Vendor::Zeta, Category::Home),
    ("Hurrahs tea set", 34, Vendor::Trace, Category::Home),
    ("Blue stone mug", 18, Vendor::Trace, Category::Home),
    ("Rainwater tray", 27, Vendor::Trace, Category::Home),
    ("Chambray napkins", 16, Vendor::Trace, Category::Home),
    ("Succulent planters", 16, Vendor::Zeta, Category::Home),
    ("Quartet table", 175, Vendor::Trace, Category::Home),
    ("Kitchen quattro", 129, Vendor::Trace, Category::Home),
    ("Clay sweater", 48, Vendor::Zeta, Category::Clothing),
    ("Sea tunic", 45, Vendor::Zeta, Category::Clothing),
    ("Plaster tunic", 38, Vendor::Zeta, Category::Clothing),
    ("White pinstripe shirt", 70, Vendor::Zeta, Category::Clothing),
    ("Chambray shirt", 70, Vendor::Zeta, Category::Clothing),
    ("Seabreeze sweater", 60, Vendor::Zeta, Category::Clothing),
    ("Gentry jacket", 98, Vendor::Zeta, Category::Clothing),
    ("Navy trousers", 74, Vendor::Zeta, Category::Clothing),
    ("Walter henley", 38, Vendor::Zeta, Category::Clothing),
    ("Surf and perf shirt", 48, Vendor::Zeta, Category::Clothing),
    ("Ginger scarf", 98, Vendor::Zeta, Category::Clothing),
    ("Ramona crossover", 68, Vendor::Mal, Category::Clothing),
    ("Classic white collar", 58, Vendor::Mal, Category::Clothing),
    ("Cerise scallop tee", 42, Vendor::Mal, Category::Clothing),
    ("Shoulder rolls tee", 27, Vendor::Mal, Category::Clothing),
    ("Grey slouch tank", 24, Vendor::Mal, Category::Clothing),
    ("Sunshirt dress", 58, Vendor::Mal, Category::Clothing),
    ("Fine lines tee", 58, Vendor::Mal, Category::Clothing),
];

/// The full sample catalog in display order.
pub fn shrine_catalog() -> Vec<Item> {
    PRODUCTS
        .iter()
        .enumerate()
        .map(|(index, &(title, price, vendor, category))| {
            Item::new(
                title,
                Money::from_whole(price),
                vendor,
                category,
                ImageRef::new(format!("photos/{index}-0.jpg")),
            )
            .with_id(ItemId::from_uuid(Uuid::from_u128(index as u128 + 1)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrine_core::validation::validate_item;

    #[test]
    fn test_sample_items_are_valid_and_stable() {
        let first = shrine_catalog();
        let second = shrine_catalog();
        assert_eq!(first.len(), PRODUCTS.len());
        assert_eq!(first, second);
        for item in &first {
            assert!(validate_item(item).is_ok(), "{}", item.title);
        }
    }

    #[test]
    fn test_every_category_is_stocked() {
        let catalog = shrine_catalog();
        for category in [Category::Accessories, Category::Clothing, Category::Home] {
            assert!(catalog.iter().any(|item| item.category == category));
        }
    }
}
