//! Property-based invariant tests for the catalog weave and column layout.
//!
//! 1. Concatenating the groups reproduces the input sequence.
//! 2. Every group holds one or two items.
//! 3. Pairs only appear at even group indices.
//! 4. Weaving is deterministic.
//! 5. Every card lies inside its column, and columns never overlap.

use proptest::prelude::*;
use shrine_core::catalog::{CatalogLayout, ColumnPattern};
use shrine_core::weave::{weave, WeaveGroup};
use shrine_core::Viewport;

// ── Helpers ─────────────────────────────────────────────────────────────

fn sequences(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(any::<u32>(), 0..=max_len)
}

fn viewports() -> impl Strategy<Value = Viewport> {
    (0.0f32..1200.0, 300.0f32..1600.0).prop_map(|(w, h)| Viewport::new(w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Concatenation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn concatenation_reproduces_input(items in sequences(200)) {
        let flat: Vec<u32> = weave(&items)
            .into_iter()
            .flat_map(WeaveGroup::into_vec)
            .collect();
        prop_assert_eq!(flat, items);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Group shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn groups_have_one_or_two_items(items in sequences(200)) {
        for group in weave(&items) {
            prop_assert!(matches!(group.len(), 1 | 2));
        }
    }

    #[test]
    fn pairs_sit_at_even_indices(items in sequences(200)) {
        for (index, group) in weave(&items).iter().enumerate() {
            if group.is_pair() {
                prop_assert_eq!(index % 2, 0, "pair at group {}", index);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn weave_is_deterministic(items in sequences(100)) {
        prop_assert_eq!(weave(&items), weave(&items));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Layout containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cards_stay_inside_columns(items in sequences(12), viewport in viewports()) {
        let groups = weave(&items);
        let columns = CatalogLayout::default().layout(&groups, viewport);
        prop_assert_eq!(columns.len(), groups.len());

        for column in &columns {
            let expected = if column.pattern == ColumnPattern::StaggeredPair { 2 } else { 1 };
            prop_assert_eq!(column.cards.len(), expected);
            for card in &column.cards {
                prop_assert!(column.frame.contains(&card.frame));
            }
        }

        for pair in columns.windows(2) {
            prop_assert!(pair[0].frame.right() <= pair[1].frame.x + 1e-3);
        }
    }
}
