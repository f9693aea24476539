//! # Weave
//!
//! Groups a flat item sequence into the catalog's pair/single rhythm.
//!
//! ## Cursor Walk
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  i = 0                                                                  │
//! │  while i < len:                                                         │
//! │      if i % 3 == 0 and i + 1 < len:  emit [items[i], items[i+1]]; i += 2│
//! │      else:                           emit [items[i]];             i += 1│
//! │                                                                         │
//! │  7 items:  i=0 pair  i=2 single  i=3 pair  i=5 single  i=6 single(tail) │
//! │            [1,2]     [3]         [4,5]     [6]         [7]              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because a pair advances the cursor by two, pairing steps land on
//! 0, 3, 6, 9, ... only by way of the intervening single; the output is
//! therefore an alternation of pair and single groups, with a single at
//! the tail whenever a pairing step has no partner left.

use serde::ser::{Serialize, SerializeSeq, Serializer};

// =============================================================================
// Weave Group
// =============================================================================

/// One catalog column's worth of items: one or two, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaveGroup<T> {
    Single(T),
    Pair(T, T),
}

impl<T> WeaveGroup<T> {
    /// 1 or 2.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            WeaveGroup::Single(_) => 1,
            WeaveGroup::Pair(..) => 2,
        }
    }

    /// Always false; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_pair(&self) -> bool {
        matches!(self, WeaveGroup::Pair(..))
    }

    /// The leading item.
    pub fn first(&self) -> &T {
        match self {
            WeaveGroup::Single(a) | WeaveGroup::Pair(a, _) => a,
        }
    }

    /// The trailing item of a pair.
    pub fn second(&self) -> Option<&T> {
        match self {
            WeaveGroup::Single(_) => None,
            WeaveGroup::Pair(_, b) => Some(b),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(self.first()).chain(self.second())
    }

    pub fn as_ref(&self) -> WeaveGroup<&T> {
        match self {
            WeaveGroup::Single(a) => WeaveGroup::Single(a),
            WeaveGroup::Pair(a, b) => WeaveGroup::Pair(a, b),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> WeaveGroup<U> {
        match self {
            WeaveGroup::Single(a) => WeaveGroup::Single(f(a)),
            WeaveGroup::Pair(a, b) => WeaveGroup::Pair(f(a), f(b)),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            WeaveGroup::Single(a) => vec![a],
            WeaveGroup::Pair(a, b) => vec![a, b],
        }
    }
}

impl<T: Clone> WeaveGroup<&T> {
    pub fn cloned(self) -> WeaveGroup<T> {
        self.map(Clone::clone)
    }
}

/// Serialized as a plain 1- or 2-element array.
impl<T: Serialize> Serialize for WeaveGroup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

// =============================================================================
// Weave Iterator
// =============================================================================

/// Lazily walks the cursor over a slice, yielding borrowed groups.
#[derive(Debug, Clone)]
pub struct Weave<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T> Weave<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Weave { items, cursor: 0 }
    }
}

impl<'a, T> Iterator for Weave<'a, T> {
    type Item = WeaveGroup<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.cursor;
        let first = self.items.get(i)?;

        if i % 3 == 0 {
            if let Some(second) = self.items.get(i + 1) {
                self.cursor += 2;
                return Some(WeaveGroup::Pair(first, second));
            }
        }

        self.cursor += 1;
        Some(WeaveGroup::Single(first))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(self.cursor);
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl<T> std::iter::FusedIterator for Weave<'_, T> {}

// =============================================================================
// Entry Points
// =============================================================================

/// Weaves `items` into owned groups.
///
/// ```rust
/// use shrine_core::weave::{weave, WeaveGroup};
///
/// assert!(weave::<u8>(&[]).is_empty());
/// assert_eq!(weave(&[1]), vec![WeaveGroup::Single(1)]);
/// ```
pub fn weave<T: Clone>(items: &[T]) -> Vec<WeaveGroup<T>> {
    Weave::new(items).map(WeaveGroup::cloned).collect()
}

/// Weaves an optional sequence; an absent catalog is an empty catalog.
pub fn weave_or_empty<T: Clone>(items: Option<&[T]>) -> Vec<WeaveGroup<T>> {
    items.map(weave).unwrap_or_default()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten<T: Clone>(groups: &[WeaveGroup<T>]) -> Vec<T> {
        groups.iter().flat_map(|g| g.iter().cloned()).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(weave::<i32>(&[]).is_empty());
        assert_eq!(weave(&["a"]), vec![WeaveGroup::Single("a")]);
        assert!(weave_or_empty::<i32>(None).is_empty());
        assert_eq!(weave_or_empty(Some(&[7][..])), vec![WeaveGroup::Single(7)]);
    }

    #[test]
    fn test_seven_items_follow_the_cursor() {
        let items = ["i1", "i2", "i3", "i4", "i5", "i6", "i7"];
        assert_eq!(
            weave(&items),
            vec![
                WeaveGroup::Pair("i1", "i2"),
                WeaveGroup::Single("i3"),
                WeaveGroup::Pair("i4", "i5"),
                WeaveGroup::Single("i6"),
                WeaveGroup::Single("i7"),
            ]
        );
    }

    #[test]
    fn test_group_shapes_for_small_lengths() {
        let shapes = |n: usize| -> Vec<usize> {
            let items: Vec<usize> = (0..n).collect();
            weave(&items).iter().map(WeaveGroup::len).collect()
        };
        assert_eq!(shapes(2), vec![2]);
        assert_eq!(shapes(3), vec![2, 1]);
        assert_eq!(shapes(4), vec![2, 1, 1]);
        assert_eq!(shapes(5), vec![2, 1, 2]);
        assert_eq!(shapes(6), vec![2, 1, 2, 1]);
        assert_eq!(shapes(9), vec![2, 1, 2, 1, 2, 1]);
        assert_eq!(shapes(10), vec![2, 1, 2, 1, 2, 1, 1]);
    }

    #[test]
    fn test_pairs_only_at_even_group_indices() {
        let items: Vec<u32> = (0..50).collect();
        for (g, group) in weave(&items).iter().enumerate() {
            if group.is_pair() {
                assert_eq!(g % 2, 0, "pair at odd group index {g}");
            }
        }
    }

    #[test]
    fn test_concatenation_preserves_sequence() {
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(flatten(&weave(&items)), items);
    }

    #[test]
    fn test_iterator_matches_collected() {
        let items = [10, 20, 30, 40];
        let lazy: Vec<_> = Weave::new(&items).map(WeaveGroup::cloned).collect();
        assert_eq!(lazy, weave(&items));
    }

    #[test]
    fn test_serializes_as_arrays() {
        let json = serde_json::to_string(&weave(&[1, 2, 3])).unwrap();
        assert_eq!(json, "[[1,2],[3]]");
    }
}
