//! # Catalog Layout
//!
//! Turns weave groups into columns the renderer can place directly.
//!
//! ## Column Patterns
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   g = 0 (even, pair)   g = 1 (odd)         g = 2 (even, single tail)    │
//! │  ┌──────────────┐     ┌──────────────┐    ┌──────────────┐              │
//! │  │┌────────┐    │     │              │    │              │              │
//! │  ││ item 0 │    │     │ 150 margin   │    │ ┌──────────┐ │              │
//! │  │└────────┘    │     │ ┌──────────┐ │    │ │          │ │              │
//! │  │   40 gap     │     │ │          │ │    │ │  tall    │ │              │
//! │  │    ┌────────┐│     │ │  offset  │ │    │ │  single  │ │              │
//! │  │    │ item 1 ││     │ │  single  │ │    │ │          │ │              │
//! │  │    └────────┘│     │ └──────────┘ │    │ └──────────┘ │              │
//! │  └──────────────┘     └──────────────┘    └──────────────┘              │
//! │   ◄─ 0.7 × W ─►  55    ◄─ 0.7 × W ─►  55   ◄─ 0.7 × W ─►  ...           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Columns scroll horizontally. Column width is a fraction of the viewport
//! width so the next column peeks in from the trailing edge.

use serde::Serialize;
use ts_rs::TS;

use crate::geometry::{Rect, Viewport};
use crate::types::{Category, Item};
use crate::validation::{validate_dimension, validate_fraction, ValidationResult};
use crate::weave::{weave, WeaveGroup};

// =============================================================================
// Pattern Selection
// =============================================================================

/// How one column arranges its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPattern {
    /// Two cards: leading-aligned on top, trailing-aligned below.
    StaggeredPair,
    /// One tall card, vertically centred.
    TallSingle,
    /// One tall card pushed down by the stagger margin.
    OffsetSingle,
}

/// Picks the pattern for the group at `group_index` holding `group_len` items.
///
/// Odd groups always render their first item only; the weave never puts a
/// pair at an odd index.
pub fn pattern_for(group_index: usize, group_len: usize) -> ColumnPattern {
    match (group_index % 2 == 0, group_len) {
        (true, 2) => ColumnPattern::StaggeredPair,
        (true, _) => ColumnPattern::TallSingle,
        (false, _) => ColumnPattern::OffsetSingle,
    }
}

// =============================================================================
// Metrics
// =============================================================================

/// Catalog spacing constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogMetrics {
    /// Column width as a fraction of the viewport width.
    pub column_fraction: f32,
    pub column_spacing: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub padding_start: f32,
    pub padding_end: f32,
    /// Vertical gap between the two cards of a pair.
    pub pair_gap: f32,
    /// Pair card width as a fraction of the column width.
    pub pair_card_fraction: f32,
    /// Tall single height as a fraction of the column height.
    pub tall_height_fraction: f32,
    /// Stagger margin above an offset single.
    pub offset_margin: f32,
    /// Offset single height as a fraction of what remains below the margin.
    pub offset_height_fraction: f32,
}

impl Default for CatalogMetrics {
    fn default() -> Self {
        CatalogMetrics {
            column_fraction: 0.7,
            column_spacing: 55.0,
            padding_top: 40.0,
            padding_bottom: 56.0,
            padding_start: 16.0,
            padding_end: 16.0,
            pair_gap: 40.0,
            pair_card_fraction: 0.75,
            tall_height_fraction: 0.6,
            offset_margin: 150.0,
            offset_height_fraction: 0.85,
        }
    }
}

impl CatalogMetrics {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_fraction("catalog.column_fraction", self.column_fraction)?;
        validate_fraction("catalog.pair_card_fraction", self.pair_card_fraction)?;
        validate_fraction("catalog.tall_height_fraction", self.tall_height_fraction)?;
        validate_fraction("catalog.offset_height_fraction", self.offset_height_fraction)?;
        for (field, value) in [
            ("catalog.column_spacing", self.column_spacing),
            ("catalog.padding_top", self.padding_top),
            ("catalog.padding_bottom", self.padding_bottom),
            ("catalog.padding_start", self.padding_start),
            ("catalog.padding_end", self.padding_end),
            ("catalog.pair_gap", self.pair_gap),
            ("catalog.offset_margin", self.offset_margin),
        ] {
            validate_dimension(field, value)?;
        }
        Ok(())
    }
}

// =============================================================================
// Layout Output
// =============================================================================

/// Horizontal alignment of a card inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardAlignment {
    Leading,
    Trailing,
    Fill,
}

/// One card's frame, in scroll-content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CardPlacement {
    /// Index into the group (0 or 1).
    pub slot: usize,
    pub frame: Rect,
    pub alignment: CardAlignment,
}

/// One column of the horizontally scrolling catalog.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ColumnLayout {
    pub group_index: usize,
    pub pattern: ColumnPattern,
    pub frame: Rect,
    pub cards: Vec<CardPlacement>,
}

// =============================================================================
// Layout
// =============================================================================

/// Lays weave groups out as columns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogLayout {
    metrics: CatalogMetrics,
}

impl CatalogLayout {
    pub fn new(metrics: CatalogMetrics) -> Self {
        CatalogLayout { metrics }
    }

    pub fn metrics(&self) -> &CatalogMetrics {
        &self.metrics
    }

    pub fn column_width(&self, viewport: Viewport) -> f32 {
        viewport.width() * self.metrics.column_fraction
    }

    /// Total scrollable width for `column_count` columns, padding included.
    pub fn content_width(&self, column_count: usize, viewport: Viewport) -> f32 {
        let m = &self.metrics;
        if column_count == 0 {
            return m.padding_start + m.padding_end;
        }
        let columns = column_count as f32;
        m.padding_start
            + columns * self.column_width(viewport)
            + (columns - 1.0) * m.column_spacing
            + m.padding_end
    }

    /// Places every group. Empty input yields no columns.
    pub fn layout<T>(&self, groups: &[WeaveGroup<T>], viewport: Viewport) -> Vec<ColumnLayout> {
        let m = &self.metrics;
        let width = self.column_width(viewport);
        let height = (viewport.height() - m.padding_top - m.padding_bottom).max(0.0);

        groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                let x = m.padding_start + index as f32 * (width + m.column_spacing);
                let frame = Rect::new(x, m.padding_top, width, height);
                let pattern = pattern_for(index, group.len());
                ColumnLayout {
                    group_index: index,
                    pattern,
                    frame,
                    cards: self.place_cards(pattern, frame),
                }
            })
            .collect()
    }

    fn place_cards(&self, pattern: ColumnPattern, column: Rect) -> Vec<CardPlacement> {
        let m = &self.metrics;
        match pattern {
            ColumnPattern::StaggeredPair => {
                let card_width = column.width * m.pair_card_fraction;
                let card_height = ((column.height - m.pair_gap) / 2.0).max(0.0);
                vec![
                    CardPlacement {
                        slot: 0,
                        frame: Rect::new(column.x, column.y, card_width, card_height),
                        alignment: CardAlignment::Leading,
                    },
                    CardPlacement {
                        slot: 1,
                        frame: Rect::new(
                            column.right() - card_width,
                            column.y + card_height + m.pair_gap,
                            card_width,
                            card_height,
                        ),
                        alignment: CardAlignment::Trailing,
                    },
                ]
            }
            ColumnPattern::TallSingle => {
                let card_height = column.height * m.tall_height_fraction;
                let y = column.y + (column.height - card_height) / 2.0;
                vec![CardPlacement {
                    slot: 0,
                    frame: Rect::new(column.x, y, column.width, card_height),
                    alignment: CardAlignment::Fill,
                }]
            }
            ColumnPattern::OffsetSingle => {
                let margin = m.offset_margin.min(column.height);
                let card_height = (column.height - margin) * m.offset_height_fraction;
                let block = margin + card_height;
                let y = column.y + (column.height - block) / 2.0 + margin;
                vec![CardPlacement {
                    slot: 0,
                    frame: Rect::new(column.x, y, column.width, card_height),
                    alignment: CardAlignment::Fill,
                }]
            }
        }
    }
}

// =============================================================================
// Catalog Filtering
// =============================================================================

/// Items admitted by `category`, order preserved.
pub fn filter_by_category(items: &[Item], category: Category) -> Vec<Item> {
    items
        .iter()
        .filter(|item| category.admits(item.category))
        .cloned()
        .collect()
}

/// Filter then weave: what a catalog change turns into.
pub fn weave_catalog(items: Option<&[Item]>, category: Category) -> Vec<WeaveGroup<Item>> {
    match items {
        Some(items) => weave(&filter_by_category(items, category)),
        None => Vec::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
