//! # Cart State
//!
//! The three discrete presentation states of the cart panel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            ┌────────────┐                    ┌────────────┐             │
//! │            │  Expanded  │◄──────────────────►│ Collapsed  │ (default)   │
//! │            └─────┬──────┘                    └─────┬──────┘             │
//! │                  │                                 │                    │
//! │                  │          ┌────────────┐         │                    │
//! │                  └─────────►│   Hidden   │◄────────┘                    │
//! │                  ◄──────────┴────────────┴─────────►                    │
//! │                                                                         │
//! │   All six directed transitions are legal.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Cart panel presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    /// Full-height sheet listing every cart line.
    Expanded,
    /// Pill in the bottom-trailing corner showing the glance.
    #[default]
    Collapsed,
    /// Slid off the trailing edge while the backdrop menu is open.
    Hidden,
}

impl CartState {
    pub const ALL: [CartState; 3] = [CartState::Expanded, CartState::Collapsed, CartState::Hidden];

    /// Row/column index into per-state tables.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            CartState::Expanded => 0,
            CartState::Collapsed => 1,
            CartState::Hidden => 2,
        }
    }

    #[inline]
    pub fn is_expanded(self) -> bool {
        self == CartState::Expanded
    }
}

impl fmt::Display for CartState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartState::Expanded => write!(f, "expanded"),
            CartState::Collapsed => write!(f, "collapsed"),
            CartState::Hidden => write!(f, "hidden"),
        }
    }
}

/// Error for an unrecognized state name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cart state '{0}' (expected expanded, collapsed or hidden)")]
pub struct UnknownCartState(pub String);

impl FromStr for CartState {
    type Err = UnknownCartState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expanded" => Ok(CartState::Expanded),
            "collapsed" => Ok(CartState::Collapsed),
            "hidden" => Ok(CartState::Hidden),
            _ => Err(UnknownCartState(s.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
