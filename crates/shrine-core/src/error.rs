//! # Error Types
//!
//! Domain-specific error types for shrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shrine-core errors (this file)                                        │
//! │  ├── CoreError        - Cart / catalog rule violations                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront host errors (apps/storefront)                              │
//! │  └── HostError        - Config, I/O, serialization                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → HostError → log / exit code       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing an item that is not in the cart is deliberately NOT an error:
//! see [`crate::cart::Removal`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and catalog rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart has exceeded maximum allowed items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the host boundary before values reach the pure functions.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    MustBeFinite { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
