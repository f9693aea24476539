//! # Validation Module
//!
//! Input validation at the host boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host (apps/storefront)                                       │
//! │  ├── Config values, catalog payloads, resize events                    │
//! │  └── THIS MODULE: returns ValidationError, never panics                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pure functions (weave, geometry)                             │
//! │  └── Total over validated input; contract violations assert            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Category, Item};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest title a catalog card can lay out.
pub const MAX_TITLE_LEN: usize = 120;

/// Validates an item title.
///
/// ```rust
/// use shrine_core::validation::validate_title;
///
/// assert!(validate_title("Vagabond sack").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a layout dimension: finite and not negative.
///
/// ```rust
/// use shrine_core::validation::validate_dimension;
///
/// assert!(validate_dimension("viewport.width", 411.0).is_ok());
/// assert!(validate_dimension("viewport.width", -1.0).is_err());
/// assert!(validate_dimension("viewport.width", f32::NAN).is_err());
/// ```
pub fn validate_dimension(field: &str, value: f32) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a fraction in `(0, 1]`.
pub fn validate_fraction(field: &str, value: f32) -> ValidationResult<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

/// Validates a catalog item before it enters the catalog or the cart.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_title(&item.title)?;

    if item.price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if item.category == Category::All {
        return Err(ValidationError::NotAllowed {
            field: "category".to_string(),
            allowed: Category::MENU[1..].iter().map(ToString::to_string).collect(),
        });
    }

    if item.image.as_str().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{ImageRef, Vendor};

    fn item(title: &str, cents: i64, category: Category) -> Item {
        Item::new(
            title,
            Money::from_cents(cents),
            Vendor::Alphi,
            category,
            ImageRef::new("photos/1-0.jpg"),
        )
    }

    #[test]
    fn test_title_length() {
        assert!(validate_title(&"a".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(matches!(
            validate_title(&"a".repeat(MAX_TITLE_LEN + 1)),
            Err(ValidationError::TooLong { max: MAX_TITLE_LEN, .. })
        ));
    }

    #[test]
    fn test_dimension_zero_is_allowed() {
        assert!(validate_dimension("viewport.height", 0.0).is_ok());
        assert!(validate_dimension("viewport.height", f32::INFINITY).is_err());
    }

    #[test]
    fn test_fraction_bounds() {
        assert!(validate_fraction("column_fraction", 0.7).is_ok());
        assert!(validate_fraction("column_fraction", 1.0).is_ok());
        assert!(validate_fraction("column_fraction", 0.0).is_err());
        assert!(validate_fraction("column_fraction", 1.5).is_err());
    }

    #[test]
    fn test_validate_item() {
        assert!(validate_item(&item("Stella sunglasses", 5800, Category::Accessories)).is_ok());
        assert!(validate_item(&item("", 5800, Category::Accessories)).is_err());
        assert!(validate_item(&item("Refund", -1, Category::Home)).is_err());
        assert!(matches!(
            validate_item(&item("Whitney belt", 3500, Category::All)),
            Err(ValidationError::NotAllowed { .. })
        ));
    }
}
