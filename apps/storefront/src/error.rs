//! # Host Error Types
//!
//! Errors raised by the storefront host.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Host Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Host input    │  │     Output              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Validation     │  │  Serialization          │ │
//! │  │  ConfigLoad...  │  │  Core           │  │  Io                     │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing an item that is not in the cart is not an error: the host
//! reports it as a notification and carries on.

use shrine_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Storefront host error.
#[derive(Debug, Error)]
pub enum HostError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config parsed but holds unusable values.
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// A host-supplied value failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Output Errors
    // =========================================================================
    /// A notification could not be encoded.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Writing notifications or building the runtime failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<toml::de::Error> for HostError {
    fn from(err: toml::de::Error) -> Self {
        HostError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        HostError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: HostError = CoreError::CartTooLarge { max: 100 }.into();
        assert_eq!(err.to_string(), CoreError::CartTooLarge { max: 100 }.to_string());
    }

    #[test]
    fn test_toml_errors_become_load_failures() {
        let err: HostError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, HostError::ConfigLoadFailed(_)));
    }
}
