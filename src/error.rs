//! # Error Types
//!
//! Error handling for object marshaling.
//!
//! This module defines the failures this crate raises itself. Transport failures
//! from a [`DynamicFieldSource`](crate::fields::DynamicFieldSource) are never
//! converted into these variants; they surface as the source's own error type.
//!
//! ## Error Categories
//! - **Object Errors**: a response is missing the payload the caller asked for
//! - **Encoding Errors**: a value does not fit the target fixed width
//! - **Configuration Errors**: malformed or invalid configuration
//! - **Serialization Errors**: wire JSON that could not be decoded
//!
//! ## Example Usage
//! ```rust
//! use ledger_marshal::core::encoding::encode_u64_be;
//! use ledger_marshal::error::MarshalError;
//! use tracing::{error, info};
//!
//! match encode_u64_be(u128::MAX) {
//!     Ok(bytes) => info!(?bytes, "Encoded value"),
//!     Err(MarshalError::EncodingRange { value, bits }) => {
//!         error!(%value, bits, "Value does not fit")
//!     }
//!     Err(e) => error!(error = %e, "Unexpected failure"),
//! }
//! ```

use thiserror::Error;

/// Static error messages shared across modules.
pub mod constants {
    /// Prefix of every missing-payload message
    pub const ERR_OBJECT_BCS_MISSING: &str = "Object BCS missing";
    /// Response carried the other payload variant than the one requested
    pub const ERR_PAYLOAD_KIND_MISMATCH: &str = "Object payload kind mismatch";
    /// Decimal text that is not a plain run of ASCII digits
    pub const ERR_NOT_DECIMAL: &str = "not a decimal integer";
}

// MarshalError is the error type for every fallible operation owned by this crate
#[derive(Error, Debug)]
pub enum MarshalError {
    #[error("Invalid object: {0}")]
    InvalidObject(String),

    #[error("Encoding range error: {value} does not fit in {bits} bits")]
    EncodingRange { value: String, bits: u32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MarshalError {
    /// Build the missing-payload error for an object of the given type.
    ///
    /// The type is rendered as pretty JSON so an empty or odd type string is
    /// still visible in the message.
    pub fn missing_payload(object_type: &str) -> Self {
        MarshalError::InvalidObject(format!(
            "{}: {}",
            constants::ERR_OBJECT_BCS_MISSING,
            render_type(object_type)
        ))
    }

    /// Build a range error for a value that does not fit in `bits` bits
    pub fn out_of_range(value: impl ToString, bits: u32) -> Self {
        MarshalError::EncodingRange {
            value: value.to_string(),
            bits,
        }
    }

    /// True when this is an `InvalidObject` error
    pub fn is_invalid_object(&self) -> bool {
        matches!(self, MarshalError::InvalidObject(_))
    }
}

/// Render an object type for diagnostics as pretty JSON
pub(crate) fn render_type(object_type: &str) -> String {
    serde_json::to_string_pretty(object_type).unwrap_or_else(|_| format!("{object_type:?}"))
}

/// Type alias for Results using MarshalError
pub type Result<T> = std::result::Result<T, MarshalError>;
