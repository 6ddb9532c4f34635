//! # Utility Modules
//!
//! Supporting utilities shared by the marshaling components.
//!
//! ## Components
//! - **Base64**: serde helpers for base64-encoded byte fields on the wire
//! - **Logging**: structured logging configuration

pub mod base64;
pub mod logging;
