//! # Core Marshaling Components
//!
//! Leaf transforms between ledger responses and raw bytes.
//!
//! ## Components
//! - **Object**: BCS payload extraction from object responses
//! - **Encoding**: ASCII and fixed-width big-endian byte encodings
//!
//! Neither component performs I/O and neither depends on the other.

pub mod encoding;
pub mod object;
