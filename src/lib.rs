//! # ledger-marshal
//!
//! Low-level data marshaling for clients that read on-chain objects from a
//! ledger's query API and feed them to a BCS deserializer.
//!
//! ## Modules
//! - [`crate::core::object`]: extract the BCS payload from an object response
//! - [`fields`]: page through every dynamic field of a parent object
//! - [`crate::core::encoding`]: ASCII and big-endian `u64` byte encodings
//! - [`config`]: page size and logging settings
//! - [`error`]: the crate's error type
//!
//! Transport, retries and BCS schema decoding live outside this crate.

pub mod config;
pub mod core;
pub mod error;
pub mod fields;
pub mod utils;

pub use crate::core::encoding::{
    encode_ascii, encode_ascii_strict, encode_u64_be, encode_u64_be_decimal, text_to_bytes,
};
pub use crate::core::object::{
    extract_payload, extract_payload_as, ObjectPayload, ObjectResponse, PayloadKind,
    RawObjectResponse,
};
pub use error::{MarshalError, Result};
pub use fields::{collect_dynamic_fields, DynamicFieldCollector, DynamicFieldSource};
