//! # Dynamic Fields
//!
//! Child records attached to a parent object, reachable only through the
//! ledger's cursor-paged listing endpoint.
//!
//! ## Components
//! - **Types**: descriptors, pages, cursors and requests as they appear on the wire
//! - **Source**: the transport capability that serves one page at a time
//! - **Collector**: sequential, order-preserving walk over every page
//!
//! ## Usage
//! ```rust,no_run
//! # async fn run<S: ledger_marshal::fields::DynamicFieldSource>(rpc: S) -> Result<(), S::Error> {
//! use ledger_marshal::fields::collect_dynamic_fields;
//!
//! let fields = collect_dynamic_fields(&rpc, "0x5").await?;
//! for field in &fields {
//!     println!("{} -> {}", field.field_id, field.value_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod source;
pub mod types;

pub use collector::{collect_dynamic_fields, DynamicFieldCollector};
pub use source::DynamicFieldSource;
pub use types::{
    Cursor, DynamicFieldDescriptor, DynamicFieldName, DynamicFieldPage, DynamicFieldsRequest,
};
