//! The editor's JSON boundary: serde types for the graph the flow-editing
//! surface serializes, and their conversion into the canonical snapshot.
//!
//! Everything open-world about the wire format (free-text type labels,
//! execution state strings, arbitrary schema fragments) is narrowed to the
//! engine's closed model here, so nothing past this boundary deals with
//! untyped data.

pub mod conversion;
pub mod types;

pub use conversion::*;
pub use types::*;
