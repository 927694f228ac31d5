//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — module root with re-exports
//! - `wire.rs` — raw serde structs matching Delivery API responses
//!
//! The Delivery API owns these shapes; the structs mirror the JSON as sent,
//! with absent fields left at defaults and unknown fields ignored.

pub mod content_type;
pub mod item;
