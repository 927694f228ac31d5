//! Content items: listing and single-item responses.

pub mod wire;

pub use wire::{ContentItem, ContentItemResponse, ContentItemsListingResponse, ElementValue};
