//! Content types and their elements.

pub mod wire;

pub use wire::{ContentType, ContentTypesListingResponse, Element, MultipleChoiceOption};
