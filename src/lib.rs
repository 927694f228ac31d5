//! # Kentico Delivery SDK
//!
//! A typed Rust client for the Kentico Cloud Delivery API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Wire types and shared newtypes mirroring the Delivery API
//! 2. **Configuration** — `DeliveryOptions`, validated once at construction
//! 3. **HTTP** — `DeliveryHttp`, authenticated GET execution and status triage
//! 4. **High-Level Client** — `DeliveryClient`, one method per API operation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kentico_delivery::prelude::*;
//!
//! let client = DeliveryClient::new(DeliveryOptions::new(
//!     "975bf280-fd91-488c-994c-2f04416e5ee3",
//! ))?;
//!
//! let articles = client.items_with(&[("system.type", "article")]).await?;
//! let item = client.item("on_roasts").await?;
//! ```
//!
//! The client performs no retries, caching, or pagination on its own: every
//! call is one request, and every failure surfaces directly to the caller as
//! a [`DeliveryError`].

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): wire types per API resource.
pub mod domain;

/// Unified client error types.
pub mod error;

/// Endpoint URL templates.
pub mod network;

// ── Layer 2: Configuration ───────────────────────────────────────────────────

/// Client configuration and validation.
pub mod options;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Low-level HTTP request execution.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DeliveryClient` — the primary entry point.
pub mod client;

pub use crate::error::DeliveryError;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Codename, Pagination};

    // Domain types — items
    pub use crate::domain::item::{
        ContentItem, ContentItemResponse, ContentItemsListingResponse, ElementValue,
    };

    // Domain types — content types
    pub use crate::domain::content_type::{
        ContentType, ContentTypesListingResponse, Element, MultipleChoiceOption,
    };

    // Errors
    pub use crate::error::{DeliveryError, KenticoError};

    // Network
    pub use crate::network::{DEFAULT_PREVIEW_ENDPOINT, DEFAULT_PRODUCTION_ENDPOINT};

    // Client + configuration
    pub use crate::client::DeliveryClient;
    pub use crate::options::{DeliveryOptions, DeliveryOptionsBuilder};
}
