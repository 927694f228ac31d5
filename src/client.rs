//! High-level client — `DeliveryClient`.
//!
//! Validates options at construction, owns the HTTP layer, and exposes the
//! five Delivery API operations. No other state; safe to reuse for the
//! lifetime of the process.

use crate::domain::content_type::{ContentType, ContentTypesListingResponse, Element};
use crate::domain::item::{ContentItemResponse, ContentItemsListingResponse};
use crate::error::DeliveryError;
use crate::http::DeliveryHttp;
use crate::options::DeliveryOptions;

const ITEMS: &str = "items";
const TYPES: &str = "types";
const ELEMENTS: &str = "elements";

/// Executes requests against the Kentico Cloud Delivery API.
///
/// Every operation comes in two forms: a plain one and a `_with` one taking
/// an ordered slice of query-parameter pairs. The plain form is equivalent
/// to passing an empty slice.
#[derive(Debug)]
pub struct DeliveryClient {
    http: DeliveryHttp,
    options: DeliveryOptions,
}

impl DeliveryClient {
    /// Create a client for the project described by `options`.
    ///
    /// Validates the options and builds the reusable HTTP transport; performs
    /// no network I/O. Fails with [`DeliveryError::Configuration`] on an
    /// empty or non-UUID project identifier, or on preview mode without a key.
    pub fn new(options: DeliveryOptions) -> Result<Self, DeliveryError> {
        options.validate()?;
        let preview_api_key = if options.use_preview_api {
            options.preview_api_key.clone()
        } else {
            None
        };
        let http = DeliveryHttp::new(options.base_url(), preview_api_key)?;
        Ok(Self { http, options })
    }

    /// The options this client was constructed with.
    pub fn options(&self) -> &DeliveryOptions {
        &self.options
    }

    // ── Items ────────────────────────────────────────────────────────────

    pub async fn items(&self) -> Result<ContentItemsListingResponse, DeliveryError> {
        self.items_with(&[]).await
    }

    pub async fn items_with(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ContentItemsListingResponse, DeliveryError> {
        self.http.get(ITEMS, params).await
    }

    pub async fn item(&self, codename: &str) -> Result<ContentItemResponse, DeliveryError> {
        self.item_with(codename, &[]).await
    }

    pub async fn item_with(
        &self,
        codename: &str,
        params: &[(&str, &str)],
    ) -> Result<ContentItemResponse, DeliveryError> {
        self.http
            .get(&format!("{}/{}", ITEMS, codename), params)
            .await
    }

    // ── Types ────────────────────────────────────────────────────────────

    pub async fn types(&self) -> Result<ContentTypesListingResponse, DeliveryError> {
        self.types_with(&[]).await
    }

    pub async fn types_with(
        &self,
        params: &[(&str, &str)],
    ) -> Result<ContentTypesListingResponse, DeliveryError> {
        self.http.get(TYPES, params).await
    }

    pub async fn content_type(&self, codename: &str) -> Result<ContentType, DeliveryError> {
        self.content_type_with(codename, &[]).await
    }

    pub async fn content_type_with(
        &self,
        codename: &str,
        params: &[(&str, &str)],
    ) -> Result<ContentType, DeliveryError> {
        self.http
            .get(&format!("{}/{}", TYPES, codename), params)
            .await
    }

    pub async fn content_type_element(
        &self,
        type_codename: &str,
        element_codename: &str,
    ) -> Result<Element, DeliveryError> {
        self.content_type_element_with(type_codename, element_codename, &[])
            .await
    }

    pub async fn content_type_element_with(
        &self,
        type_codename: &str,
        element_codename: &str,
        params: &[(&str, &str)],
    ) -> Result<Element, DeliveryError> {
        self.http
            .get(
                &format!("{}/{}/{}/{}", TYPES, type_codename, ELEMENTS, element_codename),
                params,
            )
            .await
    }
}
