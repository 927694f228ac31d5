//! Wire types for content-item responses.

use crate::shared::{Codename, Pagination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Response for `GET items` — a page of content items plus any linked
/// (modular) items referenced by them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItemsListingResponse {
    pub items: Vec<ContentItem>,
    #[serde(default)]
    pub modular_content: HashMap<String, ContentItem>,
    pub pagination: Pagination,
}

/// Response for `GET items/{codename}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItemResponse {
    pub item: ContentItem,
    #[serde(default)]
    pub modular_content: HashMap<String, ContentItem>,
}

/// A single content item: system attributes plus element values keyed by
/// element codename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub system: ItemSystemAttributes,
    #[serde(default)]
    pub elements: HashMap<String, ElementValue>,
}

/// System attributes common to every content item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemSystemAttributes {
    pub id: String,
    pub name: String,
    pub codename: Codename,
    pub language: String,
    #[serde(rename = "type")]
    pub item_type: Codename,
    #[serde(default)]
    pub sitemap_locations: Vec<String>,
    pub last_modified: DateTime<Utc>,
}

/// An element value inside a content item.
///
/// The `value` field is polymorphic over the element type (text, number,
/// asset array, modular-content reference list, ...), so it stays a raw
/// JSON value; interpreting it is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementValue {
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_group: Option<String>,
}
