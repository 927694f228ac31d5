//! Wire types for content-type and element responses.

use crate::shared::{Codename, Pagination};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response for `GET types`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentTypesListingResponse {
    pub types: Vec<ContentType>,
    pub pagination: Pagination,
}

/// A content type: system attributes plus element definitions keyed by
/// element codename. Also the response shape of `GET types/{codename}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentType {
    pub system: TypeSystemAttributes,
    #[serde(default)]
    pub elements: HashMap<String, Element>,
}

/// System attributes common to every content type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeSystemAttributes {
    pub id: String,
    pub name: String,
    pub codename: Codename,
    pub last_modified: DateTime<Utc>,
}

/// A content-type element definition. Also the response shape of
/// `GET types/{type}/elements/{element}`.
///
/// `codename` is populated only when the element is fetched on its own;
/// inside a type's `elements` map the key carries the codename instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codename: Option<Codename>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<MultipleChoiceOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_group: Option<String>,
}

/// One option of a multiple-choice element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultipleChoiceOption {
    pub name: String,
    pub codename: Codename,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_deserializes_with_element_map() {
        let json = r#"{
            "system": {
                "id": "b2c14f2c-6467-460b-a70b-bca17972a33a",
                "name": "Article",
                "codename": "article",
                "last_modified": "2017-09-07T08:00:00Z"
            },
            "elements": {
                "title": { "type": "text", "name": "Title" },
                "personas": {
                    "type": "taxonomy",
                    "name": "Personas",
                    "taxonomy_group": "personas"
                }
            }
        }"#;
        let content_type: ContentType = serde_json::from_str(json).unwrap();
        assert_eq!(content_type.system.codename.as_str(), "article");
        assert_eq!(
            content_type.elements["personas"].taxonomy_group.as_deref(),
            Some("personas")
        );
        assert!(content_type.elements["title"].options.is_empty());
    }

    #[test]
    fn standalone_element_carries_codename_and_options() {
        let json = r#"{
            "type": "multiple_choice",
            "name": "Processing",
            "codename": "processing",
            "options": [
                { "name": "Dry (Natural)", "codename": "dry__natural_" },
                { "name": "Washed", "codename": "washed" }
            ]
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.codename.as_ref().unwrap().as_str(), "processing");
        assert_eq!(element.options.len(), 2);
        assert_eq!(element.options[1].codename.as_str(), "washed");
    }
}
