//! Client configuration — `DeliveryOptions` and its builder.
//!
//! Options are immutable once built and validated exactly once, when the
//! `DeliveryClient` is constructed.

use crate::error::DeliveryError;
use crate::network::{DEFAULT_PREVIEW_ENDPOINT, DEFAULT_PRODUCTION_ENDPOINT, PROJECT_ID_SLOT};

use uuid::Uuid;

/// Settings of a Kentico Cloud project.
///
/// The endpoint fields are URL templates holding one `{project_id}` slot;
/// the resolved base URL is a pure function of these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOptions {
    pub(crate) project_id: String,
    pub(crate) use_preview_api: bool,
    pub(crate) preview_api_key: Option<String>,
    pub(crate) preview_endpoint: String,
    pub(crate) production_endpoint: String,
}

impl DeliveryOptions {
    /// Options for published content of the given project.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self::builder().project_id(project_id).build()
    }

    /// Options for unpublished (preview) content of the given project.
    pub fn preview(project_id: impl Into<String>, preview_api_key: impl Into<String>) -> Self {
        Self::builder()
            .project_id(project_id)
            .preview_api_key(preview_api_key)
            .build()
    }

    pub fn builder() -> DeliveryOptionsBuilder {
        DeliveryOptionsBuilder::default()
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn use_preview_api(&self) -> bool {
        self.use_preview_api
    }

    /// Checked once, at client construction.
    pub(crate) fn validate(&self) -> Result<(), DeliveryError> {
        if self.project_id.is_empty() {
            return Err(DeliveryError::Configuration(
                "Kentico Cloud project identifier is not specified.".to_string(),
            ));
        }
        // Canonical hyphenated form only; try_parse alone would also accept
        // simple, braced, and URN forms.
        if self.project_id.len() != 36 || Uuid::try_parse(&self.project_id).is_err() {
            return Err(DeliveryError::Configuration(format!(
                "Provided string is not a valid project identifier ({}). \
                 Have you accidentally passed the Preview API key instead of the project identifier?",
                self.project_id
            )));
        }
        if self.use_preview_api
            && self
                .preview_api_key
                .as_deref()
                .map_or(true, |key| key.is_empty())
        {
            return Err(DeliveryError::Configuration(
                "The Preview API key is not specified.".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the base URL: pick the template for the configured access mode
    /// and substitute the project identifier into its slot. No I/O.
    pub(crate) fn base_url(&self) -> String {
        let template = if self.use_preview_api {
            &self.preview_endpoint
        } else {
            &self.production_endpoint
        };
        template.replace(PROJECT_ID_SLOT, &self.project_id)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DeliveryOptionsBuilder {
    project_id: String,
    preview_api_key: Option<String>,
    preview_endpoint: String,
    production_endpoint: String,
}

impl Default for DeliveryOptionsBuilder {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            preview_api_key: None,
            preview_endpoint: DEFAULT_PREVIEW_ENDPOINT.to_string(),
            production_endpoint: DEFAULT_PRODUCTION_ENDPOINT.to_string(),
        }
    }
}

impl DeliveryOptionsBuilder {
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Supplying a key switches the options into preview mode.
    pub fn preview_api_key(mut self, key: impl Into<String>) -> Self {
        self.preview_api_key = Some(key.into());
        self
    }

    pub fn preview_endpoint(mut self, template: impl Into<String>) -> Self {
        self.preview_endpoint = template.into();
        self
    }

    pub fn production_endpoint(mut self, template: impl Into<String>) -> Self {
        self.production_endpoint = template.into();
        self
    }

    pub fn build(self) -> DeliveryOptions {
        DeliveryOptions {
            project_id: self.project_id,
            use_preview_api: self.preview_api_key.is_some(),
            preview_api_key: self.preview_api_key,
            preview_endpoint: self.preview_endpoint,
            production_endpoint: self.production_endpoint,
        }
    }
}
