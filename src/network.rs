//! Endpoint URL templates for the Kentico Delivery client.

/// Substitution slot for the project identifier in endpoint templates.
pub const PROJECT_ID_SLOT: &str = "{project_id}";

/// Default production Delivery API endpoint template.
pub const DEFAULT_PRODUCTION_ENDPOINT: &str = "https://deliver.kenticocloud.com/{project_id}";

/// Default preview Delivery API endpoint template.
pub const DEFAULT_PREVIEW_ENDPOINT: &str = "https://preview-deliver.kenticocloud.com/{project_id}";
