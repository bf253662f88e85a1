use derive_getters::Getters;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("The project id is missing.")]
    MissingProjectId,
}

/// Where the document store lives. Published by the host page, it contains no secret:
/// the API key only identifies the project.
#[derive(Debug, Clone, Deserialize, Getters, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreConfig {
    project_id: String,
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default = "default_database")]
    database: String,
    #[serde(default = "default_base_url")]
    base_url: String,
}

impl FirestoreConfig {
    pub fn new(project_id: String, api_key: Option<String>) -> Result<Self, ConfigurationError> {
        Self {
            project_id,
            api_key,
            database: default_database(),
            base_url: default_base_url(),
        }
        .validate()
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn validate(self) -> Result<Self, ConfigurationError> {
        if self.project_id.trim().is_empty() {
            Err(ConfigurationError::MissingProjectId)
        } else {
            Ok(self)
        }
    }

    /// URL of the `runQuery` endpoint of the configured database.
    pub fn run_query_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents:runQuery",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database
        )
    }
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_owned()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}
