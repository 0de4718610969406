//! Widget configuration: element ids, navigation target, backend client.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;
use wikisearch_client::{ClientConfig, WIKIPEDIA_ARTICLE_PREFIX};

use crate::error::WidgetError;

/// Top-level configuration for the search widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Id of the text input holding the query.
    pub input_id: String,
    /// Id of the button that triggers a search.
    pub button_id: String,
    /// Id of the output container, replaced on every state change.
    pub results_id: String,
    /// Prefix the article id is appended to when a result is opened.
    pub article_url_prefix: String,
    /// Focus the input once after mounting.
    pub focus_on_load: bool,
    /// Backend client settings.
    pub client: ClientConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            input_id: "searchInput".into(),
            button_id: "searchBtn".into(),
            results_id: "results".into(),
            article_url_prefix: WIKIPEDIA_ARTICLE_PREFIX.into(),
            focus_on_load: true,
            client: ClientConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, WidgetError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WidgetError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the text is not valid TOML for this type.
    pub fn from_toml_str(content: &str) -> Result<Self, WidgetError> {
        toml::from_str(content).map_err(|e| WidgetError::Config(e.to_string()))
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - element ids are non-empty and pairwise distinct
    /// - `article_url_prefix` is an absolute `http`/`https` URL
    /// - the nested client config is valid
    pub fn validate(&self) -> Result<(), WidgetError> {
        let ids = [
            ("input_id", &self.input_id),
            ("button_id", &self.button_id),
            ("results_id", &self.results_id),
        ];
        for (name, id) in ids {
            if id.trim().is_empty() {
                return Err(WidgetError::Config(format!("{name} must not be empty")));
            }
        }
        if self.input_id == self.button_id
            || self.input_id == self.results_id
            || self.button_id == self.results_id
        {
            return Err(WidgetError::Config("element ids must be distinct".into()));
        }

        let prefix = Url::parse(&self.article_url_prefix).map_err(|e| {
            WidgetError::Config(format!("invalid article_url_prefix: {e}"))
        })?;
        if !matches!(prefix.scheme(), "http" | "https") {
            return Err(WidgetError::Config(
                "article_url_prefix must be an http(s) URL".into(),
            ));
        }

        self.client.validate()?;
        Ok(())
    }
}
