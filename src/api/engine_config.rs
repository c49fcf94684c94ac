use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::chart::ChartSpec;

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

pub const METADATA_TITLE: &str = "title";
pub const METADATA_ALT_TEXT: &str = "alt_text";
pub const METADATA_SOURCE: &str = "source";

/// Engine bootstrap configuration: one chart plus ordered display metadata.
///
/// Serializable so pages can ship chart setups as static JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub chart: ChartSpec,
    /// Insertion-ordered metadata such as `title`, `alt_text` and `source`.
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartEngineConfig,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(chart: ChartSpec) -> Self {
        Self {
            chart,
            metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_metadata(METADATA_TITLE, title)
    }

    #[must_use]
    pub fn with_alt_text(self, alt_text: impl Into<String>) -> Self {
        self.with_metadata(METADATA_ALT_TEXT, alt_text)
    }

    #[must_use]
    pub fn with_source(self, source: impl Into<String>) -> Self {
        self.with_metadata(METADATA_SOURCE, source)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(METADATA_TITLE).map(String::as_str)
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.metadata.get(METADATA_ALT_TEXT).map(String::as_str)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartEngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts a v1 contract envelope or a bare config payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
            });
        }
        let payload: ChartEngineConfigJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
            })?;
        if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
