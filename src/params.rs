use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::PartialConfig;

/// Query parameters, hash and config overrides for one URL.
///
/// Deserializes from the same camelCase shape callers pass as JSON:
///
/// ```rust
/// use make_url::Params;
///
/// let params: Params = serde_json::from_str(
///     r#"{"params": {"id": 1}, "hash": "top", "config": {"strict": true}}"#,
/// ).unwrap();
/// assert_eq!(params.hash, "top");
/// assert_eq!(params.config.strict, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Placeholder and query values, in insertion order
    pub params: Map<String, Value>,
    /// Fragment identifier without the leading `#`
    pub hash: String,
    /// Overrides merged over the maker's default config
    pub config: PartialConfig,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a query or placeholder value
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    #[must_use]
    pub fn config(mut self, config: PartialConfig) -> Self {
        self.config = config;
        self
    }
}
