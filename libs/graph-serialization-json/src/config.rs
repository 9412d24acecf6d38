//! Codec settings shared by the JSON reader and writer.

use serde::{Deserialize, Serialize};

/// Default upper bound for a single payload: 16 MiB.
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonCodecConfig {
    /// Indent encoded output.
    pub pretty: bool,
    /// Escape raw control characters inside strings and retry once when a
    /// payload fails to parse.
    pub sanitize_control_characters: bool,
    /// Payloads larger than this are rejected before parsing.
    pub max_payload_bytes: usize,
}

impl Default for JsonCodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            sanitize_control_characters: true,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl JsonCodecConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_sanitize_control_characters(mut self, enabled: bool) -> Self {
        self.sanitize_control_characters = enabled;
        self
    }

    #[must_use]
    pub fn with_max_payload_bytes(mut self, max: usize) -> Self {
        self.max_payload_bytes = max;
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: JsonCodecConfig = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
        assert!(config.pretty);
        assert!(config.sanitize_control_characters);
        assert_eq!(config.max_payload_bytes, DEFAULT_MAX_PAYLOAD_BYTES);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<JsonCodecConfig, _> = serde_json::from_str(r#"{"indent": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builders() {
        let config = JsonCodecConfig::new()
            .with_pretty(true)
            .with_sanitize_control_characters(false)
            .with_max_payload_bytes(10);
        assert!(config.pretty);
        assert!(!config.sanitize_control_characters);
        assert_eq!(config.max_payload_bytes, 10);
    }
}
