//! Byte-level entry points: decode a payload into a model, encode a model to bytes.

use graph_serialization::{
    Parsable, ParsableFactory, ParseError, ParseNode, SerializationError, SerializationWriter,
};
use serde_json::Value;

use crate::config::JsonCodecConfig;
use crate::node::JsonParseNode;
use crate::sanitize::sanitize_json_bytes;
use crate::writer::JsonSerializationWriter;

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("payload of {size} bytes exceeds the limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("payload is null")]
    NullPayload,

    #[error("failed to decode payload: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to encode payload: {0}")]
    Serialization(#[from] SerializationError),
}

/// Parse `bytes` as JSON, retrying once with control characters escaped when
/// the first attempt hits a syntax error and the config allows it.
///
/// # Errors
/// Returns `PayloadTooLarge` or `InvalidJson`.
pub fn parse_document(bytes: &[u8], config: &JsonCodecConfig) -> Result<Value, CodecError> {
    if bytes.len() > config.max_payload_bytes {
        return Err(CodecError::PayloadTooLarge {
            size: bytes.len(),
            limit: config.max_payload_bytes,
        });
    }
    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(err) if config.sanitize_control_characters && err.is_syntax() => {
            let sanitized = sanitize_json_bytes(bytes);
            if sanitized.as_ref() == bytes {
                return Err(CodecError::InvalidJson(err));
            }
            tracing::debug!(error = %err, "retrying payload with control characters escaped");
            serde_json::from_slice(&sanitized).map_err(CodecError::InvalidJson)
        }
        Err(err) => Err(CodecError::InvalidJson(err)),
    }
}

/// Decode a payload into the type chosen by `factory`.
///
/// # Errors
/// Returns `NullPayload` for a `null` document, and parse or decode errors otherwise.
pub fn create_from_bytes<T: Parsable>(
    bytes: &[u8],
    factory: ParsableFactory<T>,
    config: &JsonCodecConfig,
) -> Result<T, CodecError> {
    let document = parse_document(bytes, config)?;
    let node = JsonParseNode::new(&document);
    let root: &dyn ParseNode = &node;
    root.object_value(factory)?.ok_or(CodecError::NullPayload)
}

/// Encode `value` as the document root.
///
/// # Errors
/// Returns the first writer error.
pub fn serialize_to_bytes(
    value: &dyn Parsable,
    config: &JsonCodecConfig,
) -> Result<Vec<u8>, CodecError> {
    let mut writer = JsonSerializationWriter::from_config(config);
    writer.write_object_value("", Some(value))?;
    Ok(writer.serialized_content()?)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_size_limit() {
        let config = JsonCodecConfig::default().with_max_payload_bytes(4);
        assert!(matches!(
            parse_document(b"{\"a\":1}", &config),
            Err(CodecError::PayloadTooLarge { size: 7, limit: 4 })
        ));
    }

    #[test]
    #[traced_test]
    fn test_control_characters_retried() {
        let config = JsonCodecConfig::default();
        let value = parse_document(b"{\"body\":\"a\nb\"}", &config).unwrap();
        assert_eq!(value["body"], "a\nb");
        assert!(logs_contain("retrying payload"));
    }

    #[test]
    fn test_control_characters_rejected_when_disabled() {
        let config = JsonCodecConfig::default().with_sanitize_control_characters(false);
        assert!(matches!(
            parse_document(b"{\"body\":\"a\nb\"}", &config),
            Err(CodecError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_unrepairable_payload_keeps_original_error() {
        let config = JsonCodecConfig::default();
        let err = parse_document(b"{\"a\":", &config).unwrap_err();
        assert!(matches!(err, CodecError::InvalidJson(ref e) if e.is_eof()));
    }
}
