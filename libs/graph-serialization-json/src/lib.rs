#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! JSON wire format for Graph beta models.
pub mod codec;
pub mod config;
pub mod node;
pub mod sanitize;
pub mod writer;

pub use codec::{CodecError, create_from_bytes, parse_document, serialize_to_bytes};
pub use config::JsonCodecConfig;
pub use node::JsonParseNode;
pub use sanitize::sanitize_json_bytes;
pub use writer::JsonSerializationWriter;
