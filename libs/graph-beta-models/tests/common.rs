#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use graph_serialization::{Parsable, ParsableFactory};
use graph_serialization_json::{JsonCodecConfig, create_from_bytes, serialize_to_bytes};
use serde_json::Value;

pub fn decode<T: Parsable>(body: &Value, factory: ParsableFactory<T>) -> T {
    create_from_bytes(body.to_string().as_bytes(), factory, &JsonCodecConfig::default())
        .expect("payload decodes")
}

pub fn encode(value: &dyn Parsable) -> String {
    let bytes = serialize_to_bytes(value, &JsonCodecConfig::default()).expect("model encodes");
    String::from_utf8(bytes).expect("utf-8 output")
}

pub fn encode_value(value: &dyn Parsable) -> Value {
    serde_json::from_str(&encode(value)).expect("output is JSON")
}
