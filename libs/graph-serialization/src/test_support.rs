//! Minimal in-memory parse node and recording writer for unit tests.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use uuid::Uuid;

use crate::binary::ByteArray;
use crate::duration::IsoDuration;
use crate::error::{ParseError, SerializationError};
use crate::parsable::{AdditionalData, Parsable};
use crate::parse_node::ParseNode;
use crate::writer::{PrimitiveValue, SerializationWriter};

pub struct TestNode(pub Value);

impl TestNode {
    pub fn string(text: &str) -> Self {
        TestNode(Value::String(text.to_owned()))
    }

    fn kind(&self) -> &'static str {
        match &self.0 {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedKind {
            expected,
            found: self.kind(),
        }
    }

    fn text(&self) -> Result<Option<&str>, ParseError> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            _ => Err(self.unexpected("string")),
        }
    }

    fn parsed<T, F>(&self, kind: &'static str, parse: F) -> Result<Option<T>, ParseError>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        match self.text()? {
            None => Ok(None),
            Some(text) => parse(text).map(Some).ok_or_else(|| ParseError::InvalidValue {
                kind,
                value: text.to_owned(),
            }),
        }
    }
}

impl ParseNode for TestNode {
    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, ParseError> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(map
                .get(name)
                .map(|v| Box::new(TestNode(v.clone())) as Box<dyn ParseNode>)),
            _ => Err(self.unexpected("object")),
        }
    }

    fn is_null(&self) -> bool {
        self.0.is_null()
    }

    fn string_value(&self) -> Result<Option<String>, ParseError> {
        Ok(self.text()?.map(str::to_owned))
    }

    fn bool_value(&self) -> Result<Option<bool>, ParseError> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.unexpected("boolean")),
        }
    }

    fn int32_value(&self) -> Result<Option<i32>, ParseError> {
        Ok(self
            .int64_value()?
            .and_then(|v| i32::try_from(v).ok()))
    }

    fn int64_value(&self) -> Result<Option<i64>, ParseError> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_i64()),
            _ => Err(self.unexpected("integer")),
        }
    }

    fn float64_value(&self) -> Result<Option<f64>, ParseError> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(self.unexpected("number")),
        }
    }

    fn time_value(&self) -> Result<Option<DateTime<FixedOffset>>, ParseError> {
        self.parsed("timestamp", |t| DateTime::parse_from_rfc3339(t).ok())
    }

    fn date_only_value(&self) -> Result<Option<NaiveDate>, ParseError> {
        self.parsed("date", |t| t.parse().ok())
    }

    fn time_only_value(&self) -> Result<Option<NaiveTime>, ParseError> {
        self.parsed("time", |t| t.parse().ok())
    }

    fn iso_duration_value(&self) -> Result<Option<IsoDuration>, ParseError> {
        self.parsed("duration", |t| t.parse().ok())
    }

    fn uuid_value(&self) -> Result<Option<Uuid>, ParseError> {
        self.parsed("uuid", |t| Uuid::parse_str(t).ok())
    }

    fn byte_array_value(&self) -> Result<Option<ByteArray>, ParseError> {
        self.parsed("base64", |t| ByteArray::from_base64(t).ok())
    }

    fn object_fields(&self) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, ParseError> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(
                map.iter()
                    .map(|(k, v)| (k.as_str(), Box::new(TestNode(v.clone())) as Box<dyn ParseNode>))
                    .collect(),
            )),
            _ => Err(self.unexpected("object")),
        }
    }

    fn collection_elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, ParseError> {
        match &self.0 {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|v| Box::new(TestNode(v.clone())) as Box<dyn ParseNode>)
                    .collect(),
            )),
            _ => Err(self.unexpected("array")),
        }
    }

    fn untyped_value(&self) -> Result<Value, ParseError> {
        Ok(self.0.clone())
    }
}

/// Records every write as `key=value` text; fails on a configured key.
#[derive(Default)]
pub struct RecordingWriter {
    pub writes: Vec<String>,
    pub fail_on: Option<&'static str>,
}

impl RecordingWriter {
    fn record(&mut self, key: &str, value: Option<String>) -> Result<(), SerializationError> {
        if self.fail_on == Some(key) {
            return Err(SerializationError::InvalidValue {
                key: key.to_owned(),
                reason: "rejected by test writer".to_owned(),
            });
        }
        if let Some(value) = value {
            self.writes.push(format!("{key}={value}"));
        }
        Ok(())
    }
}

impl SerializationWriter for RecordingWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError> {
        self.record(key, value.map(str::to_owned))
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| v.to_string()))
    }

    fn write_int32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| v.to_string()))
    }

    fn write_int64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| v.to_string()))
    }

    fn write_float64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| v.to_string()))
    }

    fn write_time_value(
        &mut self,
        key: &str,
        value: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError> {
        self.record(key, value.map(DateTime::to_rfc3339))
    }

    fn write_date_only_value(
        &mut self,
        key: &str,
        value: Option<NaiveDate>,
    ) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| v.to_string()))
    }

    fn write_time_only_value(
        &mut self,
        key: &str,
        value: Option<NaiveTime>,
    ) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| v.to_string()))
    }

    fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<&IsoDuration>,
    ) -> Result<(), SerializationError> {
        self.record(key, value.map(ToString::to_string))
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| v.to_string()))
    }

    fn write_byte_array_value(
        &mut self,
        key: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError> {
        self.record(key, value.map(|v| ByteArray::from(v).to_base64()))
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError> {
        self.record(key, Some("null".to_owned()))
    }

    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError> {
        let Some(value) = value else {
            return self.record(key, None);
        };
        self.record(key, Some("{".to_owned()))?;
        value.serialize(self)?;
        self.record(key, Some("}".to_owned()))
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return self.record(key, None);
        };
        self.record(key, Some(format!("[{}]", values.len())))?;
        for value in values {
            value.serialize(self)?;
        }
        Ok(())
    }

    fn write_collection_of_primitive_values(
        &mut self,
        key: &str,
        values: Option<&[PrimitiveValue<'_>]>,
    ) -> Result<(), SerializationError> {
        self.record(key, values.map(|v| format!("{v:?}")))
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError> {
        for (key, value) in data {
            self.record(key, Some(value.to_string()))?;
        }
        Ok(())
    }
}
