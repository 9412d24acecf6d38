//! [`SerializationWriter`] that builds a `serde_json::Value` tree.
//!
//! Nested objects and collections are written into frames on a stack; a
//! finished frame becomes a member of its parent. `None` values are never
//! written, so absent properties do not appear on the wire.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use graph_serialization::{
    AdditionalData, IsoDuration, Parsable, PrimitiveValue, SerializationError,
    SerializationWriter,
};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use crate::config::JsonCodecConfig;

enum Frame {
    Object(Map<String, Value>),
    Array(Vec<Value>),
}

#[derive(Default)]
pub struct JsonSerializationWriter {
    stack: Vec<Frame>,
    root: Option<Value>,
    pretty: bool,
}

impl JsonSerializationWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &JsonCodecConfig) -> Self {
        Self {
            pretty: config.pretty,
            ..Self::default()
        }
    }

    /// Encoded document; empty when nothing has been written.
    ///
    /// # Errors
    /// Returns `UnbalancedNesting` if a nested object or collection is still open,
    /// or an encoding error from `serde_json`.
    pub fn serialized_content(&self) -> Result<Vec<u8>, SerializationError> {
        if !self.stack.is_empty() {
            return Err(SerializationError::UnbalancedNesting);
        }
        let Some(root) = &self.root else {
            return Ok(Vec::new());
        };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(root)?
        } else {
            serde_json::to_vec(root)?
        };
        Ok(bytes)
    }

    /// The written document as a value tree.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.root
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        match self.stack.last_mut() {
            Some(Frame::Object(members)) => {
                if key.is_empty() {
                    return Err(SerializationError::MissingKey);
                }
                members.insert(key.to_owned(), value);
                Ok(())
            }
            Some(Frame::Array(items)) => {
                if !key.is_empty() {
                    return Err(SerializationError::InvalidValue {
                        key: key.to_owned(),
                        reason: "collection elements are written without a key".to_owned(),
                    });
                }
                items.push(value);
                Ok(())
            }
            None => self.put_top_level(key, value),
        }
    }

    fn put_top_level(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        if key.is_empty() {
            if self.root.is_some() {
                return Err(SerializationError::RootAlreadyWritten);
            }
            self.root = Some(value);
            return Ok(());
        }
        match self.root.get_or_insert_with(|| Value::Object(Map::new())) {
            Value::Object(members) => {
                members.insert(key.to_owned(), value);
                Ok(())
            }
            _ => Err(SerializationError::RootAlreadyWritten),
        }
    }

    fn put_optional<T>(
        &mut self,
        key: &str,
        value: Option<T>,
        encode: impl FnOnce(T) -> Value,
    ) -> Result<(), SerializationError> {
        match value {
            Some(value) => self.put(key, encode(value)),
            None => Ok(()),
        }
    }

    /// Run `write` inside a fresh frame, then attach the frame under `key`.
    /// The frame is popped even when `write` fails.
    fn nested(
        &mut self,
        key: &str,
        frame: Frame,
        write: impl FnOnce(&mut Self) -> Result<(), SerializationError>,
    ) -> Result<(), SerializationError> {
        let depth = self.stack.len();
        self.stack.push(frame);
        let result = write(self);
        if self.stack.len() != depth + 1 {
            self.stack.truncate(depth);
            return Err(SerializationError::UnbalancedNesting);
        }
        let value = match self.stack.pop() {
            Some(Frame::Object(members)) => Value::Object(members),
            Some(Frame::Array(items)) => Value::Array(items),
            None => return Err(SerializationError::UnbalancedNesting),
        };
        result?;
        self.put(key, value)
    }
}

fn float_value(key: &str, value: f64) -> Result<Value, SerializationError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| SerializationError::InvalidValue {
            key: key.to_owned(),
            reason: format!("{value} is not a finite number"),
        })
}

fn time_text(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn time_only_text(value: NaiveTime) -> String {
    value.format("%H:%M:%S%.f").to_string()
}

fn primitive_json(key: &str, value: &PrimitiveValue<'_>) -> Result<Value, SerializationError> {
    Ok(match *value {
        PrimitiveValue::String(text) => Value::String(text.to_owned()),
        PrimitiveValue::Bool(flag) => Value::Bool(flag),
        PrimitiveValue::Int32(number) => Value::from(number),
        PrimitiveValue::Int64(number) => Value::from(number),
        PrimitiveValue::Float64(number) => float_value(key, number)?,
        PrimitiveValue::Time(time) => Value::String(time_text(time)),
        PrimitiveValue::DateOnly(date) => Value::String(date.to_string()),
        PrimitiveValue::TimeOnly(time) => Value::String(time_only_text(time)),
        PrimitiveValue::Duration(duration) => Value::String(duration.to_string()),
        PrimitiveValue::Uuid(id) => Value::String(id.to_string()),
        PrimitiveValue::Bytes(bytes) => Value::String(STANDARD.encode(bytes)),
    })
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(
        &mut self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        self.put_optional(key, value, |v| Value::String(v.to_owned()))
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        self.put_optional(key, value, Value::Bool)
    }

    fn write_int32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        self.put_optional(key, value, Value::from)
    }

    fn write_int64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError> {
        self.put_optional(key, value, Value::from)
    }

    fn write_float64_value(
        &mut self,
        key: &str,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        match value {
            Some(value) => {
                let number = float_value(key, value)?;
                self.put(key, number)
            }
            None => Ok(()),
        }
    }

    fn write_time_value(
        &mut self,
        key: &str,
        value: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError> {
        self.put_optional(key, value, |v| Value::String(time_text(v)))
    }

    fn write_date_only_value(
        &mut self,
        key: &str,
        value: Option<NaiveDate>,
    ) -> Result<(), SerializationError> {
        self.put_optional(key, value, |v| Value::String(v.to_string()))
    }

    fn write_time_only_value(
        &mut self,
        key: &str,
        value: Option<NaiveTime>,
    ) -> Result<(), SerializationError> {
        self.put_optional(key, value, |v| Value::String(time_only_text(v)))
    }

    fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<&IsoDuration>,
    ) -> Result<(), SerializationError> {
        self.put_optional(key, value, |v| Value::String(v.to_string()))
    }

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), SerializationError> {
        self.put_optional(key, value, |v| Value::String(v.to_string()))
    }

    fn write_byte_array_value(
        &mut self,
        key: &str,
        value: Option<&[u8]>,
    ) -> Result<(), SerializationError> {
        self.put_optional(key, value, |v| Value::String(STANDARD.encode(v)))
    }

    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError> {
        self.put(key, Value::Null)
    }

    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError> {
        let Some(value) = value else {
            return Ok(());
        };
        self.nested(key, Frame::Object(Map::new()), |writer| value.serialize(writer))
    }

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        self.nested(key, Frame::Array(Vec::with_capacity(values.len())), |writer| {
            values
                .iter()
                .try_for_each(|value| writer.write_object_value("", Some(*value)))
        })
    }

    fn write_collection_of_primitive_values(
        &mut self,
        key: &str,
        values: Option<&[PrimitiveValue<'_>]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        let items = values
            .iter()
            .map(|value| primitive_json(key, value))
            .collect::<Result<Vec<_>, _>>()?;
        self.put(key, Value::Array(items))
    }

    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError> {
        for (key, value) in data {
            self.put(key, value.clone())?;
        }
        Ok(())
    }
}
