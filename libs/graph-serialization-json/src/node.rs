//! [`ParseNode`] over a borrowed `serde_json::Value`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use graph_serialization::{ByteArray, IsoDuration, ParseError, ParseNode};
use serde_json::{Number, Value};
use uuid::Uuid;

const OFFSETLESS_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedKind {
            expected,
            found: kind_of(self.value),
        }
    }

    fn text(&self) -> Result<Option<&'a str>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(text.as_str())),
            _ => Err(self.unexpected("string")),
        }
    }

    fn number(&self, expected: &'static str) -> Result<Option<&'a Number>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => Ok(Some(number)),
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Parse a string node with `parse`, reporting failures as `kind`.
    fn parse_text<T>(
        &self,
        kind: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, ParseError> {
        let Some(text) = self.text()? else {
            return Ok(None);
        };
        match parse(text) {
            Some(value) => Ok(Some(value)),
            None => Err(ParseError::InvalidValue {
                kind,
                value: text.to_owned(),
            }),
        }
    }

    fn integer(&self, kind: &'static str) -> Result<Option<i64>, ParseError> {
        let Some(number) = self.number(kind)? else {
            return Ok(None);
        };
        if let Some(value) = number.as_i64() {
            return Ok(Some(value));
        }
        if number.is_u64() {
            return Err(ParseError::OutOfRange {
                kind,
                value: number.to_string(),
            });
        }
        Err(ParseError::InvalidValue {
            kind,
            value: number.to_string(),
        })
    }

    fn child(value: &'a Value) -> Box<dyn ParseNode + 'a> {
        Box::new(JsonParseNode::new(value))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok().or_else(|| {
        NaiveDateTime::parse_from_str(text, OFFSETLESS_TIMESTAMP)
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

impl ParseNode for JsonParseNode<'_> {
    fn child_node(&self, name: &str) -> Result<Option<Box<dyn ParseNode + '_>>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(members) => Ok(members.get(name).map(Self::child)),
            _ => Err(self.unexpected("object")),
        }
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn string_value(&self) -> Result<Option<String>, ParseError> {
        Ok(self.text()?.map(str::to_owned))
    }

    fn bool_value(&self) -> Result<Option<bool>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            _ => Err(self.unexpected("boolean")),
        }
    }

    fn int32_value(&self) -> Result<Option<i32>, ParseError> {
        let Some(value) = self.integer("int32")? else {
            return Ok(None);
        };
        i32::try_from(value)
            .map(Some)
            .map_err(|_| ParseError::OutOfRange {
                kind: "int32",
                value: value.to_string(),
            })
    }

    fn int64_value(&self) -> Result<Option<i64>, ParseError> {
        self.integer("int64")
    }

    fn float64_value(&self) -> Result<Option<f64>, ParseError> {
        Ok(self.number("float64")?.and_then(Number::as_f64))
    }

    fn time_value(&self) -> Result<Option<DateTime<FixedOffset>>, ParseError> {
        self.parse_text("timestamp", parse_timestamp)
    }

    fn date_only_value(&self) -> Result<Option<NaiveDate>, ParseError> {
        self.parse_text("date", |text| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
    }

    fn time_only_value(&self) -> Result<Option<NaiveTime>, ParseError> {
        self.parse_text("time", |text| NaiveTime::parse_from_str(text, "%H:%M:%S%.f").ok())
    }

    fn iso_duration_value(&self) -> Result<Option<IsoDuration>, ParseError> {
        let Some(text) = self.text()? else {
            return Ok(None);
        };
        text.parse().map(Some)
    }

    fn uuid_value(&self) -> Result<Option<Uuid>, ParseError> {
        self.parse_text("uuid", |text| Uuid::parse_str(text).ok())
    }

    fn byte_array_value(&self) -> Result<Option<ByteArray>, ParseError> {
        let Some(text) = self.text()? else {
            return Ok(None);
        };
        ByteArray::from_base64(text).map(Some)
    }

    fn object_fields(&self) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Object(members) => Ok(Some(
                members
                    .iter()
                    .map(|(name, value)| (name.as_str(), Self::child(value)))
                    .collect(),
            )),
            _ => Err(self.unexpected("object")),
        }
    }

    fn collection_elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, ParseError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items.iter().map(Self::child).collect())),
            _ => Err(self.unexpected("array")),
        }
    }

    fn untyped_value(&self) -> Result<Value, ParseError> {
        Ok(self.value.clone())
    }
}
