use chrono::{DateTime, Utc};
use dto::temporal_value::TemporalValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value of a stored document field, as exchanged with the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    NullValue(()),
    BooleanValue(bool),
    IntegerValue(#[serde(with = "integer_as_string")] i64),
    DoubleValue(#[serde(with = "double_or_special")] f64),
    TimestampValue(DateTime<Utc>),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::StringValue(value.to_owned())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::BooleanValue(value)
    }
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::NullValue(()))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::StringValue(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric value of the field. Numeric strings are accepted too.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            FieldValue::IntegerValue(value) => Some(*value as f64),
            FieldValue::DoubleValue(value) => Some(*value),
            FieldValue::StringValue(value) => value.trim().parse().ok(),
            _ => None,
        };
        value.filter(|value| value.is_finite())
    }

    /// Integral value of the field. Fractional parts are truncated, so `7.5` reads as `7`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::IntegerValue(value) => Some(*value),
            _ => self.as_f64().map(|value| value.trunc() as i64),
        }
    }

    /// Interpret the field as a date. Numbers are milliseconds since the Unix epoch.
    pub fn to_temporal_value(&self) -> Option<TemporalValue> {
        match self {
            FieldValue::TimestampValue(instant) => Some(TemporalValue::StoreTimestamp(*instant)),
            FieldValue::StringValue(value) => Some(TemporalValue::IsoString(value.clone())),
            FieldValue::IntegerValue(millis) => Some(TemporalValue::from_epoch_millis(*millis)),
            FieldValue::DoubleValue(millis) if millis.is_finite() => {
                Some(TemporalValue::from_epoch_millis(millis.trunc() as i64))
            }
            FieldValue::DoubleValue(millis) => {
                Some(TemporalValue::Unreadable(millis.to_string()))
            }
            other => {
                warn!("Field can't be interpreted as a date. Ignoring. [value: {other:?}]");
                None
            }
        }
    }
}

/// 64-bit integers travel as JSON strings.
mod integer_as_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrNumber {
            String(String),
            Number(i64),
        }

        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(value) => value.parse().map_err(D::Error::custom),
            StringOrNumber::Number(value) => Ok(value),
        }
    }
}

/// Non-finite doubles travel as the strings `NaN`, `Infinity` and `-Infinity`.
mod double_or_special {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrNumber {
            String(String),
            Number(f64),
        }

        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(value) => match value.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                _ => Err(D::Error::custom(format!("invalid double: {value}"))),
            },
            StringOrNumber::Number(value) => Ok(value),
        }
    }
}
