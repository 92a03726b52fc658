//! Conversion between plain JSON and the typed value encoding used by the
//! Firestore REST API (`{"stringValue": "x"}`, `{"mapValue": {"fields": ..}}`, ...).

use crate::utils::error::{GatewayError, Result};
use serde_json::{json, Map, Value};

pub fn encode_value(value: &Value) -> Result<Value> {
    let encoded = match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            // integers travel as decimal strings (int64)
            Some(i) => json!({ "integerValue": i.to_string() }),
            None if n.is_u64() => {
                return Err(decode_error(&format!("integer {} is out of int64 range", n)))
            }
            None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            if items.is_empty() {
                json!({ "arrayValue": {} })
            } else {
                let values = items.iter().map(encode_value).collect::<Result<Vec<_>>>()?;
                json!({ "arrayValue": { "values": values } })
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                json!({ "mapValue": {} })
            } else {
                json!({ "mapValue": { "fields": encode_fields(map)? } })
            }
        }
    };
    Ok(encoded)
}

pub fn encode_fields(map: &Map<String, Value>) -> Result<Map<String, Value>> {
    map.iter()
        .map(|(key, value)| Ok((key.clone(), encode_value(value)?)))
        .collect()
}

pub fn decode_value(value: &Value) -> Result<Value> {
    let tagged = value.as_object().ok_or_else(|| decode_error("value is not an object"))?;
    let (tag, inner) = tagged
        .iter()
        .next()
        .ok_or_else(|| decode_error("empty value"))?;

    match tag.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| decode_error("booleanValue is not a bool")),
        "integerValue" => decode_integer(inner),
        "doubleValue" => decode_double(inner),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| decode_error(&format!("{} is not a string", tag))),
        "geoPointValue" => Ok(json!({
            "latitude": inner.get("latitude").cloned().unwrap_or(json!(0.0)),
            "longitude": inner.get("longitude").cloned().unwrap_or(json!(0.0)),
        })),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values.iter().map(decode_value).collect::<Result<Vec<_>>>()?,
                Some(_) => return Err(decode_error("arrayValue.values is not an array")),
                None => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => Ok(Value::Object(decode_fields(fields)?)),
            Some(_) => Err(decode_error("mapValue.fields is not an object")),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(decode_error(&format!("unsupported value type {}", other))),
    }
}

pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>> {
    fields
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode_value(value)?)))
        .collect()
}

fn decode_integer(inner: &Value) -> Result<Value> {
    match inner {
        Value::String(s) => s
            .parse::<i64>()
            .map(Value::from)
            .map_err(|e| decode_error(&format!("integerValue {:?}: {}", s, e))),
        Value::Number(n) if n.is_i64() => Ok(Value::Number(n.clone())),
        _ => Err(decode_error("integerValue is not an integer")),
    }
}

fn decode_double(inner: &Value) -> Result<Value> {
    match inner {
        Value::Number(n) => Ok(Value::Number(n.clone())),
        // NaN and the infinities have no JSON form
        Value::String(s) => Err(decode_error(&format!("non-finite doubleValue {}", s))),
        _ => Err(decode_error("doubleValue is not a number")),
    }
}

fn decode_error(message: &str) -> GatewayError {
    GatewayError::DecodeError {
        message: message.to_string(),
    }
}
