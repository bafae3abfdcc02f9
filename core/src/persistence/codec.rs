use crate::catalog::model::{RawControl, SecurityControl};
use crate::error::{CoreError, CoreResult};
use serde_json::Value;

// Persisted shape: a bare JSON array of control objects. No envelope, no
// version field.
pub fn serialize(controls: &[SecurityControl]) -> CoreResult<String> {
    Ok(serde_json::to_string(controls)?)
}

pub fn serialize_pretty(controls: &[SecurityControl]) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(controls)?)
}

pub fn parse_value(text: &str) -> CoreResult<Value> {
    serde_json::from_str(text).map_err(|e| CoreError::Parse(e.to_string()))
}

pub fn deserialize(text: &str) -> CoreResult<Vec<SecurityControl>> {
    from_value(parse_value(text)?)
}

pub fn from_value(value: Value) -> CoreResult<Vec<SecurityControl>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(CoreError::Shape(format!(
                "expected an array of controls, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut controls = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let raw = match item {
            Value::Object(_) => serde_json::from_value::<RawControl>(item)?,
            other => {
                tracing::warn!(
                    index,
                    kind = json_kind(&other),
                    "record is not an object, kept blank"
                );
                RawControl::default()
            }
        };
        controls.push(raw.normalize());
    }
    Ok(controls)
}

// Import gate only. Records after the first are never inspected.
pub fn check_import_shape(value: &Value) -> CoreResult<()> {
    let items = value.as_array().ok_or_else(|| {
        CoreError::Shape(format!(
            "import payload must be an array, found {}",
            json_kind(value)
        ))
    })?;
    let first = items
        .first()
        .ok_or_else(|| CoreError::Shape("import payload is an empty array".to_string()))?;
    if !first.get("id").map(is_truthy).unwrap_or(false) {
        return Err(CoreError::Shape(
            "first imported record has no id".to_string(),
        ));
    }
    Ok(())
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|x| x != 0.0 && !x.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
