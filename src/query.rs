use core::fmt;

use serde_json::{Map, Number, Value};

use crate::config::ArraySerializer;
use crate::unicode::percent_encode::{encode_component, percent_encode_form_into};

/// A parameter value after normalization to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A scalar or object value; may fill a `:key` placeholder
    Single(String),
    /// An array flattened into one value (`Comma`, `Stringify`)
    Joined(String),
    /// An array written as one `key=value` pair per element (`Repeat`)
    Repeated(Vec<String>),
}

impl QueryValue {
    fn values(&self) -> &[String] {
        match self {
            Self::Single(value) | Self::Joined(value) => core::slice::from_ref(value),
            Self::Repeated(values) => values,
        }
    }
}

/// Ordered query parameters, serialized as `application/x-www-form-urlencoded`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Normalize caller values in insertion order
    pub fn from_params(params: &Map<String, Value>, serializer: ArraySerializer) -> Self {
        let params = params
            .iter()
            .map(|(key, value)| (key.clone(), normalize_value(value, serializer)))
            .collect();
        Self { params }
    }

    pub fn append(&mut self, key: &str, value: &str) {
        self.params
            .push((key.to_string(), QueryValue::Single(value.to_string())));
    }

    /// Get the first value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Number of `key=value` pairs that will be written
    pub fn size(&self) -> usize {
        self.params.iter().map(|(_, value)| value.values().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(key, value)| {
            value
                .values()
                .iter()
                .map(move |v| (key.as_str(), v.as_str()))
        })
    }

    /// Replace every `:key` in `url` with the encoded value of `key`.
    ///
    /// Keys that filled at least one placeholder are removed. Array values
    /// and empty keys never fill placeholders.
    pub fn fill_placeholders(&mut self, url: &mut String) {
        self.params.retain(|(key, value)| {
            let QueryValue::Single(value) = value else {
                return true;
            };
            if key.is_empty() {
                return true;
            }

            let placeholder = format!(":{key}");
            if !url.contains(&placeholder) {
                return true;
            }
            *url = url.replace(&placeholder, &encode_component(value));
            false
        });
    }

    /// Serialize to a query string (without leading `?`)
    pub fn serialize(&self) -> String {
        let mut result = String::new();

        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            percent_encode_form_into(&mut result, key);
            result.push('=');
            percent_encode_form_into(&mut result, value);
        }

        result
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Turn a caller value into query text
pub fn normalize_value(value: &Value, serializer: ArraySerializer) -> QueryValue {
    match value {
        Value::Array(items) => match serializer {
            ArraySerializer::Repeat => QueryValue::Repeated(items.iter().map(element_text).collect()),
            ArraySerializer::Comma => QueryValue::Joined(
                items.iter().map(element_text).collect::<Vec<_>>().join(","),
            ),
            ArraySerializer::Stringify => QueryValue::Joined(value.to_string()),
        },
        other => QueryValue::Single(scalar_text(other)),
    }
}

/// Text of an array element: like a scalar, but `null` is empty
fn element_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        // Objects and nested arrays are written as JSON
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Floats are written the way JavaScript prints them: `1`, not `1.0`, and
/// `1e+21` / `1e-7` outside `[1e-6, 1e21)`. Integers are written exactly.
fn number_text(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) if float == 0.0 => "0".to_string(),
        Some(float) if (1e-6..1e21).contains(&float.abs()) => float.to_string(),
        Some(float) => exponent_text(float),
        None => number.to_string(),
    }
}

/// `1.5e-7`, `1e+21`: shortest digits with a signed exponent
fn exponent_text(float: f64) -> String {
    let text = format!("{float:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
