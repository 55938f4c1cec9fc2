use serde_json::{Map, Value};

/// Make sure `response.output` is an object, replacing anything else with
/// `{}`. Returns true when the response had to be patched.
pub fn ensure_output(response: &mut Value) -> bool {
    let Some(object) = response.as_object_mut() else {
        return false;
    };

    match object.get("output") {
        Some(Value::Object(_)) => false,
        _ => {
            object.insert("output".to_string(), Value::Object(Map::new()));
            true
        }
    }
}

/// True when `output.text` is missing, null, an empty string or an empty array.
pub fn output_text_is_empty(response: &Value) -> bool {
    match response.get("output").and_then(|o| o.get("text")) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// `output.text` as display segments; a single string becomes one segment.
pub fn extract_output_texts(response: &Value) -> Vec<String> {
    text_segments(response.get("output").and_then(|o| o.get("text")))
}

fn text_segments(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(|s| s.to_string()))
            .collect(),
        _ => Vec::new(),
    }
}

/// First element of `output.generic`, when it is a non-empty array.
pub fn first_generic(response: &Value) -> Option<&Value> {
    response
        .get("output")
        .and_then(|o| o.get("generic"))
        .and_then(|g| g.as_array())
        .and_then(|g| g.first())
}

/// Labels of the last `options` list found in `output.generic`, keeping only
/// options that carry a value.
pub fn extract_option_labels(response: &Value) -> Vec<String> {
    let Some(generic) = response
        .get("output")
        .and_then(|o| o.get("generic"))
        .and_then(|g| g.as_array())
    else {
        return Vec::new();
    };

    let Some(options) = generic
        .iter()
        .filter_map(|item| item.get("options").and_then(|o| o.as_array()))
        .last()
    else {
        return Vec::new();
    };

    options
        .iter()
        .filter(|option| option.get("value").is_some_and(is_truthy))
        .filter_map(|option| option.get("label").and_then(|l| l.as_str()))
        .map(|label| label.to_string())
        .collect()
}

/// String value of `context.<key>`.
pub fn context_str<'a>(response: &'a Value, key: &str) -> Option<&'a str> {
    response
        .get("context")
        .and_then(|c| c.get(key))
        .and_then(|v| v.as_str())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
