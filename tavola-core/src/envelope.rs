//! Response envelopes for tool handlers.
//!
//! Every handler reports through one of four statuses (`ok`, `empty`,
//! `not_found`, `error`) so the client can tell success, absence, and failure
//! apart without parsing prose. The [`items`] helper flattens the backend's
//! three response shapes (bare object, bare list, `data`/`results` envelope)
//! into a plain list.

use crate::tool::ToolResult;
use serde_json::{json, Value};

/// Successful response carrying data.
pub fn success(entity: &str, operation: &str, data: Value, count: Option<usize>) -> ToolResult {
    let mut body = json!({
        "status": "ok",
        "entity": entity,
        "operation": operation,
        "data": data,
    });
    if let Some(count) = count {
        body["count"] = json!(count);
    }
    ToolResult::Json(body)
}

/// Successful response with no matching records.
pub fn empty(entity: &str, operation: &str) -> ToolResult {
    ToolResult::Json(json!({
        "status": "empty",
        "entity": entity,
        "operation": operation,
    }))
}

/// A specific identifier did not resolve to a record.
pub fn not_found(entity: &str, identifier: &str) -> ToolResult {
    ToolResult::Json(json!({
        "status": "not_found",
        "entity": entity,
        "identifier": identifier,
    }))
}

/// The operation failed.
pub fn error(entity: &str, operation: &str, message: &str) -> ToolResult {
    ToolResult::Json(json!({
        "status": "error",
        "entity": entity,
        "operation": operation,
        "message": message,
    }))
}

/// Flatten a backend response into a list of records.
///
/// Accepts a bare list, an envelope with a `data` or `results` array, or a
/// single object (which yields a one-element list when it looks like a
/// record, i.e. carries an `id`). Null and anything else yield an empty list.
pub fn items(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(list) => list.clone(),
        Value::Object(map) => {
            if let Some(Value::Array(list)) = map.get("data") {
                list.clone()
            } else if let Some(Value::Array(list)) = map.get("results") {
                list.clone()
            } else if map.contains_key("id") {
                vec![value.clone()]
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

/// First record of a backend response, if any.
pub fn first_item(value: &Value) -> Option<Value> {
    items(value).into_iter().next()
}
