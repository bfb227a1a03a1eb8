//! Lenient decoding of upstream payloads.
//!
//! The admin API wraps collections in an `{ "ok": true, "items": [...] }`
//! envelope. A missing or false `ok`, a missing `items`, or outright
//! malformed JSON all decode to an empty list; individual records that fail
//! to decode are skipped. Nothing in this module returns an error, so a
//! failed or partial fetch degrades to a smaller (possibly root-only) chart.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::types::{Agent, Branch};

/// Decode an agents payload (envelope or bare array) into records.
pub fn decode_agents(payload: &str) -> Vec<Agent> {
    decode_records(payload, "agents")
}

/// Decode a branches payload (envelope or bare array) into records.
pub fn decode_branches(payload: &str) -> Vec<Branch> {
    decode_records(payload, "branches")
}

fn decode_records<T: DeserializeOwned>(payload: &str, what: &str) -> Vec<T> {
    let value: Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => {
            warn!(payload = what, error = %e, "malformed payload, treating as empty");
            return Vec::new();
        }
    };
    let items = match extract_items(&value) {
        Some(items) => items,
        None => {
            warn!(payload = what, "payload has no items, treating as empty");
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(r) => records.push(r),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(payload = what, skipped, "skipped undecodable records");
    }
    records
}

/// Accepts either the `{ok, items}` envelope or a bare JSON array.
fn extract_items(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            if map.get("ok").and_then(Value::as_bool) != Some(true) {
                return None;
            }
            map.get("items").and_then(Value::as_array)
        }
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
