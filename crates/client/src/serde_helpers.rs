//! Serde helpers for the ad engine's denormalized content payloads.
//!
//! Responsibilities:
//! - Deserialize the `Content.data` object into a [`ContentData`] that keeps
//!   the full decoded map while also lifting the nested `customData` object
//!   into a separately accessible field.
//! - Keep the one non-structural decode rule centralized so the model
//!   definitions stay plain `#[derive(Deserialize)]` structs.
//!
//! Explicitly does NOT handle:
//! - Validating creative data fields (templates vary per ad type).
//! - Any other entity; everything else decodes structurally.
//!
//! Invariants / assumptions:
//! - `data` is always a JSON object when present.
//! - `customData` stays reachable both inside the generic map and through
//!   the lifted copy; the redundancy is intentional.

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::models::response::ContentData;

/// Deserialize a `Content.data` object, lifting `data.customData` out as a
/// typed map alongside the full decoded map.
pub fn content_data<'de, D>(deserializer: D) -> Result<ContentData, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    let custom_data = match map.get("customData") {
        None | Some(Value::Null) => None,
        Some(Value::Object(obj)) => Some(obj.clone()),
        Some(other) => {
            return Err(D::Error::custom(format!(
                "customData must be an object, got {other}"
            )));
        }
    };
    Ok(ContentData { map, custom_data })
}
