//! Create-field allow-list and lenient scalar coercion.
//!
//! Clients may send any mapping when creating a plant. Only the keys in [`PERMITTED_FIELDS`]
//! survive; everything else is dropped without complaint. Surviving values are coerced to the
//! column types where that is unambiguous, and treated as absent otherwise.

use crate::domain::plant::NewPlant;
use serde_json::{Map, Value as JsonValue};

/// Keys a client may set on create.
pub const PERMITTED_FIELDS: &[&str] = &["id", "image", "price", "name"];

/// Returns a new mapping holding only the permitted keys of `fields`.
pub fn permit(fields: &Map<String, JsonValue>) -> Map<String, JsonValue> {
    fields
        .iter()
        .filter(|(k, _)| PERMITTED_FIELDS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Whitelists `fields` and coerces what remains into a [`NewPlant`].
pub fn new_plant_from_fields(fields: &Map<String, JsonValue>) -> NewPlant {
    let permitted = permit(fields);
    NewPlant {
        id: permitted.get("id").and_then(coerce_id),
        image: permitted.get("image").and_then(coerce_text),
        price: permitted.get("price").and_then(coerce_price),
        name: permitted.get("name").and_then(coerce_text),
    }
}

fn coerce_id(v: &JsonValue) -> Option<i64> {
    match v {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_price(v: &JsonValue) -> Option<f64> {
    let price = match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    // NaN and infinities have no JSON rendering.
    price.is_finite().then_some(price)
}

fn coerce_text(v: &JsonValue) -> Option<String> {
    match v {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(_) | JsonValue::Bool(_) => Some(v.to_string()),
        _ => None,
    }
}
