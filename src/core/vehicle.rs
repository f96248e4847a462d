//! # Vehicle Records
//!
//! The shape the remote feed returns:
//!
//! ```json
//! [{ "id": 1, "name": "Model 3", "vehicleNumber": "KA-01", "description": "...", "image": "https://..." }]
//! ```
//!
//! Records are taken as they come. Nothing is schema-checked: a missing field
//! becomes an empty string and a number where a string was expected is
//! stringified, so odd records still reach the display layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Vehicle identifier as sent by the feed (number or string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleId::Number(n) => write!(f, "{n}"),
            VehicleId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Vehicle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<VehicleId>,
    pub name: String,
    #[serde(rename = "vehicleNumber")]
    pub vehicle_number: String,
    pub description: String,
    pub image: String,
}

/// Key used to tell list entries apart: the id, or the position when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VehicleKey {
    Id(VehicleId),
    Position(usize),
}

impl Vehicle {
    /// Builds a vehicle from one element of the feed array, leniently.
    pub fn from_json(value: &Value) -> Self {
        Self {
            id: value.get("id").and_then(id_from_json),
            name: text_field(value, "name"),
            vehicle_number: text_field(value, "vehicleNumber"),
            description: text_field(value, "description"),
            image: text_field(value, "image"),
        }
    }

    /// Stable list key: falls back to `position` when the record has no id.
    pub fn key(&self, position: usize) -> VehicleKey {
        match &self.id {
            Some(id) => VehicleKey::Id(id.clone()),
            None => VehicleKey::Position(position),
        }
    }
}

/// Decodes a whole feed body. Only the outer array shape is required.
pub fn vehicles_from_json(body: &str) -> Result<Vec<Vehicle>, serde_json::Error> {
    let items: Vec<Value> = serde_json::from_str(body)?;
    Ok(items.iter().map(Vehicle::from_json).collect())
}

fn id_from_json(value: &Value) -> Option<VehicleId> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(VehicleId::Number(i)),
            None => Some(VehicleId::Text(n.to_string())),
        },
        Value::String(s) if !s.is_empty() => Some(VehicleId::Text(s.clone())),
        _ => None,
    }
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// Allow `Vehicle` to be read back from its own serialized form (tests, fixtures).
impl<'de> Deserialize<'de> for Vehicle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Vehicle::from_json(&value))
    }
}
