//! JSON Schema descriptors registered with the host for each basketball shape.
//!
//! Shapes are derived from the model types; only limits the Rust types cannot
//! carry are layered on top.

use crate::core::validator::{JERSEY_MAX, JERSEY_MIN};
use crate::domain::model::{
    DataType, EnvelopeKind, GameProfile, GenericEnvelope, PlayerProfile, Sport, TeamProfile,
};
use crate::utils::error::Result;
use schemars::{schema_for, JsonSchema};
use serde_json::{json, Value};

pub const PLAYER_SCHEMA: &str = "basketball.player";
pub const TEAM_SCHEMA: &str = "basketball.team";
pub const GAME_SCHEMA: &str = "basketball.game";
pub const GAME_STATS_SCHEMA: &str = "basketball.game_stats";

fn derived<T: JsonSchema>() -> Result<Value> {
    Ok(serde_json::to_value(schema_for!(T))?)
}

/// Merges `overrides` into the property schema at `properties.<field>`.
fn constrain(schema: &mut Value, field: &str, overrides: Value) {
    let property = schema
        .get_mut("properties")
        .and_then(|properties| properties.get_mut(field))
        .and_then(Value::as_object_mut);
    if let (Some(property), Value::Object(overrides)) = (property, overrides) {
        property.extend(overrides);
    }
}

pub fn player_schema() -> Result<Value> {
    let mut schema = derived::<PlayerProfile>()?;
    constrain(&mut schema, "name", json!({"minLength": 1}));
    constrain(&mut schema, "height", json!({"exclusiveMinimum": 0}));
    constrain(&mut schema, "weight", json!({"exclusiveMinimum": 0}));
    constrain(
        &mut schema,
        "jerseyNumber",
        json!({"minimum": JERSEY_MIN, "maximum": JERSEY_MAX}),
    );
    Ok(schema)
}

pub fn team_schema() -> Result<Value> {
    derived::<TeamProfile>()
}

pub fn game_schema() -> Result<Value> {
    derived::<GameProfile>()
}

/// Shape of the envelope the vertical emits for game statistics.
pub fn game_stats_schema() -> Result<Value> {
    let mut schema = derived::<GenericEnvelope>()?;
    constrain(&mut schema, "type", json!({"const": EnvelopeKind::TAG}));
    let metadata = schema
        .get_mut("definitions")
        .and_then(|definitions| definitions.get_mut("EnvelopeMetadata"));
    if let Some(metadata) = metadata {
        constrain(metadata, "sport", json!({"const": Sport::TAG}));
        constrain(metadata, "dataType", json!({"const": DataType::TAG}));
    }
    Ok(schema)
}

/// Every schema the vertical registers, by name.
pub fn all_schemas() -> Result<Vec<(&'static str, Value)>> {
    Ok(vec![
        (PLAYER_SCHEMA, player_schema()?),
        (TEAM_SCHEMA, team_schema()?),
        (GAME_SCHEMA, game_schema()?),
        (GAME_STATS_SCHEMA, game_stats_schema()?),
    ])
}
