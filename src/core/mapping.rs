//! Conversion between [`GameRecord`] and the host platform's [`GenericEnvelope`].

use crate::domain::model::{
    DataType, EnvelopeKind, EnvelopeMetadata, EnvelopePayload, GameRecord, GenericEnvelope, Sport,
};
use crate::utils::error::Result;
use crate::utils::validation::Violations;
use chrono::{DateTime, SubsecRound, Utc};
use serde_json::Value;

/// Wraps a game record for the host, stamped with the current time.
pub fn to_envelope(record: GameRecord) -> GenericEnvelope {
    to_envelope_at(record, Utc::now().trunc_subsecs(3))
}

/// Same as [`to_envelope`] with a caller-supplied timestamp.
pub fn to_envelope_at(record: GameRecord, timestamp: DateTime<Utc>) -> GenericEnvelope {
    tracing::debug!(
        "Wrapping game {} with {} player line(s)",
        record.game_id,
        record.player_stats.len()
    );

    GenericEnvelope {
        id: record.game_id,
        kind: EnvelopeKind::BasketballGame,
        timestamp,
        payload: EnvelopePayload {
            players: record.player_stats,
            teams: record.team_stats,
            game: record.game_info,
        },
        metadata: EnvelopeMetadata::default(),
    }
}

/// Unwraps an envelope. The timestamp and metadata exist only on the envelope
/// side and are dropped.
pub fn from_envelope(envelope: GenericEnvelope) -> GameRecord {
    GameRecord {
        game_id: envelope.id,
        player_stats: envelope.payload.players,
        team_stats: envelope.payload.teams,
        game_info: envelope.payload.game,
    }
}

/// Decodes untyped host JSON into an envelope, refusing payloads tagged for
/// another sport or data type before looking at the payload.
pub fn decode_envelope(raw: &Value) -> Result<GenericEnvelope> {
    let mut report = Violations::new();
    if let Some(fields) = report.object("", raw) {
        check_tag(&mut report, "type", fields.get("type"), EnvelopeKind::TAG);

        let metadata = fields.get("metadata");
        let metadata_fields = metadata.and_then(Value::as_object);
        if metadata_fields.is_none() {
            report.push(
                "metadata".to_string(),
                "must be an object",
                metadata.unwrap_or(&Value::Null),
            );
        }
        if let Some(metadata) = metadata_fields {
            check_tag(&mut report, "metadata.sport", metadata.get("sport"), Sport::TAG);
            check_tag(&mut report, "metadata.dataType", metadata.get("dataType"), DataType::TAG);
        }
    }

    if !report.is_empty() {
        let err = report.into_error();
        tracing::warn!("Envelope rejected: {}", err);
        return Err(err.into());
    }

    Ok(serde_json::from_value(raw.clone())?)
}

pub fn decode_game_record(raw: &Value) -> Result<GameRecord> {
    Ok(serde_json::from_value(raw.clone())?)
}

fn check_tag(report: &mut Violations, field: &str, value: Option<&Value>, expected: &str) {
    let value = value.unwrap_or(&Value::Null);
    if value.as_str() != Some(expected) {
        report.push(field.to_string(), format!("must equal \"{}\"", expected), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BoxScoreStats, GameSnapshot, TeamStats};
    use crate::utils::error::AdapterError;
    use chrono::TimeZone;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn sample_record() -> GameRecord {
        let mut player_stats = BTreeMap::new();
        player_stats.insert(
            "P9".to_string(),
            BoxScoreStats {
                points: 20,
                rebounds: 5,
                assists: 3,
                steals: 1,
                turnovers: 2,
                field_goals_made: 8,
                field_goals_attempted: 15,
                free_throws_made: 4,
                free_throws_attempted: 5,
                minutes_played: 32.0,
                ..Default::default()
            },
        );
        player_stats.insert("P23".to_string(), BoxScoreStats::default());

        GameRecord {
            game_id: "G1".to_string(),
            player_stats,
            team_stats: TeamStats {
                home: BoxScoreStats {
                    points: 101,
                    ..Default::default()
                },
                away: BoxScoreStats {
                    points: 97,
                    ..Default::default()
                },
            },
            game_info: GameSnapshot {
                quarter: 4,
                time_remaining: "00:00".to_string(),
                home_score: 101,
                away_score: 97,
            },
        }
    }

    #[test]
    fn test_to_envelope_fills_fixed_fields() {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 19, 30, 0).unwrap();
        let envelope = to_envelope_at(sample_record(), timestamp);

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["id"], json!("G1"));
        assert_eq!(value["type"], json!("basketball_game"));
        assert_eq!(value["timestamp"], json!("2026-03-14T19:30:00.000Z"));
        assert_eq!(value["metadata"], json!({"sport": "basketball", "dataType": "game_stats"}));
        assert_eq!(value["payload"]["players"]["P9"]["points"], json!(20));
        assert_eq!(value["payload"]["teams"]["away"]["points"], json!(97));
        assert_eq!(value["payload"]["game"]["timeRemaining"], json!("00:00"));
    }

    #[test]
    fn test_to_envelope_stamps_current_time() {
        let before = Utc::now() - chrono::Duration::seconds(1);
        let envelope = to_envelope(sample_record());
        assert!(envelope.timestamp >= before);
        assert!(envelope.timestamp <= Utc::now());
    }

    #[test]
    fn test_round_trip_preserves_record() {
        let record = sample_record();
        assert_eq!(from_envelope(to_envelope(record.clone())), record);
    }

    #[test]
    fn test_round_trip_through_json() {
        let record = sample_record();
        let wire = serde_json::to_value(to_envelope(record.clone())).unwrap();
        let decoded = decode_envelope(&wire).unwrap();
        assert_eq!(from_envelope(decoded), record);
    }

    #[test]
    fn test_decode_envelope_rejects_other_sport() {
        let mut wire = serde_json::to_value(to_envelope(sample_record())).unwrap();
        wire["metadata"]["sport"] = json!("football");
        wire["type"] = json!("football_match");

        match decode_envelope(&wire) {
            Err(AdapterError::ValidationError(err)) => {
                assert_eq!(err.fields(), vec!["type", "metadata.sport"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_envelope_requires_metadata() {
        let mut wire = serde_json::to_value(to_envelope(sample_record())).unwrap();
        wire.as_object_mut().unwrap().remove("metadata");

        let err = decode_envelope(&wire).unwrap_err();
        assert!(matches!(err, AdapterError::ValidationError(ref e) if e.fields() == vec!["metadata"]));
    }

    #[test]
    fn test_decode_envelope_reports_bad_payload() {
        let mut wire = serde_json::to_value(to_envelope(sample_record())).unwrap();
        wire["payload"]["game"] = json!("halftime");

        assert!(matches!(
            decode_envelope(&wire),
            Err(AdapterError::SerializationError(_))
        ));
    }

    #[test]
    fn test_decode_game_record() {
        let raw = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(raw["gameId"], json!("G1"));
        assert_eq!(decode_game_record(&raw).unwrap(), sample_record());
    }
}
