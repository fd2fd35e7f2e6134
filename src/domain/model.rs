use chrono::{DateTime, SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const SYMBOLS: [&'static str; 5] = ["PG", "SG", "SF", "PF", "C"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            other => Err(format!("unknown position: {}", other)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    pub const SYMBOLS: [&'static str; 2] = ["Eastern", "Western"];
}

impl FromStr for Conference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Eastern" => Ok(Conference::Eastern),
            "Western" => Ok(Conference::Western),
            other => Err(format!("unknown conference: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub name: String,
    pub position: Position,
    pub height: f64,
    pub weight: f64,
    pub jersey_number: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamProfile {
    pub name: String,
    pub conference: Conference,
    pub division: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameProfile {
    pub home_team: String,
    pub away_team: String,
    pub date: String,
    pub venue: String,
}

/// The validated configuration surface handed to the host platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalConfig {
    pub player: PlayerProfile,
    pub team: TeamProfile,
    pub game: GameProfile,
}

/// Raw box-score counters for one player or one team.
///
/// Made/attempted pairs are not cross-checked here; see the `Validate` impl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoxScoreStats {
    #[serde(deserialize_with = "deserialize_counter")]
    pub points: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub rebounds: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub assists: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub steals: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub blocks: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub turnovers: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub fouls: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub field_goals_made: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub field_goals_attempted: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub three_pointers_made: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub three_pointers_attempted: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub free_throws_made: u32,
    #[serde(deserialize_with = "deserialize_counter")]
    pub free_throws_attempted: u32,
    pub minutes_played: f64,
}

/// Hosts may send counters as JSON reals; whole non-negative values are accepted.
fn deserialize_counter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {}",
            value
        )))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TeamStats {
    pub home: BoxScoreStats,
    pub away: BoxScoreStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub quarter: u32,
    pub time_remaining: String,
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: String,
    pub player_stats: BTreeMap<String, BoxScoreStats>,
    pub team_stats: TeamStats,
    pub game_info: GameSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum EnvelopeKind {
    #[serde(rename = "basketball_game")]
    BasketballGame,
}

impl EnvelopeKind {
    pub const TAG: &'static str = "basketball_game";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
}

impl Sport {
    pub const TAG: &'static str = "basketball";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    GameStats,
}

impl DataType {
    pub const TAG: &'static str = "game_stats";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeMetadata {
    pub sport: Sport,
    pub data_type: DataType,
}

impl Default for EnvelopeMetadata {
    fn default() -> Self {
        Self {
            sport: Sport::Basketball,
            data_type: DataType::GameStats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EnvelopePayload {
    pub players: BTreeMap<String, BoxScoreStats>,
    pub teams: TeamStats,
    pub game: GameSnapshot,
}

/// The host platform's wire format for a basketball game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenericEnvelope {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EnvelopeKind,
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
    pub payload: EnvelopePayload,
    pub metadata: EnvelopeMetadata,
}

fn serialize_millis<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedStats {
    #[serde(flatten)]
    pub base: BoxScoreStats,
    pub field_goal_percentage: f64,
    pub three_point_percentage: f64,
    pub free_throw_percentage: f64,
    pub efficiency: i64,
    pub points_per_minute: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameAdvancedStats {
    pub game_id: String,
    pub players: BTreeMap<String, AdvancedStats>,
    pub home: AdvancedStats,
    pub away: AdvancedStats,
}

/// Returned by the host platform once the vertical is initialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformHandle {
    pub vertical: String,
    pub initialized_at: DateTime<Utc>,
}
