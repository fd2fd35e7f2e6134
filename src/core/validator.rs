use crate::domain::model::{
    BoxScoreStats, Conference, GameProfile, GameRecord, PlayerProfile, Position, TeamProfile,
    VerticalConfig,
};
use crate::utils::error::ValidationError;
use crate::utils::validation::{field_path, Validate, Violations};
use serde_json::Value;

pub const JERSEY_MIN: i64 = 0;
pub const JERSEY_MAX: i64 = 99;

type Outcome<T> = std::result::Result<T, ValidationError>;

pub fn validate_player(raw: &Value) -> Outcome<PlayerProfile> {
    let mut report = Violations::new();
    let player = check_player(raw, "", &mut report);
    report.finish(player)
}

pub fn validate_team(raw: &Value) -> Outcome<TeamProfile> {
    let mut report = Violations::new();
    let team = check_team(raw, "", &mut report);
    report.finish(team)
}

pub fn validate_game(raw: &Value) -> Outcome<GameProfile> {
    let mut report = Violations::new();
    let game = check_game(raw, "", &mut report);
    report.finish(game)
}

/// Validates `{player, team, game}` as a whole. Violations from every
/// sub-object are reported together, prefixed with the sub-object name.
pub fn validate_config(raw: &Value) -> Outcome<VerticalConfig> {
    let mut report = Violations::new();
    let Some(fields) = report.object("", raw) else {
        return Err(report.into_error());
    };

    let null = Value::Null;
    let player = check_player(fields.get("player").unwrap_or(&null), "player", &mut report);
    let team = check_team(fields.get("team").unwrap_or(&null), "team", &mut report);
    let game = check_game(fields.get("game").unwrap_or(&null), "game", &mut report);

    let config = match (player, team, game) {
        (Some(player), Some(team), Some(game)) => Some(VerticalConfig { player, team, game }),
        _ => None,
    };

    if !report.is_empty() {
        tracing::debug!("Configuration rejected");
    }
    report.finish(config)
}

fn check_player(raw: &Value, scope: &str, report: &mut Violations) -> Option<PlayerProfile> {
    let fields = report.object(scope, raw)?;

    let name = report.non_empty_text(scope, fields, "name");
    let position = report.one_of::<Position>(scope, fields, "position", &Position::SYMBOLS);
    let height = report.positive_number(scope, fields, "height");
    let weight = report.positive_number(scope, fields, "weight");
    let jersey_number =
        report.integer_in_range(scope, fields, "jerseyNumber", JERSEY_MIN, JERSEY_MAX);

    Some(PlayerProfile {
        name: name?,
        position: position?,
        height: height?,
        weight: weight?,
        jersey_number: u8::try_from(jersey_number?).ok()?,
    })
}

fn check_team(raw: &Value, scope: &str, report: &mut Violations) -> Option<TeamProfile> {
    let fields = report.object(scope, raw)?;

    let name = report.text(scope, fields, "name");
    let conference = report.one_of::<Conference>(scope, fields, "conference", &Conference::SYMBOLS);
    let division = report.text(scope, fields, "division");

    Some(TeamProfile {
        name: name?,
        conference: conference?,
        division: division?,
    })
}

fn check_game(raw: &Value, scope: &str, report: &mut Violations) -> Option<GameProfile> {
    let fields = report.object(scope, raw)?;

    let home_team = report.text(scope, fields, "homeTeam");
    let away_team = report.text(scope, fields, "awayTeam");
    let date = report.text(scope, fields, "date");
    let venue = report.text(scope, fields, "venue");

    Some(GameProfile {
        home_team: home_team?,
        away_team: away_team?,
        date: date?,
        venue: venue?,
    })
}

fn check_box_score(stats: &BoxScoreStats, scope: &str, report: &mut Violations) {
    report.made_within_attempts(
        scope,
        "fieldGoalsMade",
        stats.field_goals_made,
        stats.field_goals_attempted,
    );
    report.made_within_attempts(
        scope,
        "threePointersMade",
        stats.three_pointers_made,
        stats.three_pointers_attempted,
    );
    report.made_within_attempts(
        scope,
        "freeThrowsMade",
        stats.free_throws_made,
        stats.free_throws_attempted,
    );
}

impl Validate for BoxScoreStats {
    fn validate(&self) -> Outcome<()> {
        let mut report = Violations::new();
        check_box_score(self, "", &mut report);
        report.finish(Some(()))
    }
}

impl Validate for GameRecord {
    fn validate(&self) -> Outcome<()> {
        let mut report = Violations::new();
        for (player_id, stats) in &self.player_stats {
            check_box_score(stats, &field_path("playerStats", player_id), &mut report);
        }
        check_box_score(&self.team_stats.home, "teamStats.home", &mut report);
        check_box_score(&self.team_stats.away, "teamStats.away", &mut report);
        report.finish(Some(()))
    }
}
