use crate::domain::model::{AdvancedStats, GameAdvancedStats};
use crate::utils::error::{AdapterError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatRow<'a> {
    subject: &'a str,
    points: u32,
    rebounds: u32,
    assists: u32,
    steals: u32,
    blocks: u32,
    turnovers: u32,
    fouls: u32,
    field_goals_made: u32,
    field_goals_attempted: u32,
    three_pointers_made: u32,
    three_pointers_attempted: u32,
    free_throws_made: u32,
    free_throws_attempted: u32,
    minutes_played: f64,
    field_goal_percentage: f64,
    three_point_percentage: f64,
    free_throw_percentage: f64,
    efficiency: i64,
    points_per_minute: f64,
}

impl<'a> StatRow<'a> {
    fn new(subject: &'a str, stats: &AdvancedStats) -> Self {
        let base = &stats.base;
        Self {
            subject,
            points: base.points,
            rebounds: base.rebounds,
            assists: base.assists,
            steals: base.steals,
            blocks: base.blocks,
            turnovers: base.turnovers,
            fouls: base.fouls,
            field_goals_made: base.field_goals_made,
            field_goals_attempted: base.field_goals_attempted,
            three_pointers_made: base.three_pointers_made,
            three_pointers_attempted: base.three_pointers_attempted,
            free_throws_made: base.free_throws_made,
            free_throws_attempted: base.free_throws_attempted,
            minutes_played: base.minutes_played,
            field_goal_percentage: stats.field_goal_percentage,
            three_point_percentage: stats.three_point_percentage,
            free_throw_percentage: stats.free_throw_percentage,
            efficiency: stats.efficiency,
            points_per_minute: stats.points_per_minute,
        }
    }
}

/// One CSV row per subject: `home`, `away`, then players in id order.
pub fn advanced_stats_csv(game: &GameAdvancedStats) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.serialize(StatRow::new("home", &game.home))?;
    writer.serialize(StatRow::new("away", &game.away))?;
    for (player_id, stats) in &game.players {
        writer.serialize(StatRow::new(player_id, stats))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AdapterError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| AdapterError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::game_advanced_stats;
    use crate::domain::model::{BoxScoreStats, GameRecord};

    #[test]
    fn test_csv_has_header_and_row_per_subject() {
        let mut record = GameRecord {
            game_id: "G1".to_string(),
            ..Default::default()
        };
        record.player_stats.insert(
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

        let csv_output = advanced_stats_csv(&game_advanced_stats(&record)).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("subject,points,rebounds,assists"));
        assert!(lines[0].ends_with("efficiency,pointsPerMinute"));
        assert!(lines[1].starts_with("home,0,"));
        assert!(lines[2].starts_with("away,0,"));
        assert!(lines[3].starts_with("P9,20,5,3,1,0,2,"));
        assert!(lines[3].ends_with(",19,0.625"));
    }
}
