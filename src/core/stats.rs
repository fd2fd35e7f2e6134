use crate::domain::model::{AdvancedStats, BoxScoreStats, GameAdvancedStats, GameRecord};

/// `made / attempted` on a 0-100 scale, or 0 when nothing was attempted.
fn percentage(made: u32, attempted: u32) -> f64 {
    if attempted > 0 {
        f64::from(made) / f64::from(attempted) * 100.0
    } else {
        0.0
    }
}

/// Box-score efficiency. Signed, so inconsistent made/attempted pairs stay representable.
fn efficiency(stats: &BoxScoreStats) -> i64 {
    let positive = i64::from(stats.points)
        + i64::from(stats.rebounds)
        + i64::from(stats.assists)
        + i64::from(stats.steals)
        + i64::from(stats.blocks);
    let missed_field_goals =
        i64::from(stats.field_goals_attempted) - i64::from(stats.field_goals_made);
    let missed_free_throws =
        i64::from(stats.free_throws_attempted) - i64::from(stats.free_throws_made);

    positive - missed_field_goals - missed_free_throws - i64::from(stats.turnovers)
}

pub fn calculate_advanced_stats(stats: &BoxScoreStats) -> AdvancedStats {
    let points_per_minute = if stats.minutes_played > 0.0 {
        f64::from(stats.points) / stats.minutes_played
    } else {
        0.0
    };

    AdvancedStats {
        base: *stats,
        field_goal_percentage: percentage(stats.field_goals_made, stats.field_goals_attempted),
        three_point_percentage: percentage(
            stats.three_pointers_made,
            stats.three_pointers_attempted,
        ),
        free_throw_percentage: percentage(stats.free_throws_made, stats.free_throws_attempted),
        efficiency: efficiency(stats),
        points_per_minute,
    }
}

pub fn game_advanced_stats(record: &GameRecord) -> GameAdvancedStats {
    GameAdvancedStats {
        game_id: record.game_id.clone(),
        players: record
            .player_stats
            .iter()
            .map(|(id, stats)| (id.clone(), calculate_advanced_stats(stats)))
            .collect(),
        home: calculate_advanced_stats(&record.team_stats.home),
        away: calculate_advanced_stats(&record.team_stats.away),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_score() -> BoxScoreStats {
        BoxScoreStats {
            points: 20,
            rebounds: 5,
            assists: 3,
            steals: 1,
            blocks: 0,
            turnovers: 2,
            fouls: 3,
            field_goals_made: 8,
            field_goals_attempted: 15,
            three_pointers_made: 2,
            three_pointers_attempted: 5,
            free_throws_made: 4,
            free_throws_attempted: 5,
            minutes_played: 32.0,
        }
    }

    #[test]
    fn test_efficiency_example() {
        assert_eq!(calculate_advanced_stats(&box_score()).efficiency, 19);
    }

    #[test]
    fn test_percentages_use_hundred_scale() {
        let advanced = calculate_advanced_stats(&box_score());
        assert!((advanced.field_goal_percentage - 53.333333).abs() < 1e-4);
        assert_eq!(advanced.three_point_percentage, 40.0);
        assert_eq!(advanced.free_throw_percentage, 80.0);
        assert_eq!(advanced.points_per_minute, 0.625);
        assert_eq!(advanced.base, box_score());
    }

    #[test]
    fn test_zero_denominators_yield_zero() {
        let advanced = calculate_advanced_stats(&BoxScoreStats {
            points: 4,
            ..Default::default()
        });
        assert_eq!(advanced.field_goal_percentage, 0.0);
        assert_eq!(advanced.three_point_percentage, 0.0);
        assert_eq!(advanced.free_throw_percentage, 0.0);
        assert_eq!(advanced.points_per_minute, 0.0);
        assert!(!advanced.field_goal_percentage.is_nan());
    }

    #[test]
    fn test_efficiency_tolerates_made_above_attempted() {
        let stats = BoxScoreStats {
            field_goals_made: 5,
            field_goals_attempted: 2,
            ..Default::default()
        };
        assert_eq!(calculate_advanced_stats(&stats).efficiency, 3);
        assert_eq!(calculate_advanced_stats(&stats).field_goal_percentage, 250.0);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let stats = box_score();
        assert_eq!(calculate_advanced_stats(&stats), calculate_advanced_stats(&stats));
    }

    #[test]
    fn test_game_advanced_stats_covers_every_subject() {
        let mut record = GameRecord {
            game_id: "G7".to_string(),
            ..Default::default()
        };
        record.player_stats.insert("P1".to_string(), box_score());
        record.player_stats.insert("P2".to_string(), BoxScoreStats::default());
        record.team_stats.home = box_score();

        let game = game_advanced_stats(&record);
        assert_eq!(game.game_id, "G7");
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.players["P1"].efficiency, 19);
        assert_eq!(game.home.efficiency, 19);
        assert_eq!(game.away.efficiency, 0);
    }
}
