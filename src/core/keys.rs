const KEY_PREFIX: &str = "basketball:game";

/// Builds the host memory key for a game, or for one player within it.
///
/// Ids are inserted verbatim. An empty player id yields the game key.
pub fn generate_memory_key(game_id: &str, player_id: Option<&str>) -> String {
    let base = format!("{}:{}", KEY_PREFIX, game_id);
    match player_id {
        Some(player_id) if !player_id.is_empty() => format!("{}:player:{}", base, player_id),
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_key() {
        assert_eq!(generate_memory_key("G1", None), "basketball:game:G1");
    }

    #[test]
    fn test_player_key() {
        assert_eq!(
            generate_memory_key("G1", Some("P9")),
            "basketball:game:G1:player:P9"
        );
    }

    #[test]
    fn test_colon_ids_are_inserted_verbatim() {
        assert_eq!(
            generate_memory_key("2026:01", Some("p:9")),
            "basketball:game:2026:01:player:p:9"
        );
        assert_eq!(generate_memory_key("G%1", None), "basketball:game:G%1");
    }

    #[test]
    fn test_empty_player_id_yields_game_key() {
        assert_eq!(generate_memory_key("G1", Some("")), "basketball:game:G1");
    }
}
