use anyhow::Result;
use basketball_vertical::{AdapterError, Position, VerticalConfig};
use tempfile::TempDir;

/// 測試從 TOML 檔案載入配置
#[test]
fn test_load_toml_file_with_env_substitution() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("vertical.toml");

    std::env::set_var("BV_FILE_TEST_DIVISION", "Northwest");
    std::fs::write(
        &config_path,
        r#"
[player]
name = "Mika Torres"
position = "PF"
height = 206
weight = 104
jerseyNumber = 99

[team]
name = "Summit Yetis"
conference = "Western"
division = "${BV_FILE_TEST_DIVISION}"

[game]
homeTeam = "YET"
awayTeam = "LOO"
date = "2027-01-09"
venue = "Glacier Dome"
"#,
    )?;

    let config = VerticalConfig::from_file(&config_path)?;
    std::env::remove_var("BV_FILE_TEST_DIVISION");

    assert_eq!(config.player.position, Position::PF);
    assert_eq!(config.player.jersey_number, 99);
    assert_eq!(config.player.height, 206.0);
    assert_eq!(config.team.division, "Northwest");
    Ok(())
}

#[test]
fn test_missing_section_rejects_whole_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("vertical.json");
    std::fs::write(
        &config_path,
        r#"{"player": {"name": "Mika", "position": "PF", "height": 206, "weight": 104, "jerseyNumber": 9},
            "team": {"name": "Summit Yetis", "conference": "Western", "division": "Northwest"}}"#,
    )?;

    match VerticalConfig::from_file(&config_path) {
        Err(AdapterError::ValidationError(err)) => assert_eq!(err.fields(), vec!["game"]),
        other => panic!("expected validation error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = VerticalConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, AdapterError::IoError(_)));
    assert_eq!(
        err.recovery_suggestion(),
        "Check that the path exists and is readable"
    );
}
