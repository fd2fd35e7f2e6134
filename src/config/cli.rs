use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "basketball-vertical")]
#[command(about = "Validate, wrap and analyze basketball data for the host platform")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a vertical configuration file (TOML or JSON)
    Validate {
        #[arg(short, long, default_value = "vertical.toml")]
        config: PathBuf,
    },
    /// Wrap a game record in a host envelope
    ToEnvelope {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Unwrap a host envelope back into a game record
    FromEnvelope {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute advanced statistics for every player and both teams
    Stats {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = StatsFormat::Json)]
        format: StatsFormat,
        /// Reject records where a made counter exceeds its attempts
        #[arg(long)]
        strict: bool,
    },
    /// Print the memory key for a game or a player within it
    Key {
        #[arg(long)]
        game: String,
        #[arg(long)]
        player: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    Json,
    Csv,
}

pub fn read_json<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Writes to `path` when given, stdout otherwise.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content)?;
            tracing::info!("Output saved to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_stats_command() {
        let cli = CliConfig::parse_from([
            "basketball-vertical",
            "--verbose",
            "stats",
            "--input",
            "game.json",
            "--format",
            "csv",
            "--strict",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Command::Stats { input, format, strict } => {
                assert_eq!(input, PathBuf::from("game.json"));
                assert_eq!(format, StatsFormat::Csv);
                assert!(strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_key_command() {
        let cli = CliConfig::parse_from(["basketball-vertical", "key", "--game", "G1"]);
        assert!(matches!(cli.command, Command::Key { ref game, player: None } if game == "G1"));
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested/out.json");

        write_output(Some(&target), "{}").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
        assert_eq!(read_json(&target).unwrap(), serde_json::json!({}));
    }
}
