use basketball_vertical::config::cli::{read_json, write_output};
use basketball_vertical::config::file_config::parse_raw;
use basketball_vertical::config::{CliConfig, Command, ConfigFormat, StatsFormat};
use basketball_vertical::core::export::advanced_stats_csv;
use basketball_vertical::utils::logger;
use basketball_vertical::{
    decode_envelope, decode_game_record, from_envelope, game_advanced_stats, generate_memory_key,
    to_envelope, AdapterError, BasketballAdapter, InMemoryHost, Validate,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli.command).await {
        tracing::error!("❌ Command failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        if let AdapterError::ValidationError(err) = &e {
            for violation in &err.violations {
                eprintln!("   - {}", violation);
            }
        }
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command) -> basketball_vertical::Result<()> {
    match command {
        Command::Validate { config } => {
            tracing::info!("📁 Loading configuration from: {}", config.display());
            let content = std::fs::read_to_string(&config)?;
            let raw = parse_raw(&content, ConfigFormat::from_path(&config))?;

            let host = InMemoryHost::new();
            let handle = BasketballAdapter::new().bootstrap(&host, &raw).await?;
            tracing::info!(
                "✅ Configuration valid; {} registered {} schema(s)",
                handle.vertical,
                host.schema_names().await.len()
            );

            let validated = host.config().await.ok_or_else(|| AdapterError::HostError {
                message: "host kept no configuration".to_string(),
            })?;
            write_output(None, &serde_json::to_string_pretty(&validated)?)
        }
        Command::ToEnvelope { input, output } => {
            let record = decode_game_record(&read_json(&input)?)?;
            let envelope = to_envelope(record);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&envelope)?)
        }
        Command::FromEnvelope { input, output } => {
            let envelope = decode_envelope(&read_json(&input)?)?;
            let record = from_envelope(envelope);
            write_output(output.as_deref(), &serde_json::to_string_pretty(&record)?)
        }
        Command::Stats {
            input,
            format,
            strict,
        } => {
            let record = decode_game_record(&read_json(&input)?)?;
            if strict {
                record.validate()?;
            }

            let stats = game_advanced_stats(&record);
            let rendered = match format {
                StatsFormat::Json => serde_json::to_string_pretty(&stats)?,
                StatsFormat::Csv => advanced_stats_csv(&stats)?,
            };
            write_output(None, rendered.trim_end())
        }
        Command::Key { game, player } => {
            write_output(None, &generate_memory_key(&game, player.as_deref()))
        }
    }
}
