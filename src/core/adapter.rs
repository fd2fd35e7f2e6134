use crate::core::keys::generate_memory_key;
use crate::core::mapping::{from_envelope, to_envelope};
use crate::core::schema::{all_schemas, GAME_STATS_SCHEMA};
use crate::core::validator::validate_config;
use crate::domain::model::{EnvelopeKind, GameRecord, PlatformHandle};
use crate::domain::ports::{HostPlatform, VerticalAdapter};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const VERTICAL_ID: &str = "basketball";

/// The basketball vertical as seen by the host platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasketballAdapter;

impl BasketballAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Validates the raw configuration, initializes the host and runs every
    /// registration step. Nothing reaches the host when validation fails.
    pub async fn bootstrap(
        &self,
        host: &dyn HostPlatform,
        raw_config: &serde_json::Value,
    ) -> Result<PlatformHandle> {
        let config = validate_config(raw_config)?;
        tracing::info!(
            "Bootstrapping {} vertical for {} ({})",
            self.id(),
            config.team.name,
            config.game.venue
        );

        let handle = host.initialize(&config).await?;
        self.register_schemas(host).await?;
        self.register_agents(host).await?;
        self.register_pipelines(host).await?;

        tracing::info!("Vertical {} ready", handle.vertical);
        Ok(handle)
    }

    /// Stores the game's envelope under its memory key and returns the key.
    pub async fn publish_game(&self, host: &dyn HostPlatform, record: GameRecord) -> Result<String> {
        let key = generate_memory_key(&record.game_id, None);
        let envelope = to_envelope(record);
        host.store(&key, &envelope).await?;
        tracing::debug!("Published {}", key);
        Ok(key)
    }

    pub async fn load_game(&self, host: &dyn HostPlatform, game_id: &str) -> Result<Option<GameRecord>> {
        let key = generate_memory_key(game_id, None);
        Ok(host.fetch(&key).await?.map(from_envelope))
    }
}

#[async_trait]
impl VerticalAdapter for BasketballAdapter {
    fn id(&self) -> &str {
        VERTICAL_ID
    }

    async fn register_schemas(&self, host: &dyn HostPlatform) -> Result<()> {
        for (name, schema) in all_schemas()? {
            tracing::debug!("Registering schema {}", name);
            host.register_schema(name, schema).await?;
        }
        Ok(())
    }

    async fn register_agents(&self, _host: &dyn HostPlatform) -> Result<()> {
        tracing::debug!("No agents to register for {}", VERTICAL_ID);
        Ok(())
    }

    async fn register_pipelines(&self, host: &dyn HostPlatform) -> Result<()> {
        host.register_pipeline(GAME_STATS_SCHEMA, EnvelopeKind::TAG).await
    }
}
