use crate::domain::model::{GenericEnvelope, PlatformHandle, VerticalConfig};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The host platform a vertical plugs into. Implementations own memory,
/// messaging and protocol behavior; this crate only calls through.
#[async_trait]
pub trait HostPlatform: Send + Sync {
    async fn initialize(&self, config: &VerticalConfig) -> Result<PlatformHandle>;
    async fn register_schema(&self, name: &str, schema: serde_json::Value) -> Result<()>;
    async fn register_pipeline(&self, name: &str, envelope_type: &str) -> Result<()>;
    async fn store(&self, key: &str, envelope: &GenericEnvelope) -> Result<()>;
    async fn fetch(&self, key: &str) -> Result<Option<GenericEnvelope>>;
}

/// Extension points a vertical exposes to the host.
#[async_trait]
pub trait VerticalAdapter: Send + Sync {
    fn id(&self) -> &str;
    async fn register_schemas(&self, host: &dyn HostPlatform) -> Result<()>;
    async fn register_agents(&self, host: &dyn HostPlatform) -> Result<()>;
    async fn register_pipelines(&self, host: &dyn HostPlatform) -> Result<()>;
}
