use crate::domain::model::{GenericEnvelope, PlatformHandle, VerticalConfig};
use crate::domain::ports::HostPlatform;
use crate::utils::error::{AdapterError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct HostState {
    config: Option<VerticalConfig>,
    schemas: BTreeMap<String, serde_json::Value>,
    pipelines: BTreeMap<String, String>,
    memory: BTreeMap<String, GenericEnvelope>,
}

/// Host platform kept entirely in process memory. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    state: Arc<Mutex<HostState>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn config(&self) -> Option<VerticalConfig> {
        self.state.lock().await.config.clone()
    }

    pub async fn schema(&self, name: &str) -> Option<serde_json::Value> {
        self.state.lock().await.schemas.get(name).cloned()
    }

    pub async fn schema_names(&self) -> Vec<String> {
        self.state.lock().await.schemas.keys().cloned().collect()
    }

    pub async fn pipelines(&self) -> BTreeMap<String, String> {
        self.state.lock().await.pipelines.clone()
    }

    pub async fn memory_keys(&self) -> Vec<String> {
        self.state.lock().await.memory.keys().cloned().collect()
    }
}

#[async_trait]
impl HostPlatform for InMemoryHost {
    async fn initialize(&self, config: &VerticalConfig) -> Result<PlatformHandle> {
        let mut state = self.state.lock().await;
        if state.config.is_some() {
            return Err(AdapterError::HostError {
                message: "host already initialized".to_string(),
            });
        }
        state.config = Some(config.clone());

        Ok(PlatformHandle {
            vertical: crate::core::adapter::VERTICAL_ID.to_string(),
            initialized_at: Utc::now(),
        })
    }

    async fn register_schema(&self, name: &str, schema: serde_json::Value) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.schemas.insert(name.to_string(), schema).is_some() {
            tracing::warn!("Schema {} registered twice, keeping the latest", name);
        }
        Ok(())
    }

    async fn register_pipeline(&self, name: &str, envelope_type: &str) -> Result<()> {
        let mut state = self.state.lock().await;
        state
            .pipelines
            .insert(name.to_string(), envelope_type.to_string());
        Ok(())
    }

    async fn store(&self, key: &str, envelope: &GenericEnvelope) -> Result<()> {
        let mut state = self.state.lock().await;
        state.memory.insert(key.to_string(), envelope.clone());
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<Option<GenericEnvelope>> {
        let state = self.state.lock().await;
        Ok(state.memory.get(key).cloned())
    }
}
