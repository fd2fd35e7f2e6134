pub mod adapter;
pub mod export;
pub mod keys;
pub mod mapping;
pub mod schema;
pub mod stats;
pub mod validator;

pub use crate::domain::model::{
    AdvancedStats, BoxScoreStats, GameAdvancedStats, GameRecord, GenericEnvelope, VerticalConfig,
};
pub use crate::domain::ports::{HostPlatform, VerticalAdapter};
pub use crate::utils::error::Result;
