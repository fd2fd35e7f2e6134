pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::InMemoryHost;
pub use crate::core::adapter::BasketballAdapter;
pub use crate::core::keys::generate_memory_key;
pub use crate::core::mapping::{
    decode_envelope, decode_game_record, from_envelope, to_envelope, to_envelope_at,
};
pub use crate::core::stats::{calculate_advanced_stats, game_advanced_stats};
pub use crate::core::validator::{validate_config, validate_game, validate_player, validate_team};
pub use crate::domain::model::*;
pub use crate::domain::ports::{HostPlatform, VerticalAdapter};
pub use crate::utils::error::{AdapterError, Result, ValidationError, Violation};
pub use crate::utils::validation::Validate;
