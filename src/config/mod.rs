#[cfg(feature = "cli")]
pub mod cli;
pub mod file_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, StatsFormat};
pub use file_config::ConfigFormat;
