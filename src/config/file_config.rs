use crate::core::validator::validate_config;
use crate::domain::model::VerticalConfig;
use crate::utils::error::{AdapterError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// On-disk syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

impl VerticalConfig {
    /// 從檔案載入並驗證配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&content, ConfigFormat::from_path(path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, ConfigFormat::Toml)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, ConfigFormat::Json)
    }

    fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        let raw = parse_raw(content, format)?;
        Ok(validate_config(&raw)?)
    }
}

/// Parses a configuration document into untyped JSON, after `${VAR}` substitution.
pub fn parse_raw(content: &str, format: ConfigFormat) -> Result<serde_json::Value> {
    let processed = substitute_env_vars(content);
    match format {
        ConfigFormat::Json => Ok(serde_json::from_str(&processed)?),
        ConfigFormat::Toml => {
            let table: toml::Table =
                toml::from_str(&processed).map_err(|e| AdapterError::ConfigError {
                    message: format!("TOML parsing error: {}", e),
                })?;
            Ok(serde_json::to_value(table)?)
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    })
}

/// 替換環境變數 (例如 ${TEAM_NAME})；未設定的變數保持原樣
pub fn substitute_env_vars(content: &str) -> String {
    env_var_pattern()
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
