use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One violated constraint: where, what was expected, and what was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub constraint: String,
    pub value: serde_json::Value,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (got {})", self.field, self.constraint, self.value)
    }
}

/// Every violation found in one validation pass, in field order.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} violation(s): {}", .violations.len(), join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Host platform error: {message}")]
    HostError { message: String },
}

impl AdapterError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdapterError::ValidationError(e) => {
                format!("Input rejected with {} problem(s)", e.violations.len())
            }
            AdapterError::IoError(e) => format!("Could not read or write a file: {}", e),
            AdapterError::SerializationError(e) => format!("Malformed JSON: {}", e),
            AdapterError::CsvError(e) => format!("Could not build CSV output: {}", e),
            AdapterError::ConfigError { message } => format!("Bad configuration: {}", message),
            AdapterError::HostError { message } => format!("Host platform refused: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AdapterError::ValidationError(e) => format!("Fix these fields: {}", e.fields().join(", ")),
            AdapterError::IoError(_) => "Check that the path exists and is readable".to_string(),
            AdapterError::SerializationError(_) => {
                "Make sure the input matches the game record or envelope shape".to_string()
            }
            AdapterError::CsvError(_) => "Retry with --format json".to_string(),
            AdapterError::ConfigError { .. } => {
                "Config files must hold [player], [team] and [game] tables".to_string()
            }
            AdapterError::HostError { .. } => "Restart with a fresh host session".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
