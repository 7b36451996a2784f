use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, DemoError::IndexOutOfRange { .. })
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IndexOutOfRange { index, len } => {
                format!("Index {} is outside a sequence of {} elements", index, len)
            }
            DemoError::IoError(e) => format!("Could not read or write a file: {}", e),
            DemoError::SerializationError(e) => format!("Could not encode output: {}", e),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
