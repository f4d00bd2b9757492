use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input stream closed")]
    InputClosed,

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("Contract violation: {message}")]
    ContractViolation { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Rejections produced while validating a single token of user input.
///
/// These never escape the interactive reader; the retry loop reports them and
/// prompts again. Non-interactive callers receive them directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input! Try again.")]
    Parse { token: String },

    #[error("{message}")]
    OutOfRange { message: String },

    #[error("Please type 'y' or 'n'.")]
    YesNo { token: String },
}

impl AppError {
    /// Process exit code used by the binary for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InputClosed => 0,
            AppError::ConfigError { .. } | AppError::InvalidConfigValueError { .. } => 1,
            AppError::InvalidInput(_) => 2,
            AppError::ContractViolation { .. } => 3,
            AppError::IoError(_) | AppError::SerializationError(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
