use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unsupported parameter file format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Duplicate parameter key: {key}")]
    DuplicateKey { key: String },

    #[error("Logger initialisation failed: {0}")]
    LoggerError(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, CalcError>;
