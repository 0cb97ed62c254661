use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaError {
    #[error("Square area overflows i64 for width {width}")]
    Overflow { width: i64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AreaError>;
