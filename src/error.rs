//! error handling stuff
use thiserror::Error;

#[derive(Debug, Error)]
/// An error
pub enum TingeError {
    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a color parse/resolve error
    #[error("color error: {0}")]
    Color(#[from] crate::color::ColorError),

    /// an error from the config source layer
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    TOMLSer(#[from] toml::ser::Error),

    /// a toml deserialization error
    #[error("toml deserialization error: {0}")]
    TOMLDe(#[from] toml::de::Error),

    /// a report from color_eyre
    #[error("{0}")]
    EyreReport(#[from] color_eyre::Report),

    /// a failed configuration validation, already formatted
    #[error("{0}")]
    Invalid(String),

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl From<String> for TingeError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

/// A result using [`TingeError`] as the `Err` variant
pub type Result<T, U = TingeError> = std::result::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::TingeError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::TingeError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::TingeError::from(format!($fmt, $($arg)*)))
    };
}
