use thiserror::Error;

/// Error type for every analyzer operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("non-numeric data: {0}")]
    NonNumericData(String),

    #[error("size mismatch: x has {x_len} values, y has {y_len}")]
    SizeMismatch { x_len: usize, y_len: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_message() {
        let err = Error::SizeMismatch { x_len: 3, y_len: 2 };
        assert_eq!(err.to_string(), "size mismatch: x has 3 values, y has 2");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("precision = ");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
