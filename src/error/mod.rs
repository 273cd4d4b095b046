use std::fmt::Display;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for every toolbelt function
#[derive(Error, Debug)]
pub enum ToolbeltError {
    #[error("[E{code:04}] Type error: {message}")]
    Type {
        code: u16,
        message: String,
        param: String,
        expected: String,
        actual: String,
    },

    #[error("[E{code:04}] Invalid value: {message}")]
    Value {
        code: u16,
        message: String,
        param: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        variable: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Serialization error ({format}): {message}")]
    Serialization {
        code: u16,
        message: String,
        format: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ToolbeltError {
    /// Create a type mismatch error naming the parameter and the observed type
    pub fn type_mismatch(
        param: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::type_mismatch_with_code(ErrorCode::TYPE_GENERIC, param, expected, actual)
    }

    /// Create a type mismatch error with specific code
    pub fn type_mismatch_with_code(
        code: u16,
        param: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let param = param.into();
        let expected = expected.into();
        let actual = actual.into();
        Self::Type {
            code,
            message: format!("'{}' must be {}, got {}", param, expected, actual),
            param,
            expected,
            actual,
        }
    }

    /// Create a value error with default code
    pub fn value(message: impl Into<String>) -> Self {
        Self::Value {
            code: ErrorCode::VALUE_GENERIC,
            message: message.into(),
            param: None,
            source: None,
        }
    }

    /// Create a value error with specific code and parameter
    pub fn value_with_code(code: u16, message: impl Into<String>, param: Option<String>) -> Self {
        Self::Value {
            code,
            message: message.into(),
            param,
            source: None,
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            variable: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and variable name
    pub fn config_with_code(
        code: u16,
        message: impl Into<String>,
        variable: Option<String>,
    ) -> Self {
        Self::Config {
            code,
            message: message.into(),
            variable,
            source: None,
        }
    }

    /// Create a serialization error for the given format
    pub fn serialization(code: u16, message: impl Into<String>, format: impl Into<String>) -> Self {
        Self::Serialization {
            code,
            message: message.into(),
            format: format.into(),
            source: None,
        }
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Type errors never wrap another error, so the source is dropped for them.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Value { source: src, .. }
            | Self::Config { source: src, .. }
            | Self::Serialization { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::Type { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Type { message, .. }
            | Self::Value { message, .. }
            | Self::Config { message, .. }
            | Self::Serialization { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Type { code, .. }
            | Self::Value { code, .. }
            | Self::Config { code, .. }
            | Self::Serialization { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Name of the offending parameter or variable, when known
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Type { param, .. } => Some(param),
            Self::Value { param, .. } => param.as_deref(),
            Self::Config { variable, .. } => variable.as_deref(),
            Self::Serialization { .. } | Self::Other { .. } => None,
        }
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Type {
                param,
                expected,
                actual,
                ..
            } => format!(
                "Expected '{}' to be {} but received {}",
                param, expected, actual
            ),
            Self::Value { message, param, .. } => {
                if let Some(p) = param {
                    format!("Invalid value for '{}': {}", p, message)
                } else {
                    format!("Invalid value: {}", message)
                }
            }
            Self::Config {
                message, variable, ..
            } => {
                if let Some(v) = variable {
                    format!("Configuration problem with ${}: {}", v, message)
                } else {
                    format!("Configuration problem: {}", message)
                }
            }
            Self::Serialization {
                message, format, ..
            } => format!("Could not process {} data: {}", format, message),
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        use std::error::Error as _;

        let mut msg = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            msg.push_str(&format!("\n  caused by: {}", err));
            source = err.source();
        }
        msg
    }
}

/// Type alias for Results using ToolbeltError
pub type Result<T> = std::result::Result<T, ToolbeltError>;

// Conversion from common error types

impl From<serde_json::Error> for ToolbeltError {
    fn from(err: serde_json::Error) -> Self {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_INVALID_JSON,
            "Invalid JSON syntax",
            "json",
        )
        .with_source(err)
    }
}

impl From<serde_yaml::Error> for ToolbeltError {
    fn from(err: serde_yaml::Error) -> Self {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_INVALID_YAML,
            "Invalid YAML syntax",
            "yaml",
        )
        .with_source(err)
    }
}

impl From<toml::de::Error> for ToolbeltError {
    fn from(err: toml::de::Error) -> Self {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_INVALID_TOML,
            "Invalid TOML syntax",
            "toml",
        )
        .with_source(err)
    }
}

impl From<toml::ser::Error> for ToolbeltError {
    fn from(err: toml::ser::Error) -> Self {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_UNSUPPORTED_VALUE,
            "Value cannot be written as TOML",
            "toml",
        )
        .with_source(err)
    }
}

impl From<csv::Error> for ToolbeltError {
    fn from(err: csv::Error) -> Self {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_INVALID_CSV,
            "Malformed CSV data",
            "csv",
        )
        .with_source(err)
    }
}

impl From<base64::DecodeError> for ToolbeltError {
    fn from(err: base64::DecodeError) -> Self {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_INVALID_BASE64,
            "Input is not valid base64",
            "base64",
        )
        .with_source(err)
    }
}

impl From<std::string::FromUtf8Error> for ToolbeltError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ToolbeltError::serialization(
            ErrorCode::SERIALIZATION_INVALID_UTF8,
            "Decoded bytes are not valid UTF-8",
            "utf-8",
        )
        .with_source(err)
    }
}

impl From<regex::Error> for ToolbeltError {
    fn from(err: regex::Error) -> Self {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_INVALID_PATTERN,
            "Malformed regular expression",
            Some("pattern".to_string()),
        )
        .with_source(err)
    }
}

impl From<url::ParseError> for ToolbeltError {
    fn from(err: url::ParseError) -> Self {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_INVALID_FORMAT,
            format!("Invalid URL: {}", err),
            Some("url".to_string()),
        )
        .with_source(err)
    }
}

impl From<chrono::ParseError> for ToolbeltError {
    fn from(err: chrono::ParseError) -> Self {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_INVALID_FORMAT,
            format!("Invalid date: {}", err),
            Some("date".to_string()),
        )
        .with_source(err)
    }
}
