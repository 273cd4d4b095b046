use super::{ErrorCode, ToolbeltError};

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to ToolbeltError with context
    fn to_toolbelt(self, context: impl Into<String>) -> Result<T, ToolbeltError>;

    /// Convert to a value error naming the offending parameter
    fn to_value_error(self, param: &str, message: impl Into<String>)
        -> Result<T, ToolbeltError>;

    /// Convert to a serialization error for the given format
    fn to_serialization_error(
        self,
        format: &str,
        message: impl Into<String>,
    ) -> Result<T, ToolbeltError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_toolbelt(self, context: impl Into<String>) -> Result<T, ToolbeltError> {
        self.map_err(|e| ToolbeltError::other(context).with_source(e))
    }

    fn to_value_error(
        self,
        param: &str,
        message: impl Into<String>,
    ) -> Result<T, ToolbeltError> {
        self.map_err(|e| {
            ToolbeltError::value_with_code(
                ErrorCode::VALUE_INVALID_FORMAT,
                message,
                Some(param.to_string()),
            )
            .with_source(e)
        })
    }

    fn to_serialization_error(
        self,
        format: &str,
        message: impl Into<String>,
    ) -> Result<T, ToolbeltError> {
        self.map_err(|e| {
            ToolbeltError::serialization(ErrorCode::SERIALIZATION_GENERIC, message, format)
                .with_source(e)
        })
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;
    use std::fmt::Display;

    /// A required string or collection was empty
    pub fn empty(param: &str) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_EMPTY,
            format!("'{}' must not be empty", param),
            Some(param.to_string()),
        )
    }

    /// A value that must be zero or positive was negative
    pub fn negative(param: &str, value: impl Display) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_NEGATIVE,
            format!("'{}' must not be negative, got {}", param, value),
            Some(param.to_string()),
        )
    }

    /// A float argument was NaN or infinite
    pub fn not_finite(param: &str, value: f64) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_NOT_FINITE,
            format!("'{}' must be a finite number, got {}", param, value),
            Some(param.to_string()),
        )
    }

    /// A value lies outside its accepted bounds
    pub fn out_of_range(param: &str, value: impl Display, bounds: &str) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_OUT_OF_RANGE,
            format!("'{}' must be {}, got {}", param, bounds, value),
            Some(param.to_string()),
        )
    }

    /// A lower bound exceeds its upper bound
    pub fn invalid_range(min: impl Display, max: impl Display) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_INVALID_RANGE,
            format!("'min' ({}) must not be greater than 'max' ({})", min, max),
            Some("min".to_string()),
        )
    }

    /// A variadic operation received fewer inputs than it needs
    pub fn too_few_arguments(param: &str, required: usize, actual: usize) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_TOO_FEW_ARGUMENTS,
            format!(
                "'{}' requires at least {} arguments, got {}",
                param, required, actual
            ),
            Some(param.to_string()),
        )
    }

    /// An integer computation does not fit its result type
    pub fn overflow(operation: &str, input: impl Display) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_OVERFLOW,
            format!("{} of {} overflows", operation, input),
            None,
        )
    }

    /// A string argument does not follow the expected format
    pub fn invalid_format(param: &str, expected: &str) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_INVALID_FORMAT,
            format!("'{}' must be {}", param, expected),
            Some(param.to_string()),
        )
    }

    /// A pattern (regex, strftime) is malformed
    pub fn invalid_pattern(param: &str, reason: impl Display) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_INVALID_PATTERN,
            format!("'{}' is malformed: {}", param, reason),
            Some(param.to_string()),
        )
    }

    /// A divisor or total was zero
    pub fn division_by_zero(param: &str) -> ToolbeltError {
        ToolbeltError::value_with_code(
            ErrorCode::VALUE_DIVISION_BY_ZERO,
            format!("'{}' must not be zero", param),
            Some(param.to_string()),
        )
    }
}

/// Macro for quick error creation with context
#[macro_export]
macro_rules! toolbelt_error {
    (value: $msg:expr) => {
        $crate::error::ToolbeltError::value($msg)
    };
    (value: $msg:expr, $source:expr) => {
        $crate::error::ToolbeltError::value($msg).with_source($source)
    };
    (config: $msg:expr) => {
        $crate::error::ToolbeltError::config($msg)
    };
    (config: $msg:expr, $source:expr) => {
        $crate::error::ToolbeltError::config($msg).with_source($source)
    };
    (other: $msg:expr) => {
        $crate::error::ToolbeltError::other($msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_extension_trait() {
        let parse_result: Result<i32, std::num::ParseIntError> = "abc".parse::<i32>();

        let err = parse_result
            .to_value_error("count", "count must be numeric")
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALUE_INVALID_FORMAT);
        assert_eq!(err.param(), Some("count"));
    }

    #[test]
    fn test_common_error_helpers() {
        let err = common::invalid_range(10, 5);
        assert_eq!(err.code(), ErrorCode::VALUE_INVALID_RANGE);
        assert!(err.to_string().contains("must not be greater"));

        let err = common::too_few_arguments("sets", 2, 1);
        assert_eq!(err.code(), ErrorCode::VALUE_TOO_FEW_ARGUMENTS);
        assert!(err.user_message().contains("at least 2"));

        let err = common::not_finite("value", f64::NAN);
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_error_macro() {
        let err = toolbelt_error!(value: "bad input");
        assert_eq!(err.code(), ErrorCode::VALUE_GENERIC);

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err_with_source = toolbelt_error!(config: "missing", io_err);
        assert_eq!(err_with_source.code(), ErrorCode::CONFIG_GENERIC);
    }
}
