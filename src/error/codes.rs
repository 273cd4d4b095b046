/// Error code registry for toolbelt
///
/// Error codes are organized by category:
/// - 1000-1999: Type errors
/// - 2000-2999: Value (domain constraint) errors
/// - 3000-3999: Configuration errors
/// - 4000-4999: Serialization errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Type errors (1000-1999)
    pub const TYPE_GENERIC: u16 = 1000;
    pub const TYPE_EXPECTED_OBJECT: u16 = 1001;
    pub const TYPE_EXPECTED_ARRAY: u16 = 1002;
    pub const TYPE_EXPECTED_SCALAR: u16 = 1003;

    // Value errors (2000-2999)
    pub const VALUE_GENERIC: u16 = 2000;
    pub const VALUE_EMPTY: u16 = 2001;
    pub const VALUE_NEGATIVE: u16 = 2002;
    pub const VALUE_NOT_INTEGER: u16 = 2003;
    pub const VALUE_OUT_OF_RANGE: u16 = 2004;
    pub const VALUE_NOT_FINITE: u16 = 2005;
    pub const VALUE_INVALID_PATTERN: u16 = 2006;
    pub const VALUE_INVALID_FORMAT: u16 = 2007;
    pub const VALUE_TOO_FEW_ARGUMENTS: u16 = 2008;
    pub const VALUE_INVALID_RANGE: u16 = 2009;
    pub const VALUE_OVERFLOW: u16 = 2010;
    pub const VALUE_DIVISION_BY_ZERO: u16 = 2011;

    // Configuration errors (3000-3999)
    pub const CONFIG_GENERIC: u16 = 3000;
    pub const CONFIG_MISSING_VARIABLE: u16 = 3001;
    pub const CONFIG_INVALID_NAME: u16 = 3002;
    pub const CONFIG_INVALID_VALUE: u16 = 3003;
    pub const CONFIG_LOGGING_INIT: u16 = 3004;

    // Serialization errors (4000-4999)
    pub const SERIALIZATION_GENERIC: u16 = 4000;
    pub const SERIALIZATION_INVALID_JSON: u16 = 4001;
    pub const SERIALIZATION_INVALID_YAML: u16 = 4002;
    pub const SERIALIZATION_INVALID_TOML: u16 = 4003;
    pub const SERIALIZATION_INVALID_CSV: u16 = 4004;
    pub const SERIALIZATION_INVALID_BASE64: u16 = 4005;
    pub const SERIALIZATION_INVALID_UTF8: u16 = 4006;
    pub const SERIALIZATION_UNSUPPORTED_VALUE: u16 = 4007;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Type errors
        1000 => "Generic type error",
        1001 => "Expected an object",
        1002 => "Expected an array",
        1003 => "Expected a scalar value",

        // Value errors
        2000 => "Generic invalid value",
        2001 => "Value must not be empty",
        2002 => "Value must not be negative",
        2003 => "Value must be an integer",
        2004 => "Value is out of the allowed range",
        2005 => "Value must be a finite number",
        2006 => "Malformed pattern",
        2007 => "Malformed input format",
        2008 => "Too few arguments",
        2009 => "Minimum is greater than maximum",
        2010 => "Arithmetic overflow",
        2011 => "Division by zero",

        // Configuration errors
        3000 => "Generic configuration error",
        3001 => "Required environment variable is missing",
        3002 => "Invalid environment variable name",
        3003 => "Invalid configuration value",
        3004 => "Logging could not be initialized",

        // Serialization errors
        4000 => "Generic serialization error",
        4001 => "Invalid JSON",
        4002 => "Invalid YAML",
        4003 => "Invalid TOML",
        4004 => "Invalid CSV",
        4005 => "Invalid base64",
        4006 => "Decoded data is not valid UTF-8",
        4007 => "Value cannot be represented in the target format",

        // Other errors
        9000 => "Generic error",

        _ => "Unknown error code",
    }
}
