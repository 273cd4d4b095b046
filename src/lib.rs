//! # Toolbelt
//!
//! Small, stateless utility functions grouped by domain. Every function borrows
//! its inputs, validates them up front and returns either a freshly built value
//! or a [`ToolbeltError`] describing the first violated constraint.
//!
//! ## Usage
//!
//! ```
//! use toolbelt::{format, math, string};
//!
//! assert_eq!(format::format_bytes(1536, 2), "1.5 KB");
//! assert_eq!(math::round_to_decimals(5.6789, 2).unwrap(), 5.68);
//! assert_eq!(string::to_snake_case("parseHttpRequest"), "parse_http_request");
//! ```
//!
//! ## Modules
//!
//! - `array` - Aggregates, set-like helpers and reshaping over slices
//! - `collection` - Set algebra over `HashSet` and map combinators over `HashMap`
//! - `config` - Typed environment variable readers with fallback defaults
//! - `crypto` - Digests, salts, tokens and constant-time comparison
//! - `date` - Calendar arithmetic, parsing and relative time on `chrono` types
//! - `env` - Environment access abstraction (process and in-memory sources)
//! - `error` - The crate error type, error codes and helper constructors
//! - `format` - Human-readable numbers, sizes, durations and phone numbers
//! - `logging` - Optional `tracing` subscriber setup
//! - `math` - Arithmetic, number theory and descriptive statistics
//! - `network` - IP address, CIDR, port, MAC and URL helpers
//! - `object` - Merging, picking, dot-path access and diffing of JSON objects
//! - `random` - Random values with injectable generators
//! - `regexp` - Regex wrappers and catastrophic backtracking analysis
//! - `serialization` - JSON, YAML, TOML, CSV, base64 and query string conversion
//! - `string` - Case conversion, padding, distance and cleanup of text
//! - `validation` - Format predicates and password strength checks
pub mod array;
pub mod collection;
pub mod config;
pub mod crypto;
pub mod date;
pub mod env;
pub mod error;
pub mod format;
pub mod logging;
pub mod math;
pub mod network;
pub mod object;
pub mod random;
pub mod regexp;
pub mod serialization;
pub mod string;
pub mod validation;

mod guards;

pub use error::{ErrorCode, Result, ToolbeltError};
pub use guards::json_type_name;
