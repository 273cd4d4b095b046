//! Configuration read from environment variables
//!
//! - `env_vars` - typed readers with fallback defaults
//! - `settings` - the crate's own logging settings, loaded through those readers

pub mod env_vars;
pub mod settings;

pub use env_vars::{
    env_bool, env_float, env_int, env_json, env_list, env_require, env_string, env_var,
    get_env_bool, get_env_float, get_env_int, get_env_json, get_env_list, get_env_string,
    get_env_var, parse_bool, require_env,
};
pub use settings::LoggingSettings;
