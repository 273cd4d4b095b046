//! Environment abstraction for reading process variables
//!
//! The configuration functions never touch `std::env` directly. They read
//! through an [`EnvSource`], so tests can supply variables in memory:
//!
//! - **Trait**: [`EnvSource`] defines the single read capability
//! - **Real implementation**: [`ProcessEnv`] reads the process environment
//! - **Mock implementation**: [`MockEnv`] holds variables in a map
//!
//! # Usage
//!
//! ```
//! use toolbelt::env::{EnvSource, MockEnv};
//!
//! let env = MockEnv::new().with_var("PORT", "8080");
//! assert_eq!(env.var("PORT").as_deref(), Some("8080"));
//! assert_eq!(env.var("HOST"), None);
//! ```

mod mock;
mod real;
mod traits;

pub use mock::MockEnv;
pub use real::ProcessEnv;
pub use traits::EnvSource;
