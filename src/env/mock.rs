//! In-memory environment for testing

use super::traits::EnvSource;
use std::collections::HashMap;

/// Mock environment holding variables in a map
///
/// # Examples
///
/// ```
/// use toolbelt::env::{EnvSource, MockEnv};
///
/// let env = MockEnv::new()
///     .with_var("DEBUG", "true")
///     .with_var("WORKERS", "4");
///
/// assert_eq!(env.var("WORKERS").as_deref(), Some("4"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variable insertion
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set a variable in place
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable
    pub fn remove_var(&mut self, name: &str) {
        self.vars.remove(name);
    }

    /// All variables currently defined
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl FromIterator<(String, String)> for MockEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl EnvSource for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
