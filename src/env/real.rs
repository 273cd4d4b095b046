//! Real environment implementation backed by the process environment

use super::traits::EnvSource;

/// Reads variables from the running process
///
/// Delegates to `std::env::var`; values that are not valid Unicode are
/// reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_is_none() {
        let env = ProcessEnv::new();
        assert_eq!(env.var("TOOLBELT_SURELY_UNSET_VARIABLE_1F4A"), None);
        assert!(!env.contains("TOOLBELT_SURELY_UNSET_VARIABLE_1F4A"));
    }
}
