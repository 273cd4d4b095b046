//! Password strength rules

use serde::{Deserialize, Serialize};

/// Shortest password that passes
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Shortest password that does not draw a length warning
pub const RECOMMENDED_PASSWORD_LENGTH: usize = 12;

/// Outcome of a rule check: failing rules are errors, advisory ones warnings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a failed rule; the result becomes invalid
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Check `password` against the strength rules
///
/// Errors: fewer than 8 characters, or no lowercase letter, uppercase letter,
/// digit or symbol. Warnings: fewer than 12 characters, or the same character
/// three or more times in a row.
///
/// ```
/// use toolbelt::validation::check_password_strength;
///
/// let weak = check_password_strength("password");
/// assert!(!weak.is_valid);
/// assert_eq!(weak.errors.len(), 3);
///
/// let strong = check_password_strength("c0rrect-Horse-battery");
/// assert!(strong.is_valid);
/// assert!(strong.warnings.is_empty());
/// ```
pub fn check_password_strength(password: &str) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let length = password.chars().count();

    if length < MIN_PASSWORD_LENGTH {
        result.add_error(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    } else if length < RECOMMENDED_PASSWORD_LENGTH {
        result.add_warning(format!(
            "Passwords of {} or more characters are recommended",
            RECOMMENDED_PASSWORD_LENGTH
        ));
    }

    if !password.chars().any(char::is_lowercase) {
        result.add_error("Password must contain a lowercase letter");
    }
    if !password.chars().any(char::is_uppercase) {
        result.add_error("Password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        result.add_error("Password must contain a digit");
    }
    if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        result.add_error("Password must contain a symbol");
    }

    if has_run_of_three(password) {
        result.add_warning("Password repeats the same character three or more times in a row");
    }

    result
}

fn has_run_of_three(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

pub fn is_strong_password(password: &str) -> bool {
    check_password_strength(password).is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_tracks_validity() {
        let mut result = ValidationResult::valid();
        result.add_warning("just a warning");
        assert!(result.is_valid);
        result.add_error("broken");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["broken"]);
    }

    #[test]
    fn test_each_missing_class_is_reported() {
        let result = check_password_strength("ALLUPPER123!");
        assert_eq!(result.errors, vec!["Password must contain a lowercase letter"]);

        let result = check_password_strength("alllower123!");
        assert_eq!(result.errors, vec!["Password must contain an uppercase letter"]);

        let result = check_password_strength("NoDigitsHere!");
        assert_eq!(result.errors, vec!["Password must contain a digit"]);

        let result = check_password_strength("NoSymbols123");
        assert_eq!(result.errors, vec!["Password must contain a symbol"]);
    }

    #[test]
    fn test_short_passwords() {
        let result = check_password_strength("Ab1!");
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Password must be at least 8 characters long"]
        );
        assert!(result.warnings.is_empty());

        let result = check_password_strength("Abcdef1!");
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_repeated_characters_warn() {
        let result = check_password_strength("Paaassword-2024");
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec!["Password repeats the same character three or more times in a row"]
        );
    }

    #[test]
    fn test_empty_password_fails_everything() {
        let result = check_password_strength("");
        assert_eq!(result.errors.len(), 5);
        assert!(!is_strong_password(""));
    }

    #[test]
    fn test_is_strong_password() {
        assert!(is_strong_password("Tr0ub4dor&3-extended"));
        assert!(!is_strong_password("Tr0ub4dor"));
    }
}
