//! Pattern rule
//!
//! Validates string values against a compiled regular expression. Passes on
//! an absent (empty or nil) value; pair with `required()` to demand
//! presence.

use regex::Regex;

use crate::foundation::{Error, Rule, Violation};

// ============================================================================
// MATCH
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// # Examples
///
/// ```rust,ignore
/// let state = matches(Regex::new("^[A-Z]{2}$")?);
/// assert!(validate(&"VA".to_string(), &[&state]).is_ok());
/// assert!(validate(&"Virginia".to_string(), &[&state]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    regex: Regex,
}

impl Match {
    /// Creates a pattern rule from a compiled regex.
    #[must_use]
    pub const fn new(regex: Regex) -> Self {
        Self { regex }
    }

    /// The pattern this rule matches against.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn check_str(&self, value: &str) -> Result<(), Error> {
        if value.is_empty() || self.regex.is_match(value) {
            Ok(())
        } else {
            Err(Violation::new("match_invalid", "must be in a valid format")
                .with_param("pattern", self.regex.as_str().to_owned())
                .into())
        }
    }
}

impl Rule<str> for Match {
    fn check(&self, value: &str) -> Result<(), Error> {
        self.check_str(value)
    }
}

impl Rule<String> for Match {
    fn check(&self, value: &String) -> Result<(), Error> {
        self.check_str(value)
    }
}

impl<T> Rule<Option<T>> for Match
where
    T: AsRef<str> + Send + Sync,
{
    fn check(&self, value: &Option<T>) -> Result<(), Error> {
        match value {
            Some(value) => self.check_str(value.as_ref()),
            None => Ok(()),
        }
    }
}

/// Creates a pattern rule from a compiled regex.
#[must_use]
pub const fn matches(regex: Regex) -> Match {
    Match::new(regex)
}

// ============================================================================
// TESTS
// ============================================================================
