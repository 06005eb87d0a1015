//! Membership rules
//!
//! Validate a value against an allow-list (`one_of`) or a deny-list
//! (`none_of`). Absent values pass; pair with `required()` to demand
//! presence.

use crate::foundation::{Error, Rule, ValueState, Violation};

// ============================================================================
// IN
// ============================================================================

/// Validates that a value is one of an allowed set.
///
/// # Examples
///
/// ```rust,ignore
/// let gender = one_of(["Female".to_string(), "Male".to_string()]);
/// assert!(validate(&"Male".to_string(), &[&gender]).is_ok());
/// assert!(validate(&"other".to_string(), &[&gender]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct In<V> {
    values: Vec<V>,
}

impl<V: PartialEq> In<V> {
    /// Creates an allow-list rule.
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    fn holds(&self, value: &V) -> bool {
        self.values.contains(value)
    }
}

impl<V> Rule<V> for In<V>
where
    V: PartialEq + ValueState + Send + Sync,
{
    fn check(&self, value: &V) -> Result<(), Error> {
        if value.is_blank() || self.holds(value) {
            Ok(())
        } else {
            Err(Violation::new("in_invalid", "must be a valid value").into())
        }
    }
}

impl<V> Rule<Option<V>> for In<V>
where
    V: PartialEq + ValueState + Send + Sync,
{
    fn check(&self, value: &Option<V>) -> Result<(), Error> {
        match value {
            Some(value) => Rule::<V>::check(self, value),
            None => Ok(()),
        }
    }
}

/// Creates an allow-list rule.
pub fn one_of<V: PartialEq>(values: impl IntoIterator<Item = V>) -> In<V> {
    In::new(values)
}

// ============================================================================
// NOT IN
// ============================================================================

/// Validates that a value is not one of a rejected set.
#[derive(Debug, Clone)]
pub struct NotIn<V> {
    values: Vec<V>,
}

impl<V: PartialEq> NotIn<V> {
    /// Creates a deny-list rule.
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl<V> Rule<V> for NotIn<V>
where
    V: PartialEq + ValueState + Send + Sync,
{
    fn check(&self, value: &V) -> Result<(), Error> {
        if value.is_blank() || !self.values.contains(value) {
            Ok(())
        } else {
            Err(Violation::new("not_in_invalid", "must not be in list").into())
        }
    }
}

impl<V> Rule<Option<V>> for NotIn<V>
where
    V: PartialEq + ValueState + Send + Sync,
{
    fn check(&self, value: &Option<V>) -> Result<(), Error> {
        match value {
            Some(value) => Rule::<V>::check(self, value),
            None => Ok(()),
        }
    }
}

/// Creates a deny-list rule.
pub fn none_of<V: PartialEq>(values: impl IntoIterator<Item = V>) -> NotIn<V> {
    NotIn::new(values)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::validate;

    #[test]
    fn one_of_accepts_listed_values() {
        let gender = one_of(["Female".to_string(), "Male".to_string()]);
        assert!(validate(&"Male".to_string(), &[&gender]).is_ok());

        let err = validate(&"other".to_string(), &[&gender]).unwrap_err();
        assert_eq!(err.to_string(), "must be a valid value");
    }

    #[test]
    fn one_of_passes_absent_values() {
        let gender = one_of(["Female".to_string(), "Male".to_string()]);
        assert!(validate(&String::new(), &[&gender]).is_ok());
        assert!(validate(&None::<String>, &[&gender]).is_ok());
    }

    #[test]
    fn one_of_numbers() {
        let allowed = one_of([1_u8, 2, 3]);
        assert!(validate(&2_u8, &[&allowed]).is_ok());
        assert!(validate(&9_u8, &[&allowed]).is_err());
    }

    #[test]
    fn none_of_rejects_listed_values() {
        let reserved = none_of(["admin".to_string(), "root".to_string()]);
        assert!(validate(&"alice".to_string(), &[&reserved]).is_ok());

        let err = validate(&"root".to_string(), &[&reserved]).unwrap_err();
        assert_eq!(err.to_string(), "must not be in list");
    }
}
