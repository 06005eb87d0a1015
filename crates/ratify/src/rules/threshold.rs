//! Threshold rules
//!
//! Lower and upper bounds over any ordered value, inclusive by default.
//! Absent (zero) values pass; pair with `required()` to demand presence.

use std::fmt;

use crate::foundation::{Error, Rule, ValueState, Violation};

// ============================================================================
// MIN
// ============================================================================

/// Validates that a value is at least a lower bound.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(validate(&21_u32, &[&min(18_u32)]).is_ok());
/// assert!(validate(&15_u32, &[&min(18_u32)]).is_err());
/// assert!(validate(&18_u32, &[&min(18_u32).exclusive()]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min<V> {
    bound: V,
    exclusive: bool,
}

impl<V> Min<V> {
    /// Creates an inclusive lower-bound rule.
    pub const fn new(bound: V) -> Self {
        Self {
            bound,
            exclusive: false,
        }
    }

    /// Makes the bound exclusive.
    #[must_use = "builder methods must be chained or built"]
    pub const fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

impl<V> Rule<V> for Min<V>
where
    V: PartialOrd + fmt::Display + ValueState + Send + Sync,
{
    fn check(&self, value: &V) -> Result<(), Error> {
        if value.is_blank() {
            return Ok(());
        }
        let ok = if self.exclusive {
            *value > self.bound
        } else {
            *value >= self.bound
        };
        if ok {
            Ok(())
        } else {
            let message = if self.exclusive {
                format!("must be greater than {}", self.bound)
            } else {
                format!("must be no less than {}", self.bound)
            };
            Err(Violation::new("min_invalid", message)
                .with_param("threshold", self.bound.to_string())
                .into())
        }
    }
}

impl<V> Rule<Option<V>> for Min<V>
where
    V: PartialOrd + fmt::Display + ValueState + Send + Sync,
{
    fn check(&self, value: &Option<V>) -> Result<(), Error> {
        match value {
            Some(value) => Rule::<V>::check(self, value),
            None => Ok(()),
        }
    }
}

/// Creates an inclusive lower-bound rule.
pub const fn min<V>(bound: V) -> Min<V> {
    Min::new(bound)
}

// ============================================================================
// MAX
// ============================================================================

/// Validates that a value is at most an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max<V> {
    bound: V,
    exclusive: bool,
}

impl<V> Max<V> {
    /// Creates an inclusive upper-bound rule.
    pub const fn new(bound: V) -> Self {
        Self {
            bound,
            exclusive: false,
        }
    }

    /// Makes the bound exclusive.
    #[must_use = "builder methods must be chained or built"]
    pub const fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

impl<V> Rule<V> for Max<V>
where
    V: PartialOrd + fmt::Display + ValueState + Send + Sync,
{
    fn check(&self, value: &V) -> Result<(), Error> {
        if value.is_blank() {
            return Ok(());
        }
        let ok = if self.exclusive {
            *value < self.bound
        } else {
            *value <= self.bound
        };
        if ok {
            Ok(())
        } else {
            let message = if self.exclusive {
                format!("must be less than {}", self.bound)
            } else {
                format!("must be no greater than {}", self.bound)
            };
            Err(Violation::new("max_invalid", message)
                .with_param("threshold", self.bound.to_string())
                .into())
        }
    }
}

impl<V> Rule<Option<V>> for Max<V>
where
    V: PartialOrd + fmt::Display + ValueState + Send + Sync,
{
    fn check(&self, value: &Option<V>) -> Result<(), Error> {
        match value {
            Some(value) => Rule::<V>::check(self, value),
            None => Ok(()),
        }
    }
}

/// Creates an inclusive upper-bound rule.
pub const fn max<V>(bound: V) -> Max<V> {
    Max::new(bound)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::validate;

    #[test]
    fn min_inclusive() {
        assert!(validate(&21_u32, &[&min(18_u32)]).is_ok());
        assert!(validate(&18_u32, &[&min(18_u32)]).is_ok());

        let err = validate(&15_u32, &[&min(18_u32)]).unwrap_err();
        assert_eq!(err.to_string(), "must be no less than 18");
    }

    #[test]
    fn min_exclusive() {
        let err = validate(&18_u32, &[&min(18_u32).exclusive()]).unwrap_err();
        assert_eq!(err.to_string(), "must be greater than 18");
    }

    #[test]
    fn max_inclusive() {
        assert!(validate(&5_i64, &[&max(10_i64)]).is_ok());

        let err = validate(&11_i64, &[&max(10_i64)]).unwrap_err();
        assert_eq!(err.to_string(), "must be no greater than 10");
    }

    #[test]
    fn zero_values_are_absent() {
        // The zero value does not trip a threshold; that is required()'s job.
        assert!(validate(&0_u32, &[&min(18_u32)]).is_ok());
        assert!(validate(&None::<u32>, &[&min(18_u32)]).is_ok());
        assert!(validate(&Some(15_u32), &[&min(18_u32)]).is_err());
    }

    #[test]
    fn floats_work() {
        assert!(validate(&1.5_f64, &[&max(2.0_f64)]).is_ok());
        assert!(validate(&2.5_f64, &[&max(2.0_f64)]).is_err());
    }
}
