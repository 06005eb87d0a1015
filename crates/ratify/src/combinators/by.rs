//! Predicate adapters
//!
//! [`by`] turns any function matching the rule contract into a rule;
//! [`with_context`] does the same for the context-aware variant. This is
//! the seam where application-specific checks — format predicates, lookups
//! against request state — plug into chains without a named rule type.
//!
//! A function that fails for operational reasons (not because the input is
//! invalid) must report it as an internal error:
//!
//! ```rust,ignore
//! let unique_email = by(|email: &String| {
//!     match directory.lookup(email) {
//!         Ok(None) => Ok(()),
//!         Ok(Some(_)) => Err(Violation::custom("is already taken").into()),
//!         Err(fault) => Err(Error::internal(fault)),
//!     }
//! });
//! ```

use std::fmt;

use crate::foundation::{Context, Error, Rule};

// ============================================================================
// BY
// ============================================================================

/// Adapts a plain predicate function to the rule contract.
///
/// # Examples
///
/// ```rust,ignore
/// let checkerboard = by(|s: &String| {
///     if s.len() % 2 == 0 {
///         Ok(())
///     } else {
///         Err(Violation::custom("must have even length").into())
///     }
/// });
/// ```
#[derive(Clone, Copy)]
pub struct By<F> {
    check: F,
}

impl<T, F> Rule<T> for By<F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), Error> + Send + Sync,
{
    fn check(&self, value: &T) -> Result<(), Error> {
        (self.check)(value)
    }
}

impl<F> fmt::Debug for By<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("By").finish_non_exhaustive()
    }
}

/// Adapts a predicate function to the rule contract.
pub fn by<T, F>(check: F) -> By<F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), Error> + Send + Sync,
{
    By { check }
}

// ============================================================================
// WITH CONTEXT
// ============================================================================

/// Adapts a context-aware predicate function to the rule contract.
///
/// On the context-free path the function receives an empty context, so one
/// adapter serves both entry points.
#[derive(Clone, Copy)]
pub struct WithContext<F> {
    check: F,
}

impl<T, F> Rule<T> for WithContext<F>
where
    T: ?Sized,
    F: Fn(&Context, &T) -> Result<(), Error> + Send + Sync,
{
    fn check(&self, value: &T) -> Result<(), Error> {
        (self.check)(&Context::new(), value)
    }

    fn check_with(&self, ctx: &Context, value: &T) -> Result<(), Error> {
        (self.check)(ctx, value)
    }
}

impl<F> fmt::Debug for WithContext<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithContext").finish_non_exhaustive()
    }
}

/// Adapts a context-aware predicate function to the rule contract.
///
/// # Examples
///
/// ```rust,ignore
/// let expected = with_context(|ctx: &Context, value: &String| {
///     match ctx.get::<String>("expected") {
///         Some(expected) if expected == value => Ok(()),
///         _ => Err(Violation::custom("unexpected value").into()),
///     }
/// });
/// ```
pub fn with_context<T, F>(check: F) -> WithContext<F>
where
    T: ?Sized,
    F: Fn(&Context, &T) -> Result<(), Error> + Send + Sync,
{
    WithContext { check }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Violation, validate, validate_with};

    #[test]
    fn by_adapts_a_predicate() {
        let even_length = by(|s: &String| {
            if s.len() % 2 == 0 {
                Ok(())
            } else {
                Err(Violation::custom("must have even length").into())
            }
        });

        assert!(validate(&"ab".to_string(), &[&even_length]).is_ok());
        let err = validate(&"abc".to_string(), &[&even_length]).unwrap_err();
        assert_eq!(err.to_string(), "must have even length");
    }

    #[test]
    fn by_can_report_internal_faults() {
        let broken = by(|_s: &String| Err(Error::internal(std::io::Error::other("backend down"))));
        let err = validate(&"x".to_string(), &[&broken]).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn with_context_reads_the_context() {
        let expected = with_context(|ctx: &Context, value: &String| {
            match ctx.get::<String>("expected") {
                Some(expected) if expected == value => Ok(()),
                _ => Err(Violation::custom("unexpected value").into()),
            }
        });

        let ctx = Context::builder()
            .with("expected", "good sample".to_string())
            .build();

        assert!(validate_with(&ctx, &"good sample".to_string(), &[&expected]).is_ok());
        let err = validate_with(&ctx, &"bad sample".to_string(), &[&expected]).unwrap_err();
        assert_eq!(err.to_string(), "unexpected value");
    }

    #[test]
    fn with_context_gets_empty_context_on_context_free_path() {
        let requires_key = with_context(|ctx: &Context, _value: &String| {
            if ctx.contains("expected") {
                Ok(())
            } else {
                Err(Violation::custom("no expectation set").into())
            }
        });

        let err = validate(&"x".to_string(), &[&requires_key]).unwrap_err();
        assert_eq!(err.to_string(), "no expectation set");
    }
}
