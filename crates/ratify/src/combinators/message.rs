//! MESSAGE combinator - custom failure wording
//!
//! [`WithMessage`] rewords the failure a wrapped rule produces without
//! touching its code, so programmatic matching and translation stay
//! stable while user-facing text is free to change.

use std::borrow::Cow;

use crate::foundation::{Context, Error, Rule};

// ============================================================================
// WITH MESSAGE
// ============================================================================

/// Replaces the message of failures the inner rule produces.
///
/// Only leaf violations are reworded; composite and internal errors pass
/// through unchanged.
///
/// # Examples
///
/// ```rust,ignore
/// let email = matches(email_pattern()).message("must be a valid email address");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Cow<'static, str>,
}

impl<R> WithMessage<R> {
    /// Wraps a rule with replacement wording.
    pub fn new(inner: R, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// The replacement message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<T, R> Rule<T> for WithMessage<R>
where
    T: ?Sized,
    R: Rule<T>,
{
    fn check(&self, value: &T) -> Result<(), Error> {
        self.inner
            .check(value)
            .map_err(|err| err.with_message(self.message.clone()))
    }

    fn check_with(&self, ctx: &Context, value: &T) -> Result<(), Error> {
        self.inner
            .check_with(ctx, value)
            .map_err(|err| err.with_message(self.message.clone()))
    }

    fn skips_remainder(&self) -> bool {
        self.inner.skips_remainder()
    }
}

// ============================================================================
// TESTS
// ============================================================================
