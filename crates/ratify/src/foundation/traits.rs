//! Core traits for the validation engine
//!
//! [`Rule`] is the contract every unit of validation logic implements.
//! [`Validatable`] is the optional self-validation capability a value may
//! carry; the pipeline invokes it after a rule chain succeeds. The chain
//! runner itself lives here too: ordered evaluation, short-circuit on the
//! first failure, and the skip sentinel that truncates a chain.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::combinators::{When, WithMessage, when};
use crate::foundation::context::Context;
use crate::foundation::error::{Error, Errors};

// ============================================================================
// RULE CONTRACT
// ============================================================================

/// A unit of validation logic against one value.
///
/// The trait is generic over the input type rather than using an associated
/// type so that a single shape-agnostic rule value (`required()`, `skip()`)
/// can participate in chains over any input, while typed leaf rules
/// constrain `T` through capability bounds.
///
/// Rules are immutable after construction and `Send + Sync`, so one rule or
/// chain instance can be shared across concurrent validation calls.
///
/// # Examples
///
/// ```rust,ignore
/// struct UpperCase;
///
/// impl Rule<String> for UpperCase {
///     fn check(&self, value: &String) -> Result<(), Error> {
///         if value.chars().all(char::is_uppercase) {
///             Ok(())
///         } else {
///             Err(Violation::new("upper_case", "must be upper case").into())
///         }
///     }
/// }
/// ```
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Evaluates the value on the context-free path.
    fn check(&self, value: &T) -> Result<(), Error>;

    /// Evaluates the value with a propagated context.
    ///
    /// The default delegates to [`Rule::check`]; a rule that reads the
    /// context overrides this. When validation is invoked with a context,
    /// this path is used for every rule in the chain.
    fn check_with(&self, ctx: &Context, value: &T) -> Result<(), Error> {
        let _ = ctx;
        self.check(value)
    }

    /// True if this rule ends its chain successfully when encountered.
    ///
    /// Only the skip rule returns true; everything after it in the chain,
    /// including the value's self-validation, is not evaluated.
    fn skips_remainder(&self) -> bool {
        false
    }
}

// Boxed and borrowed rules are rules, so chains compose freely.

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for &R {
    fn check(&self, value: &T) -> Result<(), Error> {
        (**self).check(value)
    }

    fn check_with(&self, ctx: &Context, value: &T) -> Result<(), Error> {
        (**self).check_with(ctx, value)
    }

    fn skips_remainder(&self) -> bool {
        (**self).skips_remainder()
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Box<R> {
    fn check(&self, value: &T) -> Result<(), Error> {
        (**self).check(value)
    }

    fn check_with(&self, ctx: &Context, value: &T) -> Result<(), Error> {
        (**self).check_with(ctx, value)
    }

    fn skips_remainder(&self) -> bool {
        (**self).skips_remainder()
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every rule.
///
/// The trait itself carries no input-type parameter: shape-agnostic rules
/// implement [`Rule`] for many inputs, and pinning the input here would
/// make `required().message(..)` ambiguous. `when` takes the input type as
/// a method generic instead; it is inferred from where the wrapper is used.
pub trait RuleExt: Sized {
    /// Applies this rule only when `condition` is true.
    ///
    /// Sugar for a [`When`] wrapper around a single rule; the condition is
    /// a plain `bool`, evaluated once at construction.
    fn when<T>(self, condition: bool) -> When<T>
    where
        T: ?Sized + 'static,
        Self: Rule<T> + 'static,
    {
        when(condition, vec![Box::new(self) as Box<dyn Rule<T>>])
    }

    /// Replaces the message of failures this rule produces.
    ///
    /// The failure code is untouched, so programmatic matching and
    /// translation keep working.
    fn message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<R: Send + Sync> RuleExt for R {}

// ============================================================================
// SELF-VALIDATION CAPABILITY
// ============================================================================

/// The self-validation capability.
///
/// A record type implements this by running its own field rules; the
/// pipeline invokes it after an external rule chain succeeds, and the
/// recursive impls below extend it through collections and wrappers. Leaf
/// scalar types carry the no-op default, which is what makes the capability
/// a property of the value rather than of a class hierarchy.
///
/// # Examples
///
/// ```rust,ignore
/// impl Validatable for Address {
///     fn validate(&self) -> Result<(), Error> {
///         validate_record(self, [
///             field("Street", |a: &Address| &a.street, chain![required(), length(5, 50)]),
///             field("Zip", |a: &Address| &a.zip, chain![required(), matches(zip_pattern())]),
///         ])
///     }
/// }
/// ```
pub trait Validatable {
    /// Validates the value by its own rules.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Context-aware variant; defaults to the context-free path.
    fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
        let _ = ctx;
        self.validate()
    }
}

macro_rules! leaf_validatable {
    ($($ty:ty),+ $(,)?) => {
        $(impl Validatable for $ty {})+
    };
}

leaf_validatable!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, str,
    String,
);

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self) -> Result<(), Error> {
        (**self).validate()
    }

    fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
        (**self).validate_with(ctx)
    }
}

macro_rules! wrapper_validatable {
    ($($wrapper:ident),+ $(,)?) => {
        $(impl<T: Validatable + ?Sized> Validatable for $wrapper<T> {
            fn validate(&self) -> Result<(), Error> {
                (**self).validate()
            }

            fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
                (**self).validate_with(ctx)
            }
        })+
    };
}

wrapper_validatable!(Box, Rc, Arc);

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> Result<(), Error> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }

    fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
        match self {
            Some(value) => value.validate_with(ctx),
            None => Ok(()),
        }
    }
}

impl<T: Validatable> Validatable for [T] {
    fn validate(&self) -> Result<(), Error> {
        validate_elements(None, self.iter().enumerate().map(|(i, v)| (i.to_string(), v)))
    }

    fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
        validate_elements(
            Some(ctx),
            self.iter().enumerate().map(|(i, v)| (i.to_string(), v)),
        )
    }
}

impl<T: Validatable> Validatable for Vec<T> {
    fn validate(&self) -> Result<(), Error> {
        self.as_slice().validate()
    }

    fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
        self.as_slice().validate_with(ctx)
    }
}

impl<K: fmt::Display, V: Validatable> Validatable for HashMap<K, V> {
    fn validate(&self) -> Result<(), Error> {
        validate_elements(None, self.iter().map(|(k, v)| (k.to_string(), v)))
    }

    fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
        validate_elements(Some(ctx), self.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

impl<K: fmt::Display, V: Validatable> Validatable for BTreeMap<K, V> {
    fn validate(&self) -> Result<(), Error> {
        validate_elements(None, self.iter().map(|(k, v)| (k.to_string(), v)))
    }

    fn validate_with(&self, ctx: &Context) -> Result<(), Error> {
        validate_elements(Some(ctx), self.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

/// Runs self-validation over keyed elements, aggregating failures.
fn validate_elements<'a, T: Validatable + ?Sized + 'a>(
    ctx: Option<&Context>,
    elements: impl Iterator<Item = (String, &'a T)>,
) -> Result<(), Error> {
    let mut errors = Errors::new();
    for (key, element) in elements {
        let result = match ctx {
            Some(ctx) => element.validate_with(ctx),
            None => element.validate(),
        };
        errors.insert(key, result.err());
    }
    errors.into_result()
}

// ============================================================================
// CHAIN RUNNER
// ============================================================================

/// Whether a chain ran to completion or was truncated by a skip rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Completed,
    Skipped,
}

/// Runs a rule chain in order, without the self-validation step.
///
/// Short-circuits on the first failing rule. An active skip rule ends the
/// chain successfully; rules positioned before it have already run.
pub(crate) fn run_chain<'r, T>(
    ctx: Option<&Context>,
    value: &T,
    rules: impl IntoIterator<Item = &'r dyn Rule<T>>,
) -> Result<Outcome, Error>
where
    T: ?Sized + 'r,
{
    for rule in rules {
        if rule.skips_remainder() {
            return Ok(Outcome::Skipped);
        }
        match ctx {
            Some(ctx) => rule.check_with(ctx, value),
            None => rule.check(value),
        }?;
    }
    Ok(Outcome::Completed)
}

/// The single-value pipeline: rule chain, then self-validation.
///
/// The self-validation step is suppressed when the chain was truncated by a
/// skip rule.
pub(crate) fn apply_chain<'r, T>(
    ctx: Option<&Context>,
    value: &T,
    rules: impl IntoIterator<Item = &'r dyn Rule<T>>,
) -> Result<(), Error>
where
    T: Validatable + ?Sized + 'r,
{
    match run_chain(ctx, value, rules)? {
        Outcome::Skipped => Ok(()),
        Outcome::Completed => match ctx {
            Some(ctx) => value.validate_with(ctx),
            None => value.validate(),
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
