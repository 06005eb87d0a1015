//! Presence and absence rules
//!
//! These rules interpret the value-state classifier: whether a value is a
//! nil reference, the zero value of its type, or genuinely present. They
//! are shape-agnostic — one `required()` works in chains over strings,
//! numbers, options, and collections alike.
//!
//! | Rule              | Fails when            |
//! |-------------------|-----------------------|
//! | `required`        | nil or zero           |
//! | `not_nil`         | nil                   |
//! | `nil`             | not nil               |
//! | `empty`           | neither nil nor zero  |
//! | `nil_or_not_empty`| non-nil and zero      |

use crate::foundation::{Error, Rule, ValueState, Violation};

macro_rules! state_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $code:literal, $message:literal;
        holds($value:ident) $holds:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<T: ValueState + ?Sized> Rule<T> for $name {
            fn check(&self, $value: &T) -> Result<(), Error> {
                if $holds {
                    Ok(())
                } else {
                    Err(Violation::new($code, $message).into())
                }
            }
        }

        #[doc = concat!("Creates a `", stringify!($name), "` rule.")]
        #[must_use]
        pub const fn $factory() -> $name {
            $name
        }
    };
}

state_rule! {
    /// Fails on a nil or zero value: `None`, the empty string, zero
    /// numbers, `false`, empty collections.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert!(validate(&"x".to_string(), &[&required()]).is_ok());
    /// assert!(validate(&String::new(), &[&required()]).is_err());
    /// ```
    Required, required, "required", "cannot be blank";
    holds(value) { !value.is_blank() }
}

state_rule! {
    /// Fails only on a nil reference. A zero value that is present — an
    /// empty string inside `Some` — passes; non-nilable values always pass.
    NotNil, not_nil, "not_nil", "is required";
    holds(value) { !value.is_nil() }
}

state_rule! {
    /// Fails unless the value is a nil reference.
    Nil, nil, "nil", "must be blank";
    holds(value) { value.is_nil() }
}

state_rule! {
    /// Fails unless the value is nil or zero.
    Empty, empty, "empty", "must be blank";
    holds(value) { value.is_blank() }
}

state_rule! {
    /// Fails only when the value is present but zero.
    ///
    /// The usual reading: an optional that, when supplied, must not be
    /// blank.
    NilOrNotEmpty, nil_or_not_empty, "nil_or_not_empty", "cannot be blank";
    holds(value) { value.is_nil() || !value.is_zero() }
}

// ============================================================================
// TESTS
// ============================================================================
