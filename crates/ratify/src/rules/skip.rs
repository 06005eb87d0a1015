//! The skip rule - chain truncation
//!
//! An active [`Skip`] ends its chain successfully the moment it is
//! encountered: no later rule runs, and the value's self-validation does
//! not run either. Rules positioned before it have already executed.
//! Typically used conditionally, to exempt a value from the rest of its
//! chain in some application state:
//!
//! ```rust,ignore
//! validate_record(&user, [
//!     field("Email", |u: &User| &u.email, chain![
//!         skip_when(user.is_anonymous),
//!         required(),
//!     ]),
//! ])
//! ```

use crate::foundation::{Error, Rule};

/// Truncates the remainder of a rule chain when active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Skip {
    active: bool,
}

impl Skip {
    /// True if this skip will truncate its chain.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl<T: ?Sized> Rule<T> for Skip {
    fn check(&self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn skips_remainder(&self) -> bool {
        self.active
    }
}

/// Creates an unconditional skip.
#[must_use]
pub const fn skip() -> Skip {
    Skip { active: true }
}

/// Creates a skip that only truncates when `condition` is true.
///
/// The condition is evaluated once, at construction. An inactive skip is
/// inert: the chain continues through it.
#[must_use]
pub const fn skip_when(condition: bool) -> Skip {
    Skip { active: condition }
}

// ============================================================================
// TESTS
// ============================================================================
