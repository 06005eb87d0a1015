//! Built-in rules
//!
//! The generic rules the engine ships with:
//!
//! - **State**: [`required`], [`not_nil`], [`nil`], [`empty`],
//!   [`nil_or_not_empty`] — presence and absence over the value-state
//!   classifier.
//! - **Skip**: [`skip`], [`skip_when`] — chain truncation.
//! - **Length**: [`length`], [`min_length`], [`max_length`].
//! - **Pattern**: [`matches`].
//! - **Membership**: [`one_of`], [`none_of`].
//! - **Threshold**: [`min`], [`max`].
//!
//! Format predicates (email, URL, UUID, ...) are deliberately not here;
//! they are ordinary [`Rule`](crate::foundation::Rule) implementations an
//! application brings along, often via [`by`](crate::combinators::by).
//!
//! Every leaf rule except the state family passes on an absent
//! (nil-or-zero) value. Non-blankness is always spelled explicitly:
//!
//! ```rust,ignore
//! chain![required(), length(5, 50)]
//! ```

pub mod length;
pub mod membership;
pub mod pattern;
pub mod skip;
pub mod state;
pub mod threshold;

pub use length::{Length, length, max_length, min_length};
pub use membership::{In, NotIn, none_of, one_of};
pub use pattern::{Match, matches};
pub use skip::{Skip, skip, skip_when};
pub use state::{
    Empty, Nil, NilOrNotEmpty, NotNil, Required, empty, nil, nil_or_not_empty, not_nil, required,
};
pub use threshold::{Max, Min, max, min};

use std::borrow::Cow;

use crate::combinators::WithMessage;
use crate::foundation::RuleExt;

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// Default message texts for the state rules, as startup configuration.
///
/// An application that wants house wording builds one catalog and mints its
/// rules from it, instead of mutating process-global defaults:
///
/// ```rust,ignore
/// let messages = Messages {
///     required: "is mandatory".into(),
///     ..Messages::default()
/// };
///
/// validate(&input.name, &[&messages.required()])
/// ```
///
/// Per-instance overrides via [`RuleExt::message`] take precedence, and
/// neither mechanism ever changes a failure code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Text for [`required`] failures.
    pub required: Cow<'static, str>,
    /// Text for [`not_nil`] failures.
    pub not_nil: Cow<'static, str>,
    /// Text for [`nil`] failures.
    pub nil: Cow<'static, str>,
    /// Text for [`empty`] failures.
    pub empty: Cow<'static, str>,
    /// Text for [`nil_or_not_empty`] failures.
    pub nil_or_not_empty: Cow<'static, str>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: Cow::Borrowed("cannot be blank"),
            not_nil: Cow::Borrowed("is required"),
            nil: Cow::Borrowed("must be blank"),
            empty: Cow::Borrowed("must be blank"),
            nil_or_not_empty: Cow::Borrowed("cannot be blank"),
        }
    }
}

impl Messages {
    /// A [`required`] rule worded by this catalog.
    #[must_use]
    pub fn required(&self) -> WithMessage<Required> {
        required().message(self.required.clone())
    }

    /// A [`not_nil`] rule worded by this catalog.
    #[must_use]
    pub fn not_nil(&self) -> WithMessage<NotNil> {
        not_nil().message(self.not_nil.clone())
    }

    /// A [`nil`] rule worded by this catalog.
    #[must_use]
    pub fn nil(&self) -> WithMessage<Nil> {
        nil().message(self.nil.clone())
    }

    /// An [`empty`] rule worded by this catalog.
    #[must_use]
    pub fn empty(&self) -> WithMessage<Empty> {
        empty().message(self.empty.clone())
    }

    /// A [`nil_or_not_empty`] rule worded by this catalog.
    #[must_use]
    pub fn nil_or_not_empty(&self) -> WithMessage<NilOrNotEmpty> {
        nil_or_not_empty().message(self.nil_or_not_empty.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================
