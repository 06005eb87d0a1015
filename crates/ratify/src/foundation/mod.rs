//! Core validation types and traits
//!
//! The foundation holds the pieces everything else is built from:
//!
//! - **Traits**: [`Rule`], [`RuleExt`], [`Validatable`]
//! - **Errors**: [`Violation`], [`Error`], [`Errors`], [`InternalError`]
//! - **Context**: [`Context`], [`ContextBuilder`]
//! - **Classification**: [`ValueState`], [`HasLength`]
//!
//! and the two entry points that run a rule chain against a single value.
//!
//! # Architecture
//!
//! A chain is an ordered slice of rules over one value. Evaluation order is
//! chain order; the first failure stops the chain. On success the value's
//! own [`Validatable`] impl runs, which is how validation recurses through
//! records, collections, and maps without a schema: each shape's impl walks
//! its addressable sub-parts and aggregates per-part failures into an
//! [`Errors`] tree with a stable rendering.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ratify::prelude::*;
//!
//! let err = validate(&"example".to_string(), &[&required(), &length(5, 100)]);
//! assert!(err.is_ok());
//! ```

pub mod context;
pub mod error;
pub mod state;
pub mod traits;

pub use context::{Context, ContextBuilder};
pub use error::{Error, Errors, InternalError, Violation};
pub use state::{HasLength, LengthMode, ValueState};
pub use traits::{Rule, RuleExt, Validatable};

pub(crate) use traits::{apply_chain, run_chain};

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates a value against an ordered rule chain.
///
/// Rules run in chain order and the first failure is returned immediately;
/// subsequent rules do not run. If the chain succeeds and the value
/// implements [`Validatable`], its own validation runs and its result is
/// surfaced as the value's result — unless an active skip rule truncated
/// the chain first.
///
/// # Examples
///
/// ```rust,ignore
/// use ratify::prelude::*;
///
/// let data = "example".to_string();
/// let err = validate(&data, &[&required(), &length(5, 100)]);
/// assert!(err.is_ok());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate<T>(value: &T, rules: &[&dyn Rule<T>]) -> Result<(), Error>
where
    T: Validatable + ?Sized,
{
    apply_chain(None, value, rules.iter().copied())
}

/// Validates a value with a propagated context.
///
/// Identical to [`validate`], except every rule is evaluated on its
/// context-aware path and the context flows unchanged into every recursive
/// sub-validation. The engine never mutates the context.
#[must_use = "validation result must be checked"]
pub fn validate_with<T>(ctx: &Context, value: &T, rules: &[&dyn Rule<T>]) -> Result<(), Error>
where
    T: Validatable + ?Sized,
{
    apply_chain(Some(ctx), value, rules.iter().copied())
}

// ============================================================================
// TESTS
// ============================================================================
