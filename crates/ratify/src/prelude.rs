//! Prelude module for convenient imports.
//!
//! A single `use ratify::prelude::*;` brings in the entry points, the
//! built-in rules, the combinators, and the core traits.
//!
//! # Examples
//!
//! ```rust,ignore
//! use ratify::prelude::*;
//!
//! let err = validate(&address.state, &[&required(), &matches(state_pattern())]);
//! ```

// ============================================================================
// FOUNDATION: entry points, traits, errors, context
// ============================================================================

pub use crate::foundation::{
    Context, ContextBuilder, Error, Errors, HasLength, InternalError, LengthMode, Rule, RuleExt,
    Validatable, ValueState, Violation, validate, validate_with,
};

// ============================================================================
// RULES: built-in leaf and state rules
// ============================================================================

pub use crate::rules::{
    Empty, In, Length, Match, Max, Messages, Min, Nil, NilOrNotEmpty, NotIn, NotNil, Required,
    Skip, empty, length, matches, max, max_length, min, min_length, nil, nil_or_not_empty,
    none_of, not_nil, one_of, required, skip, skip_when,
};

// ============================================================================
// COMBINATORS: structure over chains
// ============================================================================

pub use crate::combinators::{
    By, Each, Field, KeyRule, MapRules, RecordRules, When, WithContext, WithMessage, by, each,
    field, key, map_rules, validate_record, validate_record_with, when, with_context,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::chain;
