//! # ratify
//!
//! Composable value validation with deterministic error trees.
//!
//! Given a value — scalar, record, map, or collection — and an ordered
//! chain of rules, `ratify` decides whether the value is valid and, when it
//! is not, reports exactly which sub-parts failed and why, in a stable
//! textual and serialized form.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use ratify::prelude::*;
//!
//! struct Address {
//!     street: String,
//!     state: String,
//! }
//!
//! impl Validatable for Address {
//!     fn validate(&self) -> Result<(), Error> {
//!         validate_record(self, [
//!             field("Street", |a: &Address| &a.street, chain![required(), length(5, 50)]),
//!             field("State", |a: &Address| &a.state, chain![required(), matches(state_re())]),
//!         ])
//!     }
//! }
//!
//! // "State: must be in a valid format."
//! let report = address.validate().unwrap_err().to_string();
//! ```
//!
//! ## Shape dispatch
//!
//! [`validate`](foundation::validate) runs a chain against one value and
//! then invokes the value's own [`Validatable`](foundation::Validatable)
//! impl. Collections and maps carry recursive impls keyed by position and
//! key; record types implement it with [`validate_record`](combinators::validate_record).
//! There is no schema and no reflection — dispatch is the trait impl the
//! value's shape already has.
//!
//! ## Built-in rules
//!
//! - **State**: [`required`](rules::required), [`not_nil`](rules::not_nil),
//!   [`nil`](rules::nil), [`empty`](rules::empty),
//!   [`nil_or_not_empty`](rules::nil_or_not_empty), [`skip`](rules::skip)
//! - **Leaf**: [`length`](rules::length), [`matches`](rules::matches),
//!   [`one_of`](rules::one_of), [`min`](rules::min), [`max`](rules::max)
//! - **Structure**: [`each`](combinators::each), [`when`](combinators::when),
//!   [`map_rules`](combinators::map_rules), [`by`](combinators::by)

// Error (~150 bytes with its inline violation params) is the fundamental
// result type of every rule — boxing it would add indirection to every
// validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
