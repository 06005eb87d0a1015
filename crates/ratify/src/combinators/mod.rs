//! Combinators over rules and rule chains
//!
//! Where `rules` holds leaf checks, this module holds the structure:
//! conditional execution ([`when`]), element-wise application ([`each`]),
//! record field validation ([`field`], [`RecordRules`]), map key validation
//! ([`map_rules`], [`key`]), predicate adapters ([`by`], [`with_context`]),
//! and message replacement ([`WithMessage`]).

pub mod by;
pub mod each;
pub mod map;
pub mod message;
pub mod record;
pub mod when;

pub use by::{By, WithContext, by, with_context};
pub use each::{Each, each};
pub use map::{KeyRule, MapRules, key, map_rules};
pub use message::WithMessage;
pub use record::{Field, RecordRules, field, validate_record, validate_record_with};
pub use when::{When, when};
