//! WHEN combinator - conditional rule chains
//!
//! [`When`] runs its sub-chain only when a condition held at construction
//! time. The condition is a plain `bool` — evaluated once, eagerly, when
//! the chain is built, never per rule. An attached else-chain runs when the
//! condition was false.
//!
//! # Examples
//!
//! ```rust,ignore
//! // Shipping address only matters for physical goods.
//! validate_record(&order, [
//!     field("ShippingAddress", |o: &Order| &o.shipping_address, chain![
//!         when(order.is_physical, chain![required()])
//!             .else_rules(chain![empty()]),
//!     ]),
//! ])
//! ```

use std::fmt;

use crate::foundation::{Context, Error, Rule, run_chain};

// ============================================================================
// WHEN
// ============================================================================

/// Runs a sub-chain only when the construction-time condition was true.
///
/// The sub-chain keeps chain semantics: rules run in order, the first
/// failure wins, and an active skip rule truncates the branch.
pub struct When<T: ?Sized + 'static> {
    condition: bool,
    rules: Vec<Box<dyn Rule<T>>>,
    else_rules: Vec<Box<dyn Rule<T>>>,
}

impl<T: ?Sized + 'static> When<T> {
    /// Creates a conditional chain.
    #[must_use]
    pub fn new(condition: bool, rules: Vec<Box<dyn Rule<T>>>) -> Self {
        Self {
            condition,
            rules,
            else_rules: Vec::new(),
        }
    }

    /// Supplies the chain to run when the condition was false.
    #[must_use = "builder methods must be chained or built"]
    pub fn else_rules(mut self, rules: Vec<Box<dyn Rule<T>>>) -> Self {
        self.else_rules = rules;
        self
    }

    /// The condition captured at construction.
    #[must_use]
    pub fn condition(&self) -> bool {
        self.condition
    }

    fn run(&self, ctx: Option<&Context>, value: &T) -> Result<(), Error> {
        let branch = if self.condition {
            &self.rules
        } else {
            &self.else_rules
        };
        run_chain(ctx, value, branch.iter().map(|rule| &**rule)).map(|_| ())
    }
}

impl<T: ?Sized + 'static> Rule<T> for When<T> {
    fn check(&self, value: &T) -> Result<(), Error> {
        self.run(None, value)
    }

    fn check_with(&self, ctx: &Context, value: &T) -> Result<(), Error> {
        self.run(Some(ctx), value)
    }
}

impl<T: ?Sized + 'static> fmt::Debug for When<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("condition", &self.condition)
            .field("rules", &self.rules.len())
            .field("else_rules", &self.else_rules.len())
            .finish()
    }
}

/// Creates a conditional chain.
///
/// # Examples
///
/// ```rust,ignore
/// let rule = when(country == "US", chain![matches(zip_pattern())]);
/// ```
#[must_use]
pub fn when<T: ?Sized + 'static>(condition: bool, rules: Vec<Box<dyn Rule<T>>>) -> When<T> {
    When::new(condition, rules)
}

// ============================================================================
// TESTS
// ============================================================================
