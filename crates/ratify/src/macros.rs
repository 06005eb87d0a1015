//! Macros for building rule chains with minimal boilerplate.

// ============================================================================
// CHAIN MACRO
// ============================================================================

/// Builds a boxed rule chain (`Vec<Box<dyn Rule<T>>>`) for descriptor
/// construction.
///
/// Order is significant: the chain evaluates left to right and stops at the
/// first failure. `chain![]` is the bare chain — no rules, self-validation
/// only.
///
/// # Examples
///
/// ```rust,ignore
/// field("Street", |a: &Address| &a.street, chain![required(), length(5, 50)])
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        ::std::vec::Vec::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($rule) as ::std::boxed::Box<dyn $crate::foundation::Rule<_>>),+
        ]
    };
}

// ============================================================================
// TESTS
// ============================================================================
