//! Length rule
//!
//! Checks the length of strings and collections against inclusive bounds.
//! Strings count Unicode scalar values by default; switch to byte counting
//! with [`Length::bytes`] when the input is known ASCII and speed matters.
//!
//! Like the other leaf rules, `length` passes on an absent (nil-or-zero)
//! value — pair it with `required()` to also demand presence.

use crate::foundation::{Error, HasLength, LengthMode, Rule, ValueState, Violation};

// ============================================================================
// LENGTH
// ============================================================================

/// Validates that a value's length falls within inclusive bounds.
///
/// The failure message depends on which bounds are set: exactly / between /
/// no less than / no more than.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(validate(&"hello".to_string(), &[&length(5, 50)]).is_ok());
/// assert!(validate(&"hi".to_string(), &[&length(5, 50)]).is_err());
/// assert!(validate(&String::new(), &[&length(5, 50)]).is_ok()); // absent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
    mode: LengthMode,
}

impl Length {
    /// Creates a length rule with both bounds set.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            mode: LengthMode::Chars,
        }
    }

    /// Counts bytes instead of Unicode scalar values.
    #[must_use = "builder methods must be chained or built"]
    pub const fn bytes(mut self) -> Self {
        self.mode = LengthMode::Bytes;
        self
    }

    fn violation(&self) -> Violation {
        let violation = match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => Violation::new(
                "length_invalid",
                format!("the length must be exactly {min}"),
            ),
            (Some(min), Some(max)) => Violation::new(
                "length_out_of_range",
                format!("the length must be between {min} and {max}"),
            ),
            (Some(min), None) => Violation::new(
                "length_too_short",
                format!("the length must be no less than {min}"),
            ),
            (None, Some(max)) => Violation::new(
                "length_too_long",
                format!("the length must be no more than {max}"),
            ),
            (None, None) => Violation::new("length_invalid", "the length is invalid"),
        };
        let violation = match self.min {
            Some(min) => violation.with_param("min", min.to_string()),
            None => violation,
        };
        match self.max {
            Some(max) => violation.with_param("max", max.to_string()),
            None => violation,
        }
    }
}

impl<T> Rule<T> for Length
where
    T: HasLength + ValueState + ?Sized,
{
    fn check(&self, value: &T) -> Result<(), Error> {
        if value.is_blank() {
            return Ok(());
        }
        let len = value.length(self.mode);
        let ok = self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max);
        if ok {
            Ok(())
        } else {
            Err(self.violation().into())
        }
    }
}

/// Creates a length rule with inclusive `min` and `max` bounds.
#[must_use]
pub const fn length(min: usize, max: usize) -> Length {
    Length::new(min, max)
}

/// Creates a length rule with only a lower bound.
#[must_use]
pub const fn min_length(min: usize) -> Length {
    Length {
        min: Some(min),
        max: None,
        mode: LengthMode::Chars,
    }
}

/// Creates a length rule with only an upper bound.
#[must_use]
pub const fn max_length(max: usize) -> Length {
    Length {
        min: None,
        max: Some(max),
        mode: LengthMode::Chars,
    }
}

// ============================================================================
// TESTS
// ============================================================================
