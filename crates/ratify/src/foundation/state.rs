//! Value-state classification
//!
//! The state rules (`required`, `nil`, `empty`, ...) and the absent-value
//! convention of the leaf rules all hinge on two questions about a value:
//! is it a *nil* reference, and is it the *zero* value of its type. The
//! [`ValueState`] capability answers both. Wrapper types (`Option`, `Box`,
//! `Arc`, `Cow`) classify by extracting the underlying value and recursing,
//! so a `Some("")` counts as present-but-zero while `None` counts as nil.
//!
//! [`HasLength`] is the companion capability for the length rule: strings
//! measure in bytes or Unicode scalar values (see [`LengthMode`]),
//! collections count elements.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// VALUE STATE
// ============================================================================

/// Classifies a value as nil, zero, or present.
///
/// `is_nil` is true only for nil references (`None` and wrappers around
/// one); non-nilable values are never nil. `is_zero` is true for the zero
/// value of the type: the empty string, zero numbers, `false`, empty
/// collections, and nil references.
pub trait ValueState {
    /// True for a nil reference.
    fn is_nil(&self) -> bool {
        false
    }

    /// True for the zero value of this type.
    fn is_zero(&self) -> bool;

    /// True when nil or zero — the "blank" test used by `required`.
    fn is_blank(&self) -> bool {
        self.is_nil() || self.is_zero()
    }
}

macro_rules! zero_integers {
    ($($ty:ty),+ $(,)?) => {
        $(impl ValueState for $ty {
            fn is_zero(&self) -> bool {
                *self == 0
            }
        })+
    };
}

zero_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! zero_floats {
    ($($ty:ty),+ $(,)?) => {
        $(impl ValueState for $ty {
            #[allow(clippy::float_cmp)]
            fn is_zero(&self) -> bool {
                *self == 0.0
            }
        })+
    };
}

zero_floats!(f32, f64);

impl ValueState for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl ValueState for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl ValueState for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ValueState for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ValueState for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ValueState for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> ValueState for HashMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> ValueState for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ValueState for HashSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ValueState for BTreeSet<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ValueState> ValueState for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }

    fn is_zero(&self) -> bool {
        self.as_ref().is_none_or(ValueState::is_zero)
    }
}

// Extraction wrappers classify the value they expose.

impl<T: ValueState + ?Sized> ValueState for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

macro_rules! delegate_wrapper {
    ($($wrapper:ident),+ $(,)?) => {
        $(impl<T: ValueState + ?Sized> ValueState for $wrapper<T> {
            fn is_nil(&self) -> bool {
                (**self).is_nil()
            }

            fn is_zero(&self) -> bool {
                (**self).is_zero()
            }
        })+
    };
}

delegate_wrapper!(Box, Rc, Arc);

impl<T> ValueState for Cow<'_, T>
where
    T: ValueState + ToOwned + ?Sized,
{
    fn is_nil(&self) -> bool {
        self.as_ref().is_nil()
    }

    fn is_zero(&self) -> bool {
        self.as_ref().is_zero()
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

/// A value with a measurable length.
///
/// The mode only affects string types; collections count elements.
pub trait HasLength {
    /// Measures the value's length in the given mode.
    fn length(&self, mode: LengthMode) -> usize;
}

impl HasLength for str {
    fn length(&self, mode: LengthMode) -> usize {
        match mode {
            LengthMode::Bytes => self.len(),
            LengthMode::Chars => self.chars().count(),
        }
    }
}

impl HasLength for String {
    fn length(&self, mode: LengthMode) -> usize {
        self.as_str().length(mode)
    }
}

impl<T> HasLength for [T] {
    fn length(&self, _mode: LengthMode) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self, _mode: LengthMode) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for HashMap<K, V> {
    fn length(&self, _mode: LengthMode) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self, _mode: LengthMode) -> usize {
        self.len()
    }
}

impl<T: HasLength> HasLength for Option<T> {
    fn length(&self, mode: LengthMode) -> usize {
        self.as_ref().map_or(0, |value| value.length(mode))
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn length(&self, mode: LengthMode) -> usize {
        (**self).length(mode)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_classify_by_zero_value() {
        assert!("".is_zero());
        assert!(!"x".is_zero());
        assert!(0_i64.is_zero());
        assert!(!1_i64.is_zero());
        assert!(!true.is_zero());
        assert!(false.is_zero());
        assert!(!"".is_nil());
    }

    #[test]
    fn collections_classify_by_emptiness() {
        assert!(Vec::<u8>::new().is_zero());
        assert!(!vec![1].is_zero());
        assert!(HashMap::<String, u8>::new().is_zero());
    }

    #[test]
    fn option_is_the_nil_reference() {
        let none: Option<String> = None;
        assert!(none.is_nil());
        assert!(none.is_zero());

        let present = Some("x".to_string());
        assert!(!present.is_nil());
        assert!(!present.is_zero());

        // Present but zero after extraction.
        let blank = Some(String::new());
        assert!(!blank.is_nil());
        assert!(blank.is_zero());
    }

    #[test]
    fn wrappers_classify_the_extracted_value() {
        assert!(Box::new(String::new()).is_zero());
        assert!(Arc::new(0_u32).is_zero());
        assert!(!Rc::new(5_u32).is_zero());
        assert!(Cow::Borrowed("").is_zero());
        assert!(Box::new(None::<String>).is_nil());
    }

    #[test]
    fn length_modes_differ_on_multibyte_text() {
        let s = "h\u{e9}llo";
        assert_eq!(s.length(LengthMode::Chars), 5);
        assert_eq!(s.length(LengthMode::Bytes), 6);
        assert_eq!(vec![1, 2, 3].length(LengthMode::Chars), 3);
        assert_eq!(None::<String>.length(LengthMode::Chars), 0);
    }
}
