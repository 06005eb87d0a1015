//! Property-based tests for the engine laws.

use proptest::prelude::*;
use ratify::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn length_idempotent(s in ".*") {
        let value = s;
        let rule = length(3, 10);
        let r1 = validate(&value, &[&rule]);
        let r2 = validate(&value, &[&rule]);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn formatted_output_is_byte_identical_across_runs(s in ".{0,20}") {
        let value = s;
        let rules: [&dyn Rule<String>; 2] = [&required(), &length(5, 10)];
        let first = validate(&value, &rules).err().map(|e| e.to_string());
        let second = validate(&value, &rules).err().map(|e| e.to_string());
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// CHAIN LAW: the first failing rule's failure surfaces
// ============================================================================

proptest! {
    #[test]
    fn first_failure_wins(s in ".{0,20}") {
        let value = s;
        let result = validate(&value, &[&required(), &length(5, 10)]);

        if value.is_empty() {
            let err = result.unwrap_err();
            prop_assert_eq!(err.code(), Some("required"));
        } else {
            let within = (5..=10).contains(&value.chars().count());
            prop_assert_eq!(result.is_ok(), within);
            if !within {
                let err = result.unwrap_err();
                prop_assert_eq!(err.code(), Some("length_out_of_range"));
            }
        }
    }

    #[test]
    fn skip_anywhere_makes_the_chain_pass(s in ".{0,20}") {
        let value = s;
        let result = validate(&value, &[&skip(), &required(), &length(100, 200)]);
        prop_assert!(result.is_ok());
    }
}

// ============================================================================
// EACH LAWS
// ============================================================================

proptest! {
    #[test]
    fn each_on_empty_never_fails(min in 0_usize..20, max in 20_usize..40) {
        let values: Vec<String> = Vec::new();
        let rule = each(chain![required(), length(min, max)]);
        prop_assert!(validate(&values, &[&rule]).is_ok());
    }

    #[test]
    fn each_keys_are_failing_positions(values in prop::collection::vec(".{0,8}", 0..8)) {
        let rule = each(chain![required()]);
        match validate(&values, &[&rule]) {
            Ok(()) => {
                prop_assert!(values.iter().all(|v| !v.is_empty()));
            }
            Err(Error::Map(report)) => {
                for (index, value) in values.iter().enumerate() {
                    prop_assert_eq!(report.get(&index.to_string()).is_some(), value.is_empty());
                }
            }
            Err(other) => prop_assert!(false, "unexpected error shape: {other}"),
        }
    }
}

// ============================================================================
// FILTER LAW
// ============================================================================

proptest! {
    #[test]
    fn filter_none_iff_no_failures(blanks in prop::collection::vec(any::<bool>(), 0..8)) {
        let report: Errors = blanks
            .iter()
            .enumerate()
            .map(|(i, blank)| {
                let value = if *blank { String::new() } else { "present".to_string() };
                (i.to_string(), validate(&value, &[&required()]).err())
            })
            .collect();

        let any_blank = blanks.iter().any(|b| *b);
        prop_assert_eq!(report.filter().is_some(), any_blank);
    }
}
