//! Smoke test: the prelude exposes everything a typical caller touches.

use ratify::prelude::*;
use regex::Regex;

#[test]
fn prelude_covers_the_public_surface() {
    // Entry points and rules.
    assert!(validate(&"value".to_string(), &[&required(), &min_length(3)]).is_ok());

    // Combinators.
    let conditional = when(true, chain![required()]).else_rules(chain![empty()]);
    assert!(validate(&"x".to_string(), &[&conditional]).is_ok());

    let elements = each(chain![max_length(10)]);
    assert!(validate(&vec!["ok".to_string()], &[&elements]).is_ok());

    // Errors.
    let report: Errors = [("field", validate(&String::new(), &[&required()]).err())]
        .into_iter()
        .collect();
    assert_eq!(report.len(), 1);

    // Context.
    let ctx = Context::builder().with("flag", true).build();
    assert_eq!(ctx.get::<bool>("flag"), Some(&true));
}

#[test]
fn prelude_covers_records_and_maps() {
    struct Entry {
        name: String,
    }

    let result = validate_record(&Entry { name: "ok".to_string() }, [field(
        "Name",
        |e: &Entry| &e.name,
        chain![required()],
    )]);
    assert!(result.is_ok());

    let mut map = std::collections::HashMap::new();
    map.insert("Name".to_string(), "ok".to_string());
    let rules = map_rules(vec![key("Name".to_string(), chain![required()])]);
    assert!(validate(&map, &[&rules]).is_ok());
}

#[test]
fn prelude_covers_classification_and_messages() {
    assert!(String::new().is_blank());
    assert!(!1_u8.is_zero());
    assert_eq!("ab".length(LengthMode::Chars), 2);

    let messages = Messages::default();
    let err = validate(&String::new(), &[&messages.required()]).unwrap_err();
    assert_eq!(err.to_string(), "cannot be blank");

    let pattern = matches(Regex::new("^[a-z]+$").expect("pattern compiles"));
    let err = validate(&"UPPER".to_string(), &[&pattern.message("lowercase only")]).unwrap_err();
    assert_eq!(err.to_string(), "lowercase only");
}
