//! Context propagation through chains and recursive sub-validation.

use pretty_assertions::assert_eq;
use ratify::prelude::*;

fn expected_value_rule() -> WithContext<impl Fn(&Context, &String) -> Result<(), Error>> {
    with_context(|ctx: &Context, value: &String| match ctx.get::<String>("expected") {
        Some(expected) if expected == value => Ok(()),
        _ => Err(Violation::custom("unexpected value").into()),
    })
}

#[test]
fn context_aware_rule_compares_against_context_data() {
    let ctx = Context::builder()
        .with("expected", "good sample".to_string())
        .build();

    let rule = expected_value_rule();

    let err = validate_with(&ctx, &"bad sample".to_string(), &[&rule]).unwrap_err();
    assert_eq!(err.to_string(), "unexpected value");

    assert!(validate_with(&ctx, &"good sample".to_string(), &[&rule]).is_ok());
}

#[test]
fn context_reaches_record_fields() {
    struct Form {
        token: String,
    }

    let ctx = Context::builder()
        .with("expected", "tok-123".to_string())
        .build();

    let run = |ctx: &Context, token: &str| {
        validate_record_with(ctx, &Form { token: token.to_string() }, [field(
            "Token",
            |f: &Form| &f.token,
            chain![required(), expected_value_rule()],
        )])
    };

    assert!(run(&ctx, "tok-123").is_ok());

    let err = run(&ctx, "tok-999").unwrap_err();
    assert_eq!(err.to_string(), "Token: unexpected value.");
}

#[test]
fn context_reaches_collection_elements() {
    let ctx = Context::builder()
        .with("expected", "ok".to_string())
        .build();

    let values = vec!["ok".to_string(), "bad".to_string(), "ok".to_string()];
    let rule = each(chain![expected_value_rule()]);

    let err = validate_with(&ctx, &values, &[&rule]).unwrap_err();
    assert_eq!(err.to_string(), "1: unexpected value.");
}

#[test]
fn context_free_path_still_runs_context_rules() {
    // Without a propagated context the rule sees an empty one.
    let rule = expected_value_rule();
    let err = validate(&"anything".to_string(), &[&rule]).unwrap_err();
    assert_eq!(err.to_string(), "unexpected value");
}

#[test]
fn parent_chained_contexts_resolve_through_the_chain() {
    let mut parent = Context::new();
    parent.insert("expected", "inherited".to_string());

    let child = Context::with_parent(std::sync::Arc::new(parent));

    let rule = expected_value_rule();
    assert!(validate_with(&child, &"inherited".to_string(), &[&rule]).is_ok());
}
