//! End-to-end record validation scenarios.

use pretty_assertions::assert_eq;
use ratify::prelude::*;
use regex::Regex;

struct Address {
    street: String,
    city: String,
    state: String,
    zip: String,
}

struct Customer {
    name: String,
    gender: Option<String>,
    email: String,
    address: Address,
}

fn state_pattern() -> Match {
    matches(Regex::new("^[A-Z]{2}$").expect("pattern compiles"))
}

fn zip_pattern() -> Match {
    matches(Regex::new("^[0-9]{5}$").expect("pattern compiles"))
}

fn email_rule() -> WithMessage<Match> {
    matches(Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("pattern compiles"))
        .message("must be a valid email address")
}

impl Validatable for Address {
    fn validate(&self) -> Result<(), Error> {
        validate_record(self, [
            field("Street", |a: &Address| &a.street, chain![required(), length(5, 50)]),
            field("City", |a: &Address| &a.city, chain![required(), length(5, 50)]),
            field("State", |a: &Address| &a.state, chain![required(), state_pattern()]),
            field("Zip", |a: &Address| &a.zip, chain![required(), zip_pattern()]),
        ])
    }
}

impl Validatable for Customer {
    fn validate(&self) -> Result<(), Error> {
        validate_record(self, [
            field("Name", |c: &Customer| &c.name, chain![required(), length(5, 20)]),
            field("Gender", |c: &Customer| &c.gender, chain![one_of([
                "Female".to_string(),
                "Male".to_string(),
            ])]),
            field("Email", |c: &Customer| &c.email, chain![required(), email_rule()]),
            field("Address", |c: &Customer| &c.address, chain![]),
        ])
    }
}

fn sample_customer() -> Customer {
    Customer {
        name: "Qiang Xue".to_string(),
        gender: None,
        email: "q".to_string(),
        address: Address {
            street: "123 Main Street".to_string(),
            city: "Unknown".to_string(),
            state: "Virginia".to_string(),
            zip: "12345".to_string(),
        },
    }
}

#[test]
fn only_the_pattern_rule_fails_on_a_present_state() {
    let address = Address {
        street: "123 Main Street".to_string(),
        city: "Unknown".to_string(),
        state: "Virginia".to_string(),
        zip: "12345".to_string(),
    };

    let err = address.validate().unwrap_err();
    assert_eq!(err.to_string(), "State: must be in a valid format.");
}

#[test]
fn nested_record_failures_parenthesize() {
    let err = sample_customer().validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Address: (State: must be in a valid format.); Email: must be a valid email address."
    );
}

#[test]
fn optional_gender_passes_when_absent_and_validates_when_present() {
    let mut customer = sample_customer();
    customer.email = "q@example.com".to_string();
    customer.address.state = "VA".to_string();
    assert!(customer.validate().is_ok());

    customer.gender = Some("Male".to_string());
    assert!(customer.validate().is_ok());

    customer.gender = Some("other".to_string());
    let err = customer.validate().unwrap_err();
    assert_eq!(err.to_string(), "Gender: must be a valid value.");
}

#[test]
fn record_validation_is_idempotent() {
    let customer = sample_customer();
    let first = customer.validate().unwrap_err().to_string();
    let second = customer.validate().unwrap_err().to_string();
    assert_eq!(first, second);
}

#[test]
fn single_value_chain_reports_first_failure() {
    let data = "example".to_string();
    let url = matches(Regex::new("^https?://").expect("pattern compiles"))
        .message("must be a valid URL");

    let err = validate(&data, &[&required(), &length(5, 100), &url]).unwrap_err();
    assert_eq!(err.to_string(), "must be a valid URL");
}

#[test]
fn list_of_records_is_keyed_by_failing_positions_only() {
    let addresses = vec![
        Address {
            street: String::new(),
            city: String::new(),
            state: "MD".to_string(),
            zip: "12345".to_string(),
        },
        Address {
            street: "123 Main St".to_string(),
            city: "Vienna".to_string(),
            state: "VA".to_string(),
            zip: "12345".to_string(),
        },
        Address {
            street: String::new(),
            city: "Unknown".to_string(),
            state: "NC".to_string(),
            zip: "123".to_string(),
        },
    ];

    let err = validate(&addresses, &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "0: (City: cannot be blank; Street: cannot be blank.); \
         2: (Street: cannot be blank; Zip: must be in a valid format.)."
    );
}

#[test]
fn hand_assembled_errors_filter_to_a_single_report() {
    let customer = sample_customer();

    let report: Errors = [
        (
            "name",
            validate(&customer.name, &[&required(), &length(5, 20)]).err(),
        ),
        (
            "email",
            validate(&customer.email, &[&required(), &email_rule()]).err(),
        ),
        (
            "zip",
            validate(&customer.address.zip, &[&required(), &zip_pattern()]).err(),
        ),
    ]
    .into_iter()
    .collect();

    let err = report.filter().expect("email fails");
    assert_eq!(err.to_string(), "email: must be a valid email address.");
}

#[test]
fn embedded_fields_resolve_to_the_outer_declaration() {
    struct Employee {
        name: String,
    }

    struct Manager {
        employee: Employee,
        name: String,
        level: u32,
    }

    let manager = Manager {
        employee: Employee {
            name: String::new(),
        },
        name: "present".to_string(),
        level: 0,
    };

    let rules: RecordRules<Manager> = RecordRules::new()
        .embed(
            |m: &Manager| &m.employee,
            RecordRules::new().field("Name", |e: &Employee| &e.name, chain![required()]),
        )
        .field("Name", |m: &Manager| &m.name, chain![required()])
        .field("Level", |m: &Manager| &m.level, chain![required()]);

    // The outer Name passes, so the inner (deeper) declaration of the same
    // name does not surface; only Level fails.
    let err = rules.validate(&manager).unwrap_err();
    assert_eq!(err.to_string(), "Level: cannot be blank.");
}
