//! Basic usage example for ratify

use ratify::prelude::*;
use regex::Regex;

struct Address {
    street: String,
    city: String,
    state: String,
    zip: String,
}

impl Validatable for Address {
    fn validate(&self) -> Result<(), Error> {
        validate_record(self, [
            field("Street", |a: &Address| &a.street, chain![required(), length(5, 50)]),
            field("City", |a: &Address| &a.city, chain![required(), length(5, 50)]),
            field(
                "State",
                |a: &Address| &a.state,
                chain![
                    required(),
                    matches(Regex::new("^[A-Z]{2}$").expect("pattern compiles"))
                ],
            ),
            field(
                "Zip",
                |a: &Address| &a.zip,
                chain![
                    required(),
                    matches(Regex::new("^[0-9]{5}$").expect("pattern compiles"))
                ],
            ),
        ])
    }
}

fn main() {
    // A single value against a chain.
    let username = "al".to_string();
    match validate(&username, &[&required(), &length(3, 20)]) {
        Ok(()) => println!("username ok"),
        Err(e) => println!("username: {e}"),
    }

    // A record against its own rules.
    let address = Address {
        street: "123 Main Street".to_string(),
        city: "Unknown".to_string(),
        state: "Virginia".to_string(),
        zip: "12345".to_string(),
    };
    match address.validate() {
        Ok(()) => println!("address ok"),
        Err(e) => println!("{e}"),
    }

    // A list of records, failures keyed by position.
    let addresses = vec![
        Address {
            street: String::new(),
            city: "Vienna".to_string(),
            state: "VA".to_string(),
            zip: "12345".to_string(),
        },
        address,
    ];
    match validate(&addresses, &[]) {
        Ok(()) => println!("all addresses ok"),
        Err(e) => println!("{e}"),
    }

    // The same report, serialized.
    if let Err(e) = validate(&addresses, &[]) {
        println!("{}", serde_json::to_string_pretty(&e).expect("serializes"));
    }
}
