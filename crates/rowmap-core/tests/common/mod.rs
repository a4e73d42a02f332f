//! Shared fixtures for rowmap-core integration tests.

#![allow(dead_code)]

use std::sync::Once;

use rowmap_core::impl_record;
use rowmap_model::{Decimal, Table, Value};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: i32,
    pub rewards_points: Option<Decimal>,
}

impl_record!(Customer {
    customer_id: i64 => "CustomerId",
    first_name: Option<String> => "FirstName",
    last_name: Option<String> => "LastName",
    phone_number: Option<String> => "PhoneNumber",
    email: Option<String> => "Email",
    address: Option<String> => "Address",
    city: Option<String> => "City",
    state: Option<String> => "State",
    zip: i32 => "Zip",
    rewards_points: Option<Decimal> => "RewardsPoints",
});

pub const COLUMNS: [&str; 10] = [
    "CustomerId",
    "FirstName",
    "LastName",
    "Email",
    "PhoneNumber",
    "Address",
    "City",
    "State",
    "Zip",
    "RewardsPoints",
];

fn text(value: &str) -> Option<Value> {
    Some(Value::from(value))
}

/// Three customers; the second has no phone, zip or points, the third no phone.
pub fn customer_table() -> Table {
    let mut table = Table::new(COLUMNS).expect("columns");
    table
        .push_row(vec![
            Some(Value::Int64(1)),
            text("John"),
            text("Doe"),
            text("johnDoe@maxmail.com"),
            text("345-231-9234"),
            text("312 Brackish Rd"),
            text("Boston"),
            text("MA"),
            // Stored as text; the member is an integer.
            text("34567"),
            Some(Value::Decimal(Decimal::new(233, 1))),
        ])
        .expect("row 1");
    table
        .push_row(vec![
            Some(Value::Int64(2)),
            text("Jake"),
            text("McPhelson"),
            text("Jake123@mail.com"),
            None,
            text("64 Back Road Drive"),
            text("Houston"),
            text("TX"),
            None,
            None,
        ])
        .expect("row 2");
    table
        .push_row(vec![
            Some(Value::Int64(3)),
            text("Bob"),
            text("Jackson"),
            text("Jake123@vixmix.com"),
            None,
            text("2345 Cumberland St."),
            text("Nashville"),
            text("TN"),
            Some(Value::Int32(37210)),
            Some(Value::Decimal(Decimal::ZERO)),
        ])
        .expect("row 3");
    table
}

pub fn customer(list: &[Customer], id: i64) -> &Customer {
    list.iter()
        .find(|c| c.customer_id == id)
        .expect("customer present")
}

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
