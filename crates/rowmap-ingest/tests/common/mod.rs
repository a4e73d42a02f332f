//! Shared fixtures for rowmap-ingest integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Once;

use rowmap_core::impl_record;
use rowmap_model::Decimal;
use tempfile::NamedTempFile;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
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
    city: Option<String> => "City",
    state: Option<String> => "State",
    zip: i32 => "Zip",
    rewards_points: Option<Decimal> => "RewardsPoints",
});

pub const CUSTOMERS_CSV: &str = "\
CustomerId,FirstName,LastName,Email,PhoneNumber,City,State,Zip,RewardsPoints
1,John,Doe,johnDoe@maxmail.com,345-231-9234,Boston,MA,34567,23.3
2,Jake,McPhelson,Jake123@mail.com,,Houston,TX,,
3,Bob,Jackson,Jake123@vixmix.com,,Nashville,TN,37210,0
";

pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
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
