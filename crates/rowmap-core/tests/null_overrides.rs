//! Null handling with overrides switched off and with defaults records.

mod common;

use common::{Customer, customer, customer_table, init_tracing};
use rowmap_core::{MapOptions, MapRowTo, MapTo, RowMapper, impl_record};
use rowmap_model::{Decimal, NaiveDate, Row, Value};

#[test]
fn overrides_off_leaves_nullable_text_empty() {
    init_tracing();
    let customers: Vec<Customer> = customer_table().map_to_with_overrides(false).unwrap();

    let second = customer(&customers, 2);
    assert_eq!(second.phone_number, None);
    assert_eq!(second.zip, 0);
    assert_eq!(second.rewards_points, None);
    assert_eq!(second.first_name.as_deref(), Some("Jake"));
}

#[test]
fn overrides_off_ignores_defaults_record() {
    let defaults = Customer {
        zip: 12345,
        rewards_points: Some(Decimal::ONE),
        ..Customer::default()
    };
    let options = MapOptions::new().with_null_overrides(false);
    let customers: Vec<Customer> = customer_table()
        .map_to_with_options(&options, Some(&defaults))
        .unwrap();

    let second = customer(&customers, 2);
    assert_eq!(second.zip, 0);
    assert_eq!(second.rewards_points, None);
}

#[test]
fn cursor_and_row_agree_with_table() {
    let from_table: Vec<Customer> = customer_table().map_to_with_overrides(false).unwrap();
    let from_cursor: Vec<Customer> = customer_table()
        .into_cursor()
        .map_to_with_overrides(false)
        .unwrap();
    assert_eq!(from_table, from_cursor);

    let row = customer_table().row(2).unwrap();
    let third: Customer = row.map_to_with_overrides(false).unwrap();
    assert_eq!(&third, customer(&from_table, 3));
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Shipment {
    label: String,
    carrier: Option<String>,
    weight: f64,
    shipped_on: Option<NaiveDate>,
    fragile: bool,
}

impl_record!(Shipment {
    label: String => "Label",
    carrier: Option<String> => "Carrier",
    weight: f64 => "Weight",
    shipped_on: Option<NaiveDate> => "ShippedOn",
    fragile: bool => "Fragile",
});

fn all_null_row() -> Row {
    Row::builder()
        .null("Label")
        .null("Carrier")
        .null("Weight")
        .null("ShippedOn")
        .null("Fragile")
        .build()
        .unwrap()
}

#[test]
fn text_members_ignore_defaults_record() {
    let defaults = Shipment {
        label: "unlabelled".to_string(),
        carrier: Some("post".to_string()),
        weight: 1.5,
        shipped_on: NaiveDate::from_ymd_opt(2024, 3, 1),
        fragile: true,
    };
    let shipment: Shipment = all_null_row().map_to_with_defaults(&defaults).unwrap();
    assert_eq!(
        shipment,
        Shipment {
            label: String::new(),
            carrier: Some(String::new()),
            weight: 1.5,
            shipped_on: NaiveDate::from_ymd_opt(2024, 3, 1),
            fragile: true,
        }
    );
}

#[test]
fn plain_string_cannot_hold_no_value() {
    let shipment: Shipment = all_null_row().map_to_with_overrides(false).unwrap();
    assert_eq!(shipment, Shipment::default());
    assert_eq!(shipment.label, "");
    assert_eq!(shipment.carrier, None);
}

#[test]
fn defaults_only_fill_null_cells() {
    let defaults = Shipment {
        weight: 9.0,
        ..Shipment::default()
    };
    let row = Row::builder()
        .value("Weight", "2.25")
        .value("Fragile", 1i32)
        .build()
        .unwrap();
    let shipment = RowMapper::new()
        .with_defaults(&defaults)
        .map_row(&row)
        .unwrap();
    assert_eq!(shipment.weight, 2.25);
    assert!(shipment.fragile);
}

#[test]
fn same_kind_cells_are_assigned_directly() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    let row = Row::builder()
        .value("label", "box 7")
        .value("shippedon", date)
        .value("fragile", Value::Bool(false))
        .build()
        .unwrap();
    let shipment: Shipment = row.map_to().unwrap();
    assert_eq!(shipment.label, "box 7");
    assert_eq!(shipment.shipped_on, Some(date));
    assert!(!shipment.fragile);
}
