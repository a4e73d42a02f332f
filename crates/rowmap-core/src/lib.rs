//! Maps rows of named, typed cells onto plain Rust records.
//!
//! - **record**: the `Record` trait, member accessor tables and `impl_record!`
//! - **resolver**: case-insensitive column-to-member resolution, cached per type
//! - **coerce**: conversion of a cell value into a member's declared kind
//! - **nulls**: what a null cell becomes, with or without a defaults record
//! - **mapper**: the row mapper driving the above for one row or a whole source
//! - **ext**: `map_to` entry points on every row-source shape
//!
//! # Example
//!
//! ```
//! use rowmap_core::{MapTo, impl_record};
//! use rowmap_model::{Table, Value};
//!
//! #[derive(Debug, Default)]
//! struct Customer {
//!     customer_id: i64,
//!     zip: i32,
//! }
//!
//! impl_record!(Customer {
//!     customer_id: i64 => "CustomerId",
//!     zip: i32 => "Zip",
//! });
//!
//! let mut table = Table::new(["CustomerId", "Zip"]).unwrap();
//! table.push_row(vec![Some(Value::Int64(1)), Some(Value::from("34567"))]).unwrap();
//! table.push_row(vec![Some(Value::Int64(2)), None]).unwrap();
//!
//! let customers: Vec<Customer> = table.map_to().unwrap();
//! assert_eq!(customers[0].zip, 34567);
//! assert_eq!(customers[1].zip, 0);
//! ```

pub mod coerce;
pub mod error;
pub mod ext;
pub mod mapper;
pub mod nulls;
pub mod options;
pub mod record;
pub mod resolver;

pub use coerce::coerce;
pub use error::{ConvertError, MapError, Result};
pub use ext::{MapRowTo, MapTo};
pub use mapper::RowMapper;
pub use nulls::{NullFill, resolve_null};
pub use options::MapOptions;
pub use record::{FieldType, Member, MemberType, Record};
pub use resolver::{Binding, MemberMap};
