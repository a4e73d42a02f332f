//! Target records and their member accessor tables.
//!
//! A record is a plain struct with a `Default` constructor. Instead of
//! inspecting the struct at runtime, each record publishes a table of
//! [`Member`]s: a name, a declared [`MemberType`] and typed accessors. The
//! [`impl_record!`](crate::impl_record) macro writes that table.
//!
//! # Example
//!
//! ```
//! use rowmap_core::{impl_record, Record};
//!
//! #[derive(Debug, Default)]
//! struct Customer {
//!     customer_id: i64,
//!     phone_number: Option<String>,
//!     zip: i32,
//! }
//!
//! impl_record!(Customer {
//!     customer_id: i64 => "CustomerId",
//!     phone_number: Option<String> => "PhoneNumber",
//!     zip: i32,
//! });
//!
//! let names: Vec<_> = Customer::members().iter().map(|m| m.name()).collect();
//! assert_eq!(names, ["CustomerId", "PhoneNumber", "zip"]);
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rowmap_model::{Value, ValueKind};
use rust_decimal::Decimal;

use crate::nulls::NullFill;

/// Declared type of a record member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberType {
    /// Kind a non-null cell is coerced into.
    pub kind: ValueKind,
    /// Whether the member can hold "no value" (`Option<_>`).
    pub nullable: bool,
}

impl MemberType {
    pub const fn new(kind: ValueKind, nullable: bool) -> Self {
        Self { kind, nullable }
    }

    pub fn is_text(&self) -> bool {
        self.kind == ValueKind::Text
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "Option<{}>", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// Rust types that can back a record member.
///
/// Implemented for `i16`, `i32`, `i64`, `f32`, `f64`, [`Decimal`], `String`,
/// `bool`, [`NaiveDate`], [`NaiveDateTime`] and `Option` of each. `Option<T>`
/// is the nullable form; `Option<String>` is the string that can hold "no
/// value", while plain `String` cannot.
pub trait FieldType: Sized {
    const TYPE: MemberType;

    /// Takes a value already coerced to `TYPE.kind`.
    fn from_value(value: Value) -> Option<Self>;

    /// The value a null cell leaves behind under `fill`.
    ///
    /// `FromDefaults` is resolved by the member itself; a type asked for it
    /// directly falls back like `NoValue`.
    fn null_fill(fill: NullFill) -> Self;
}

macro_rules! field_types {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const TYPE: MemberType = MemberType::new(ValueKind::$variant, false);

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn null_fill(_fill: NullFill) -> Self {
                    <$ty>::default()
                }
            }

            impl FieldType for Option<$ty> {
                const TYPE: MemberType = MemberType::new(ValueKind::$variant, true);

                fn from_value(value: Value) -> Option<Self> {
                    <$ty as FieldType>::from_value(value).map(Some)
                }

                fn null_fill(fill: NullFill) -> Self {
                    match fill {
                        NullFill::EmptyText => Some(<$ty>::default()),
                        NullFill::NoValue | NullFill::Zero | NullFill::FromDefaults => None,
                    }
                }
            }
        )*
    };
}

field_types! {
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    Decimal => Decimal,
    String => Text,
    bool => Bool,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
}

type AssignFn<T> = Box<dyn Fn(&mut T, Value) -> bool + Send + Sync>;
type FillFn<T> = Box<dyn Fn(&mut T, NullFill, Option<&T>) + Send + Sync>;

/// One settable member of record `T`.
pub struct Member<T> {
    name: &'static str,
    ty: MemberType,
    assign: AssignFn<T>,
    fill: FillFn<T>,
}

impl<T: 'static> Member<T> {
    /// Describes a member through a pair of field accessors.
    pub fn new<F>(name: &'static str, get: fn(&T) -> &F, get_mut: fn(&mut T) -> &mut F) -> Self
    where
        F: FieldType + Clone + 'static,
    {
        Self {
            name,
            ty: F::TYPE,
            assign: Box::new(move |record, value| match F::from_value(value) {
                Some(field) => {
                    *get_mut(record) = field;
                    true
                }
                None => false,
            }),
            fill: Box::new(move |record, fill, defaults| {
                let field = match (fill, defaults) {
                    (NullFill::FromDefaults, Some(defaults)) => get(defaults).clone(),
                    (fill, _) => F::null_fill(fill),
                };
                *get_mut(record) = field;
            }),
        }
    }
}

impl<T> Member<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn member_type(&self) -> MemberType {
        self.ty
    }

    /// Stores a value of the member's kind. Returns false on a kind mismatch.
    pub(crate) fn assign(&self, record: &mut T, value: Value) -> bool {
        (self.assign)(record, value)
    }

    pub(crate) fn fill_null(&self, record: &mut T, fill: NullFill, defaults: Option<&T>) {
        (self.fill)(record, fill, defaults);
    }
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("type", &self.ty)
            .finish_non_exhaustive()
    }
}

/// A type rows can be mapped onto.
///
/// Instances are created with `Default::default()` once per row, so the
/// constructor must be free of side effects.
pub trait Record: Default + 'static {
    /// The member accessor table, in declaration order.
    fn members() -> Vec<Member<Self>>;

    /// Name used in diagnostics.
    fn record_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Implements [`Record`] for a struct by listing its mapped fields.
///
/// Each entry is `field: Type`, optionally followed by `=> "MemberName"`
/// when the member's public name differs from the Rust field name. Columns
/// are matched against the member name ignoring ASCII case.
#[macro_export]
macro_rules! impl_record {
    ($record:ty { $($field:ident : $field_ty:ty $(=> $name:literal)?),* $(,)? }) => {
        impl $crate::Record for $record {
            fn members() -> ::std::vec::Vec<$crate::Member<Self>> {
                ::std::vec![
                    $(
                        $crate::Member::<Self>::new::<$field_ty>(
                            $crate::__member_name!($field $(, $name)?),
                            |record| &record.$field,
                            |record| &mut record.$field,
                        ),
                    )*
                ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __member_name {
    ($field:ident) => {
        ::core::stringify!($field)
    };
    ($field:ident, $name:literal) => {
        $name
    };
}
