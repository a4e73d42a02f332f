//! Polars `DataFrame` rows as a row source.

use chrono::DateTime;
use polars::prelude::*;
use rowmap_core::MapTo;
use rowmap_model::{
    Cell, Decimal, NaiveDate, NaiveDateTime, RowSource, SourceError, Value, validate_columns,
};

use crate::error::IngestError;

/// Converts a Polars `AnyValue` into a cell.
///
/// Signed and unsigned integers land in the narrowest signed kind that holds
/// every value of their type; `UInt64` values past `i64::MAX` become
/// decimals. Dates and datetimes keep their kind; a datetime's time zone is
/// dropped and the UTC wall time kept. Types with no typed counterpart are
/// rendered as text.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use rowmap_ingest::any_to_value;
/// use rowmap_model::Value;
///
/// assert_eq!(any_to_value(AnyValue::Null), None);
/// assert_eq!(any_to_value(AnyValue::UInt16(7)), Some(Value::Int32(7)));
/// assert_eq!(any_to_value(AnyValue::String("MA")), Some(Value::from("MA")));
/// ```
pub fn any_to_value(value: AnyValue<'_>) -> Cell {
    let value = match value {
        AnyValue::Null => return None,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::Int8(v) => Value::Int16(i16::from(v)),
        AnyValue::Int16(v) => Value::Int16(v),
        AnyValue::Int32(v) => Value::Int32(v),
        AnyValue::Int64(v) => Value::Int64(v),
        AnyValue::UInt8(v) => Value::Int16(i16::from(v)),
        AnyValue::UInt16(v) => Value::Int32(i32::from(v)),
        AnyValue::UInt32(v) => Value::Int64(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Value::Int64(v),
            Err(_) => Value::Decimal(Decimal::from(v)),
        },
        AnyValue::Float32(v) => Value::Float32(v),
        AnyValue::Float64(v) => Value::Float64(v),
        AnyValue::String(s) => Value::Text(s.to_string()),
        AnyValue::StringOwned(s) => Value::Text(s.to_string()),
        AnyValue::Date(days) => match epoch_date(days) {
            Some(date) => Value::Date(date),
            None => Value::Text(value.to_string()),
        },
        AnyValue::Datetime(ticks, unit, _) | AnyValue::DatetimeOwned(ticks, unit, _) => {
            match epoch_datetime(ticks, unit) {
                Some(stamp) => Value::DateTime(stamp),
                None => Value::Text(value.to_string()),
            }
        }
        other => Value::Text(other.to_string()),
    };
    Some(value)
}

/// Days since 1970-01-01.
fn epoch_date(days: i32) -> Option<NaiveDate> {
    // 1970-01-01 is day 719_163 counted from 0001-01-01.
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(719_163)?)
}

fn epoch_datetime(ticks: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let stamp = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(ticks)?,
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(ticks)?,
        TimeUnit::Nanoseconds => DateTime::from_timestamp_nanos(ticks),
    };
    Some(stamp.naive_utc())
}

/// Whether a column's dtype converts to a typed value rather than text.
fn has_typed_value(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Boolean
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::String
            | DataType::Date
            | DataType::Datetime(_, _)
            | DataType::Null
    )
}

/// Rows of a borrowed `DataFrame`, top to bottom.
#[derive(Debug)]
pub struct FrameRows<'a> {
    frame: &'a DataFrame,
    columns: Vec<String>,
    position: usize,
}

impl<'a> FrameRows<'a> {
    /// Reads the column list of `frame`.
    ///
    /// Fails with [`IngestError::Header`] when two column names differ only
    /// in ASCII case.
    pub fn new(frame: &'a DataFrame) -> crate::Result<Self> {
        let mut columns = Vec::with_capacity(frame.width());
        for column in frame.get_columns() {
            let name = column.name().to_string();
            if !has_typed_value(column.dtype()) {
                tracing::warn!(
                    column = %name,
                    dtype = %column.dtype(),
                    "Column type has no typed value; cells are passed through as text"
                );
            }
            columns.push(name);
        }
        Ok(Self {
            frame,
            columns: validate_columns(columns)?,
            position: 0,
        })
    }

    /// Number of rows read so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl RowSource for FrameRows<'_> {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next_cells(&mut self) -> Result<Option<Vec<Cell>>, SourceError> {
        if self.position >= self.frame.height() {
            return Ok(None);
        }
        let idx = self.position;
        let cells = self
            .frame
            .get_columns()
            .iter()
            .map(|column| column.get(idx).map(any_to_value))
            .collect::<PolarsResult<Vec<Cell>>>()
            .map_err(IngestError::from)?;
        self.position += 1;
        Ok(Some(cells))
    }
}

impl MapTo for FrameRows<'_> {
    type Source = Self;

    fn into_row_source(self) -> Self {
        self
    }
}
