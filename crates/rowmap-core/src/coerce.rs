//! Value coercion into a member's declared kind.
//!
//! Null cells never reach this module; see [`crate::nulls`]. A value that is
//! already of the target kind is returned untouched. Everything else goes
//! through a fixed conversion table:
//!
//! | from \ to      | integer | float | decimal | text | bool | date/datetime |
//! |----------------|---------|-------|---------|------|------|---------------|
//! | integer        | range   | yes   | yes     | yes  | yes  | no            |
//! | float          | round   | yes   | yes     | yes  | yes  | no            |
//! | decimal        | round   | yes   | yes     | yes  | yes  | no            |
//! | text           | parse   | parse | parse   | -    | parse| parse         |
//! | bool           | 1/0     | 1/0   | 1/0     | yes  | -    | no            |
//! | date/datetime  | no      | no    | no      | yes  | no   | midnight only |
//!
//! Text is parsed with `.` as the decimal point whatever the host locale.
//! Rounding to integers is half-to-even.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rowmap_model::{Value, ValueKind};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ConvertError;

/// Datetime layouts accepted from text, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts `value` to `target`, failing loudly when the pair is unsupported
/// or the value does not fit.
pub fn coerce(value: Value, target: ValueKind) -> Result<Value, ConvertError> {
    let from = value.kind();
    if from == target {
        return Ok(value);
    }
    match (value, target) {
        (value, ValueKind::Text) => Ok(Value::Text(value.to_string())),
        (Value::Text(text), target) => parse_text(&text, target),
        (Value::Bool(flag), target) if target.is_numeric() => {
            coerce(Value::Int32(i32::from(flag)), target)
        }
        (value, ValueKind::Bool) if from.is_numeric() => numeric_to_bool(&value),
        (Value::Date(date), ValueKind::DateTime) => Ok(Value::DateTime(date.and_time(NaiveTime::MIN))),
        (Value::DateTime(stamp), ValueKind::Date) => {
            if stamp.time() == NaiveTime::MIN {
                Ok(Value::Date(stamp.date()))
            } else {
                Err(ConvertError::invalid(
                    Value::DateTime(stamp),
                    target,
                    "time of day would be lost",
                ))
            }
        }
        (value, target) if from.is_numeric() && target.is_numeric() => {
            convert_numeric(value, target)
        }
        (_, to) => Err(ConvertError::Unsupported { from, to }),
    }
}

fn convert_numeric(value: Value, target: ValueKind) -> Result<Value, ConvertError> {
    match target {
        ValueKind::Int16 | ValueKind::Int32 | ValueKind::Int64 => {
            let whole = to_whole(&value, target)?;
            narrow(whole, target)
        }
        ValueKind::Float64 => to_f64(&value, target).map(Value::Float64),
        ValueKind::Float32 => to_f32(&value, target).map(Value::Float32),
        ValueKind::Decimal => to_decimal(&value, target).map(Value::Decimal),
        to => Err(ConvertError::Unsupported {
            from: value.kind(),
            to,
        }),
    }
}

/// Rounds any numeric value to an `i64`, half to even.
fn to_whole(value: &Value, target: ValueKind) -> Result<i64, ConvertError> {
    let overflow = || ConvertError::invalid(value, target, "value is out of range");
    match value {
        Value::Float32(v) => float_to_whole(f64::from(*v)).ok_or_else(overflow),
        Value::Float64(v) => float_to_whole(*v).ok_or_else(overflow),
        Value::Decimal(d) => d
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .ok_or_else(overflow),
        other => other.as_i64().ok_or(ConvertError::Unsupported {
            from: other.kind(),
            to: target,
        }),
    }
}

fn float_to_whole(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    let rounded = v.round_ties_even();
    // i64::MAX is not representable as f64; 2^63 is the first value past it.
    if rounded < i64::MIN as f64 || rounded >= 9_223_372_036_854_775_808.0 {
        return None;
    }
    Some(rounded as i64)
}

fn narrow(whole: i64, target: ValueKind) -> Result<Value, ConvertError> {
    let overflow = |_| ConvertError::invalid(whole, target, "value is out of range");
    match target {
        ValueKind::Int16 => i16::try_from(whole).map(Value::Int16).map_err(overflow),
        ValueKind::Int32 => i32::try_from(whole).map(Value::Int32).map_err(overflow),
        _ => Ok(Value::Int64(whole)),
    }
}

fn to_f64(value: &Value, target: ValueKind) -> Result<f64, ConvertError> {
    match value {
        Value::Float32(v) => Ok(f64::from(*v)),
        Value::Float64(v) => Ok(*v),
        Value::Decimal(d) => d
            .to_f64()
            .ok_or_else(|| ConvertError::invalid(d, target, "value is out of range")),
        other => other.as_i64().map(|v| v as f64).ok_or(ConvertError::Unsupported {
            from: other.kind(),
            to: target,
        }),
    }
}

fn to_f32(value: &Value, target: ValueKind) -> Result<f32, ConvertError> {
    match value {
        Value::Float32(v) => Ok(*v),
        Value::Decimal(d) => d
            .to_f32()
            .ok_or_else(|| ConvertError::invalid(d, target, "value is out of range")),
        other => {
            let wide = to_f64(other, target)?;
            let narrowed = wide as f32;
            if wide.is_finite() && !narrowed.is_finite() {
                return Err(ConvertError::invalid(other, target, "value is out of range"));
            }
            Ok(narrowed)
        }
    }
}

fn to_decimal(value: &Value, target: ValueKind) -> Result<Decimal, ConvertError> {
    let unrepresentable = || ConvertError::invalid(value, target, "value has no decimal representation");
    match value {
        Value::Float32(v) => Decimal::from_f32(*v).ok_or_else(unrepresentable),
        Value::Float64(v) => Decimal::from_f64(*v).ok_or_else(unrepresentable),
        Value::Decimal(d) => Ok(*d),
        other => other.as_i64().map(Decimal::from).ok_or(ConvertError::Unsupported {
            from: other.kind(),
            to: target,
        }),
    }
}

fn numeric_to_bool(value: &Value) -> Result<Value, ConvertError> {
    let flag = match value {
        Value::Float32(v) => *v != 0.0,
        Value::Float64(v) => *v != 0.0,
        Value::Decimal(d) => !d.is_zero(),
        other => other.as_i64().is_some_and(|v| v != 0),
    };
    Ok(Value::Bool(flag))
}

fn parse_text(text: &str, target: ValueKind) -> Result<Value, ConvertError> {
    let trimmed = text.trim();
    let invalid = |reason: String| ConvertError::invalid(text, target, reason);
    match target {
        ValueKind::Int16 => trimmed
            .parse::<i16>()
            .map(Value::Int16)
            .map_err(|e| invalid(e.to_string())),
        ValueKind::Int32 => trimmed
            .parse::<i32>()
            .map(Value::Int32)
            .map_err(|e| invalid(e.to_string())),
        ValueKind::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| invalid(e.to_string())),
        ValueKind::Float32 => trimmed
            .parse::<f32>()
            .map(Value::Float32)
            .map_err(|e| invalid(e.to_string())),
        ValueKind::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| invalid(e.to_string())),
        ValueKind::Decimal => parse_decimal(trimmed)
            .map(Value::Decimal)
            .map_err(|e| invalid(e.to_string())),
        ValueKind::Bool => parse_bool(trimmed)
            .map(Value::Bool)
            .ok_or_else(|| invalid("expected 'true' or 'false'".to_string())),
        ValueKind::Date => NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Value::Date)
            .map_err(|e| invalid(e.to_string())),
        ValueKind::DateTime => parse_datetime(trimmed)
            .map(Value::DateTime)
            .ok_or_else(|| invalid("expected an ISO 8601 date or datetime".to_string())),
        ValueKind::Text => Ok(Value::Text(text.to_string())),
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, rust_decimal::Error> {
    // `Decimal::from_str` skips `_` digit separators.
    if text.contains('_') {
        return Err(rust_decimal::Error::ErrorString(
            "digit separators are not allowed".to_string(),
        ));
    }
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
