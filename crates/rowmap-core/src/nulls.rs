//! Null-cell policy.
//!
//! Decides what a member receives when its cell holds the null marker. The
//! policy is deliberately asymmetric: with overrides on, text members always
//! get the empty string, even when a defaults record carries some other
//! text for that member. Every other member takes the defaults record's
//! value when one is supplied.

use crate::record::MemberType;

/// What a null cell turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullFill {
    /// "No value": `None` for `Option` members.
    NoValue,
    /// The type's zero/default value.
    Zero,
    /// The empty string (`Some("")` for `Option<String>`).
    EmptyText,
    /// The matching member of the caller's defaults record.
    FromDefaults,
}

/// Resolves the fill for one null cell.
///
/// `has_defaults` says whether the caller supplied a defaults record;
/// `overrides` is the caller's override switch (on unless turned off).
pub fn resolve_null(member: MemberType, has_defaults: bool, overrides: bool) -> NullFill {
    if !overrides {
        return if member.nullable {
            NullFill::NoValue
        } else {
            NullFill::Zero
        };
    }
    if member.is_text() {
        NullFill::EmptyText
    } else if has_defaults {
        NullFill::FromDefaults
    } else if member.nullable {
        NullFill::NoValue
    } else {
        NullFill::Zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmap_model::ValueKind;

    const INT: MemberType = MemberType::new(ValueKind::Int32, false);
    const OPT_DECIMAL: MemberType = MemberType::new(ValueKind::Decimal, true);
    const TEXT: MemberType = MemberType::new(ValueKind::Text, false);
    const OPT_TEXT: MemberType = MemberType::new(ValueKind::Text, true);

    #[test]
    fn overrides_off_ignores_defaults() {
        for has_defaults in [false, true] {
            assert_eq!(resolve_null(INT, has_defaults, false), NullFill::Zero);
            assert_eq!(resolve_null(OPT_DECIMAL, has_defaults, false), NullFill::NoValue);
            assert_eq!(resolve_null(TEXT, has_defaults, false), NullFill::Zero);
            assert_eq!(resolve_null(OPT_TEXT, has_defaults, false), NullFill::NoValue);
        }
    }

    #[test]
    fn overrides_on_without_defaults() {
        assert_eq!(resolve_null(INT, false, true), NullFill::Zero);
        assert_eq!(resolve_null(OPT_DECIMAL, false, true), NullFill::NoValue);
        assert_eq!(resolve_null(OPT_TEXT, false, true), NullFill::EmptyText);
    }

    #[test]
    fn overrides_on_with_defaults() {
        assert_eq!(resolve_null(INT, true, true), NullFill::FromDefaults);
        assert_eq!(resolve_null(OPT_DECIMAL, true, true), NullFill::FromDefaults);
        // Text never takes the defaults record's value.
        assert_eq!(resolve_null(TEXT, true, true), NullFill::EmptyText);
        assert_eq!(resolve_null(OPT_TEXT, true, true), NullFill::EmptyText);
    }
}
