//! The row mapper: one row in, one record out.
//!
//! For every column bound to a member, a non-null cell is coerced into the
//! member's kind and assigned; a null cell is resolved through
//! [`resolve_null`]. Columns without a member are skipped and members
//! without a column keep their `Default` value.
//!
//! Mapping a row is all-or-nothing: on a conversion error the half-built
//! record is dropped and only the error is returned.

use std::fmt;
use std::sync::Arc;

use rowmap_model::{Cell, Row, RowSource, SourceError};

use crate::coerce::coerce;
use crate::error::{ConvertError, MapError, Result};
use crate::nulls::resolve_null;
use crate::options::MapOptions;
use crate::record::{Member, Record};
use crate::resolver::{Binding, MemberMap};

/// Maps rows onto records of type `T`.
///
/// The defaults record, when given, is borrowed for `'d` and consulted only
/// for null cells.
pub struct RowMapper<'d, T> {
    members: Arc<MemberMap<T>>,
    options: MapOptions,
    defaults: Option<&'d T>,
}

impl<'d, T: Record> RowMapper<'d, T> {
    /// A mapper with default options and no defaults record.
    pub fn new() -> Self {
        Self {
            members: MemberMap::resolve(),
            options: MapOptions::default(),
            defaults: None,
        }
    }

    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_null_overrides(mut self, enable: bool) -> Self {
        self.options.null_overrides = enable;
        self
    }

    /// Supplies the record whose members replace null cells.
    pub fn with_defaults(mut self, defaults: &'d T) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Maps a single extracted row.
    pub fn map_row(&self, row: &Row) -> Result<T> {
        self.map_cells(row.columns(), row.cells().to_vec())
    }

    /// Maps one row given as a column list and parallel cells.
    pub fn map_cells(&self, columns: &[String], cells: Vec<Cell>) -> Result<T> {
        let binding = self.bind(columns)?;
        self.map_bound(&binding, columns, cells, 1)
    }

    /// Maps every row of `source`, in order.
    ///
    /// The source is drained but not closed; that stays with the caller.
    pub fn map_many<S: RowSource>(&self, mut source: S) -> Result<Vec<T>> {
        let columns = source.columns().to_vec();
        let binding = self.bind(&columns)?;
        let mut records = Vec::new();
        while let Some(cells) = source.next_cells()? {
            let record = self.map_bound(&binding, &columns, cells, records.len() + 1)?;
            records.push(record);
        }
        tracing::debug!(
            record = self.members.record_name(),
            rows = records.len(),
            "Mapped rows"
        );
        Ok(records)
    }

    fn bind(&self, columns: &[String]) -> Result<Binding> {
        let binding = self.members.bind(columns);
        if self.options.strict_columns
            && let Some(position) = binding.unmatched().next()
        {
            return Err(MapError::UnmatchedColumn {
                column: columns[position].clone(),
                record: self.members.record_name(),
            });
        }
        Ok(binding)
    }

    fn map_bound(
        &self,
        binding: &Binding,
        columns: &[String],
        cells: Vec<Cell>,
        row: usize,
    ) -> Result<T> {
        if cells.len() != binding.width() {
            return Err(SourceError::Width {
                row,
                expected: binding.width(),
                found: cells.len(),
            }
            .into());
        }

        let mut record = T::default();
        for (position, cell) in cells.into_iter().enumerate() {
            let Some(member) = binding
                .member_index(position)
                .and_then(|idx| self.members.member(idx))
            else {
                continue;
            };
            self.apply(&mut record, member, &columns[position], cell)?;
        }
        Ok(record)
    }

    fn apply(&self, record: &mut T, member: &Member<T>, column: &str, cell: Cell) -> Result<()> {
        let ty = member.member_type();
        let Some(value) = cell else {
            let fill = resolve_null(ty, self.defaults.is_some(), self.options.null_overrides);
            tracing::trace!(column, member = member.name(), ?fill, "Null cell");
            member.fill_null(record, fill, self.defaults);
            return Ok(());
        };

        let conversion = |source| MapError::Conversion {
            column: column.to_string(),
            member: member.name(),
            source,
        };
        let from = value.kind();
        let value = coerce(value, ty.kind).map_err(conversion)?;
        if member.assign(record, value) {
            Ok(())
        } else {
            Err(conversion(ConvertError::Unsupported { from, to: ty.kind }))
        }
    }
}

impl<T: Record> Default for RowMapper<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RowMapper<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMapper")
            .field("record", &self.members.record_name())
            .field("options", &self.options)
            .field("has_defaults", &self.defaults.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmap_model::{Decimal, RowCursor, Value};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Order {
        id: i64,
        total: Option<Decimal>,
        qty: i32,
        note: Option<String>,
    }

    crate::impl_record!(Order {
        id: i64 => "Id",
        total: Option<Decimal> => "Total",
        qty: i32 => "Qty",
        note: Option<String> => "Note",
    });

    #[test]
    fn maps_coerced_values() {
        let row = Row::builder()
            .value("id", 7i64)
            .value("TOTAL", 12i32)
            .value("Qty", "3")
            .value("Note", "rush")
            .build()
            .unwrap();
        let order = RowMapper::<Order>::new().map_row(&row).unwrap();
        assert_eq!(
            order,
            Order {
                id: 7,
                total: Some(Decimal::from(12)),
                qty: 3,
                note: Some("rush".to_string()),
            }
        );
    }

    #[test]
    fn unmatched_members_keep_defaults() {
        let row = Row::builder().value("Id", 1i64).build().unwrap();
        let order = RowMapper::<Order>::new().map_row(&row).unwrap();
        assert_eq!(order, Order { id: 1, ..Order::default() });
    }

    #[test]
    fn strict_columns_reject_unknown_column() {
        let row = Row::builder()
            .value("Id", 1i64)
            .value("Warehouse", "B")
            .build()
            .unwrap();
        let err = RowMapper::<Order>::new()
            .with_options(MapOptions::new().with_strict_columns(true))
            .map_row(&row)
            .unwrap_err();
        assert!(matches!(err, MapError::UnmatchedColumn { column, .. } if column == "Warehouse"));
    }

    #[test]
    fn conversion_failure_names_column() {
        let row = Row::builder().value("qty", "lots").build().unwrap();
        let err = RowMapper::<Order>::new().map_row(&row).unwrap_err();
        match err {
            MapError::Conversion { column, member, .. } => {
                assert_eq!(column, "qty");
                assert_eq!(member, "Qty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn map_many_stops_at_first_bad_row() {
        let cursor = RowCursor::new(
            vec!["Id".to_string(), "Qty".to_string()],
            vec![
                vec![Some(Value::Int64(1)), Some(Value::from("2"))],
                vec![Some(Value::Int64(2)), Some(Value::from("two"))],
                vec![Some(Value::Int64(3)), None],
            ],
        );
        let err = RowMapper::<Order>::new().map_many(cursor).unwrap_err();
        assert!(matches!(err, MapError::Conversion { .. }));
    }

    #[test]
    fn map_cells_checks_width() {
        let columns = vec!["Id".to_string()];
        let err = RowMapper::<Order>::new()
            .map_cells(&columns, vec![None, None])
            .unwrap_err();
        assert!(matches!(err, MapError::Source(SourceError::Width { .. })));
    }
}
