//! Public mapping entry points as extension traits.
//!
//! [`MapTo`] is implemented for every row-source shape and returns a
//! `Vec<T>`; [`MapRowTo`] is implemented for a single extracted [`Row`] and
//! returns one `T`. Each comes in four flavors:
//!
//! | method                   | overrides | defaults record |
//! |--------------------------|-----------|-----------------|
//! | `map_to`                 | on        | none            |
//! | `map_to_with_overrides`  | caller    | none            |
//! | `map_to_with_defaults`   | on        | caller          |
//! | `map_to_with_options`    | caller    | caller          |

use rowmap_model::{Cell, Row, RowCursor, RowSource, SingleRow, Table, TableRows};

use crate::error::Result;
use crate::mapper::RowMapper;
use crate::options::MapOptions;
use crate::record::Record;

/// Maps every row of a source onto a list of records.
pub trait MapTo: Sized {
    type Source: RowSource;

    fn into_row_source(self) -> Self::Source;

    /// Overrides on, no defaults record.
    fn map_to<T: Record>(self) -> Result<Vec<T>> {
        RowMapper::<T>::new().map_many(self.into_row_source())
    }

    fn map_to_with_overrides<T: Record>(self, null_overrides: bool) -> Result<Vec<T>> {
        RowMapper::<T>::new()
            .with_null_overrides(null_overrides)
            .map_many(self.into_row_source())
    }

    /// Overrides on; null non-text cells take the member from `defaults`.
    fn map_to_with_defaults<T: Record>(self, defaults: &T) -> Result<Vec<T>> {
        RowMapper::new()
            .with_defaults(defaults)
            .map_many(self.into_row_source())
    }

    fn map_to_with_options<T: Record>(
        self,
        options: &MapOptions,
        defaults: Option<&T>,
    ) -> Result<Vec<T>> {
        let mapper = RowMapper::new().with_options(options.clone());
        match defaults {
            Some(defaults) => mapper.with_defaults(defaults).map_many(self.into_row_source()),
            None => mapper.map_many(self.into_row_source()),
        }
    }
}

impl<I> MapTo for RowCursor<I>
where
    I: Iterator<Item = Vec<Cell>>,
{
    type Source = Self;

    fn into_row_source(self) -> Self {
        self
    }
}

impl MapTo for TableRows<'_> {
    type Source = Self;

    fn into_row_source(self) -> Self {
        self
    }
}

impl<'a> MapTo for &'a Table {
    type Source = TableRows<'a>;

    fn into_row_source(self) -> TableRows<'a> {
        self.rows()
    }
}

impl MapTo for SingleRow<'_> {
    type Source = Self;

    fn into_row_source(self) -> Self {
        self
    }
}

impl<'a, S: RowSource + ?Sized> MapTo for &'a mut S {
    type Source = &'a mut S;

    fn into_row_source(self) -> &'a mut S {
        self
    }
}

/// Maps a single extracted row onto one record.
pub trait MapRowTo {
    fn map_to_with_options<T: Record>(&self, options: &MapOptions, defaults: Option<&T>)
    -> Result<T>;

    /// Overrides on, no defaults record.
    fn map_to<T: Record>(&self) -> Result<T> {
        self.map_to_with_options(&MapOptions::default(), None)
    }

    fn map_to_with_overrides<T: Record>(&self, null_overrides: bool) -> Result<T> {
        let options = MapOptions::default().with_null_overrides(null_overrides);
        self.map_to_with_options(&options, None)
    }

    /// Overrides on; null non-text cells take the member from `defaults`.
    fn map_to_with_defaults<T: Record>(&self, defaults: &T) -> Result<T> {
        self.map_to_with_options(&MapOptions::default(), Some(defaults))
    }
}

impl MapRowTo for Row {
    fn map_to_with_options<T: Record>(
        &self,
        options: &MapOptions,
        defaults: Option<&T>,
    ) -> Result<T> {
        let mapper = RowMapper::new().with_options(options.clone());
        match defaults {
            Some(defaults) => mapper.with_defaults(defaults).map_row(self),
            None => mapper.map_row(self),
        }
    }
}
