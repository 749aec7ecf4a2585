//! Column encoding helpers shared by the query modules.
//!
//! Identifiers, dates and timestamps are stored as text. Decoding failures
//! are reported through rusqlite's conversion error so they surface from
//! `query_row` and `query_map` like any other row error.

use std::{error::Error, str::FromStr};

use rusqlite::{types::Type, Row};

/// Reads a text column and parses it with `FromStr`.
pub(crate) fn parse_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    let text: String = row.get(index)?;
    text.parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Reads a nullable text column and parses it with `FromStr`.
pub(crate) fn parse_optional_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    let text: Option<String> = row.get(index)?;
    text.map(|text| {
        text.parse::<T>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
        })
    })
    .transpose()
}
