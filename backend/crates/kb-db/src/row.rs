//! Decoding helpers shared by the repositories.

use crate::{DbError, Result};

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) fn uuid(row: &SqliteRow, table: &str, column: &str) -> Result<Uuid> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value)
        .map_err(|e| DbError::corrupt_row(format!("Invalid UUID in {table}.{column}: {e}")))
}

pub(crate) fn timestamp(row: &SqliteRow, table: &str, column: &str) -> Result<DateTime<Utc>> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::corrupt_row(format!("Invalid timestamp in {table}.{column}")))
}

pub(crate) fn date(row: &SqliteRow, table: &str, column: &str) -> Result<Option<NaiveDate>> {
    let value: Option<String> = row.try_get(column)?;
    value
        .map(|s| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| {
                DbError::corrupt_row(format!("Invalid date in {table}.{column}: {e}"))
            })
        })
        .transpose()
}

pub(crate) fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

const DATE_FORMAT: &str = "%Y-%m-%d";
