#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use super::util::add_column_if_missing;
use rusqlite::Transaction;

pub(super) fn apply(tx: &Transaction<'_>) -> Result<(), StoreError> {
    add_column_if_missing(
        tx,
        "tasks",
        "accumulated_seconds",
        "INTEGER NOT NULL DEFAULT 0",
    )?;
    add_column_if_missing(tx, "tasks", "running_since", "INTEGER")?;
    Ok(())
}
