#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use super::util::add_column_if_missing;
use rusqlite::Transaction;

/// Adds sibling ordering. Existing rows are ranked by id inside their sibling
/// group so upgraded stores keep the order they were displayed in.
pub(super) fn apply(tx: &Transaction<'_>) -> Result<(), StoreError> {
    if add_column_if_missing(tx, "folders", "position", "INTEGER NOT NULL DEFAULT 0")? {
        tx.execute(
            r#"
            UPDATE folders
            SET position = (
              SELECT COUNT(*) FROM folders AS prior
              WHERE prior.space_id IS folders.space_id AND prior.id <= folders.id
            )
            "#,
            [],
        )?;
    }

    if add_column_if_missing(tx, "lists", "position", "INTEGER NOT NULL DEFAULT 0")? {
        tx.execute(
            r#"
            UPDATE lists
            SET position = (
              SELECT COUNT(*) FROM lists AS prior
              WHERE prior.space_id IS lists.space_id
                AND prior.folder_id IS lists.folder_id
                AND prior.id <= lists.id
            )
            "#,
            [],
        )?;
    }

    Ok(())
}
