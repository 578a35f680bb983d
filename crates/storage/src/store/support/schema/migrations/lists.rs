#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use super::util::{
    ColumnInfo, add_column_if_missing, column_is_not_null, quote_ident, table_columns,
};
use rusqlite::Transaction;

/// Older stores only knew folder-scoped lists. Make the folder optional and
/// give every list an owning space: the folder's space, or for loose rows the
/// oldest space.
pub(super) fn apply(tx: &Transaction<'_>) -> Result<(), StoreError> {
    if column_is_not_null(tx, "lists", "folder_id")? {
        relax_folder_column(tx)?;
    }

    let added = add_column_if_missing(
        tx,
        "lists",
        "space_id",
        "INTEGER REFERENCES spaces(id) ON DELETE CASCADE",
    )?;
    if !added {
        return Ok(());
    }

    tx.execute(
        r#"
        UPDATE lists
        SET space_id = (SELECT folders.space_id FROM folders WHERE folders.id = lists.folder_id)
        WHERE folder_id IS NOT NULL
        "#,
        [],
    )?;
    tx.execute(
        r#"
        UPDATE lists
        SET space_id = (SELECT MIN(id) FROM spaces)
        WHERE space_id IS NULL AND folder_id IS NULL
        "#,
        [],
    )?;
    Ok(())
}

/// SQLite cannot drop a NOT NULL constraint in place, so the table is
/// rebuilt with every column and row carried over. Runs with foreign key
/// enforcement off so that dropping the old table leaves tasks alone.
fn relax_folder_column(tx: &Transaction<'_>) -> Result<(), StoreError> {
    let columns = table_columns(tx, "lists")?;
    let definitions = columns
        .iter()
        .map(column_definition)
        .collect::<Vec<_>>()
        .join(",\n  ");
    let names = columns
        .iter()
        .map(|column| quote_ident(&column.name))
        .collect::<Vec<_>>()
        .join(", ");

    tx.execute_batch(&format!(
        r#"
        DROP TABLE IF EXISTS lists_rebuild;
        CREATE TABLE lists_rebuild (
          {definitions}
        );
        INSERT INTO lists_rebuild ({names}) SELECT {names} FROM lists;
        DROP TABLE lists;
        ALTER TABLE lists_rebuild RENAME TO lists;
        "#
    ))?;

    tracing::info!(columns = columns.len(), "rebuilt lists with an optional folder");
    Ok(())
}

fn column_definition(column: &ColumnInfo) -> String {
    let name = quote_ident(&column.name);
    match column.name.as_str() {
        "id" if column.primary_key => format!("{name} INTEGER PRIMARY KEY AUTOINCREMENT"),
        "folder_id" => format!("{name} INTEGER REFERENCES folders(id) ON DELETE CASCADE"),
        "space_id" => format!("{name} INTEGER REFERENCES spaces(id) ON DELETE CASCADE"),
        _ => {
            let mut definition = format!("{name} {}", column.decl_type);
            if column.primary_key {
                definition.push_str(" PRIMARY KEY");
            }
            if column.not_null {
                definition.push_str(" NOT NULL");
            }
            if let Some(default) = &column.default {
                definition.push_str(" DEFAULT ");
                definition.push_str(default);
            }
            definition
        }
    }
}
