#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use rusqlite::{Connection, params};

pub(super) fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, StoreError> {
    let exists = conn.query_row(
        "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
        params![table, column],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(exists > 0)
}

/// Adds `column` unless the table already has it. Returns whether the column
/// was added, so callers can backfill only freshly created columns.
pub(super) fn add_column_if_missing(
    conn: &Connection,
    table: &str,
    column: &str,
    decl: &str,
) -> Result<bool, StoreError> {
    if column_exists(conn, table, column)? {
        return Ok(false);
    }
    conn.execute(&format!("ALTER TABLE {table} ADD COLUMN {column} {decl}"), [])?;
    tracing::info!(table, column, "added column");
    Ok(true)
}

pub(super) fn column_is_not_null(
    conn: &Connection,
    table: &str,
    column: &str,
) -> Result<bool, StoreError> {
    let not_null = conn.query_row(
        r#"SELECT COALESCE(MAX("notnull"), 0) FROM pragma_table_info(?1) WHERE name = ?2"#,
        params![table, column],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(not_null != 0)
}

/// One row of `PRAGMA table_info`, enough to re-declare the column.
pub(super) struct ColumnInfo {
    pub(super) name: String,
    pub(super) decl_type: String,
    pub(super) not_null: bool,
    pub(super) default: Option<String>,
    pub(super) primary_key: bool,
}

pub(super) fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>, StoreError> {
    let mut stmt = conn.prepare(
        r#"SELECT name, type, "notnull", dflt_value, pk FROM pragma_table_info(?1) ORDER BY cid"#,
    )?;
    let rows = stmt.query_map(params![table], |row| {
        Ok(ColumnInfo {
            name: row.get(0)?,
            decl_type: row.get(1)?,
            not_null: row.get::<_, i64>(2)? != 0,
            default: row.get(3)?,
            primary_key: row.get::<_, i64>(4)? != 0,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub(super) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
