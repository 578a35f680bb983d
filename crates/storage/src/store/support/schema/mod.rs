#![forbid(unsafe_code)]

mod migrations;
mod repair;
mod seed;
mod sql;

use super::super::StoreError;
use rusqlite::Connection;

/// Brings any store, fresh or created by an older layout, up to the current
/// schema and guarantees a usable container chain. Returns the applied
/// schema version.
pub(in crate::store) fn prepare_schema(
    conn: &mut Connection,
    now_ms: i64,
) -> Result<i64, StoreError> {
    conn.execute_batch(sql::PRAGMAS_SQL)?;
    let foreign_keys = conn.query_row("PRAGMA foreign_keys", [], |row| row.get::<_, i64>(0))?;
    if foreign_keys != 1 {
        return Err(StoreError::ForeignKeysDisabled);
    }

    let repaired = repair::drop_reserved_name_collisions(conn)?;
    conn.execute_batch(sql::MIGRATIONS_TABLE_SQL)?;

    let version = migrations::apply(conn, now_ms)?;
    if repaired > 0 {
        // A collision means a core table was missing even though its
        // migration may already be recorded.
        let tx = conn.transaction()?;
        migrations::core_tables(&tx)?;
        migrations::sibling_indexes(&tx)?;
        tx.commit()?;
    }
    if version > migrations::latest_version() {
        tracing::warn!(
            version,
            latest = migrations::latest_version(),
            "store was written by a newer schema"
        );
    }

    let tx = conn.transaction()?;
    seed::seed_defaults(&tx)?;
    seed::reattach_lists(&tx)?;
    // Detaching a list from a missing folder can empty a kind again.
    seed::seed_defaults(&tx)?;
    seed::reattach_tasks(&tx)?;
    tx.commit()?;

    Ok(version)
}
