#![forbid(unsafe_code)]

mod lists;
mod positions;
mod tasks;
mod util;

use super::super::super::StoreError;
use super::sql::{CORE_TABLES_SQL, PRAGMAS_SQL, SIBLING_INDEXES_SQL};
use rusqlite::{Connection, Transaction, params};

pub(super) struct Migration {
    pub(super) version: i64,
    pub(super) name: &'static str,
    /// Steps that rebuild a table must run with enforcement off, otherwise
    /// dropping the old table cascades into its children.
    foreign_keys_off: bool,
    up: fn(&Transaction<'_>) -> Result<(), StoreError>,
}

/// Applied in order; a version is never reused or renumbered.
pub(super) const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "core_tables",
        foreign_keys_off: false,
        up: core_tables,
    },
    Migration {
        version: 2,
        name: "list_space_parent",
        foreign_keys_off: true,
        up: lists::apply,
    },
    Migration {
        version: 3,
        name: "sibling_positions",
        foreign_keys_off: false,
        up: positions::apply,
    },
    Migration {
        version: 4,
        name: "task_timer",
        foreign_keys_off: false,
        up: tasks::apply,
    },
    Migration {
        version: 5,
        name: "sibling_indexes",
        foreign_keys_off: false,
        up: sibling_indexes,
    },
];

pub(super) fn latest_version() -> i64 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

pub(super) fn applied_version(conn: &Connection) -> Result<i64, StoreError> {
    Ok(conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get::<_, i64>(0),
    )?)
}

/// Runs every migration above the recorded version, each in its own
/// transaction. Returns the version the store ends up at.
pub(super) fn apply(conn: &mut Connection, now_ms: i64) -> Result<i64, StoreError> {
    let current = applied_version(conn)?;

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        run(conn, migration, now_ms).map_err(|err| StoreError::Migration {
            version: migration.version,
            name: migration.name,
            source: Box::new(err),
        })?;
        tracing::info!(
            version = migration.version,
            name = migration.name,
            "applied schema migration"
        );
    }

    applied_version(conn)
}

fn run(conn: &mut Connection, migration: &Migration, now_ms: i64) -> Result<(), StoreError> {
    if !migration.foreign_keys_off {
        return run_in_tx(conn, migration, now_ms);
    }

    // The pragma is a no-op inside a transaction, so toggle it around one.
    conn.execute_batch("PRAGMA foreign_keys = OFF;")?;
    let result = run_in_tx(conn, migration, now_ms);
    conn.execute_batch(PRAGMAS_SQL)?;
    result
}

fn run_in_tx(conn: &mut Connection, migration: &Migration, now_ms: i64) -> Result<(), StoreError> {
    let tx = conn.transaction()?;
    (migration.up)(&tx)?;
    tx.execute(
        "INSERT INTO schema_migrations(version, name, applied_at_ms) VALUES (?1, ?2, ?3)",
        params![migration.version, migration.name, now_ms],
    )?;
    tx.commit()?;
    Ok(())
}

pub(super) fn core_tables(tx: &Transaction<'_>) -> Result<(), StoreError> {
    tx.execute_batch(CORE_TABLES_SQL)?;
    Ok(())
}

pub(super) fn sibling_indexes(tx: &Transaction<'_>) -> Result<(), StoreError> {
    tx.execute_batch(SIBLING_INDEXES_SQL)?;
    Ok(())
}
