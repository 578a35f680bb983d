#![forbid(unsafe_code)]

use super::super::super::StoreError;
use super::sql::RESERVED_TABLES;
use rusqlite::Connection;

/// Drops indexes, views or triggers squatting on a core table name so the
/// table can be created. Returns how many objects were dropped.
pub(super) fn drop_reserved_name_collisions(conn: &Connection) -> Result<usize, StoreError> {
    let collisions = {
        let mut stmt =
            conn.prepare("SELECT type, name FROM sqlite_master WHERE name = ?1 AND type <> 'table'")?;
        let mut found = Vec::new();
        for table in RESERVED_TABLES {
            let rows = stmt.query_map([table], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            for row in rows {
                found.push(row?);
            }
        }
        found
    };

    let mut dropped = 0;
    for (kind, name) in collisions {
        let statement = match kind.as_str() {
            "index" => "DROP INDEX",
            "view" => "DROP VIEW",
            "trigger" => "DROP TRIGGER",
            _ => continue,
        };
        tracing::warn!(kind = %kind, name = %name, "dropping object that shadows a core table");
        conn.execute(&format!("{statement} IF EXISTS \"{name}\""), [])?;
        dropped += 1;
    }
    Ok(dropped)
}
