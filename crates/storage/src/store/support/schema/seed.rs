#![forbid(unsafe_code)]

use super::super::super::StoreError;
use rusqlite::{OptionalExtension, Transaction, params};

pub(super) const DEFAULT_SPACE_NAME: &str = "Personal";
pub(super) const DEFAULT_FOLDER_NAME: &str = "General";
pub(super) const DEFAULT_SPACE_LIST_NAME: &str = "Inbox";
pub(super) const DEFAULT_FOLDER_LIST_NAME: &str = "Tasks";

/// Makes sure a space, a folder, a space-direct list and a folder-scoped list
/// exist. Each is created only when none of its kind is present.
pub(super) fn seed_defaults(tx: &Transaction<'_>) -> Result<(), StoreError> {
    if count(tx, "SELECT COUNT(*) FROM spaces")? == 0 {
        tx.execute(
            "INSERT INTO spaces(name) VALUES (?1)",
            params![DEFAULT_SPACE_NAME],
        )?;
        tracing::info!(name = DEFAULT_SPACE_NAME, "seeded default space");
    }
    let space_id = first_id(tx, "SELECT MIN(id) FROM spaces")?
        .ok_or(StoreError::InvalidInput("no space available for defaults"))?;

    if count(tx, "SELECT COUNT(*) FROM folders")? == 0 {
        tx.execute(
            r#"
            INSERT INTO folders(space_id, name, position)
            VALUES (?1, ?2, (SELECT COALESCE(MAX(position), 0) + 1 FROM folders WHERE space_id = ?1))
            "#,
            params![space_id, DEFAULT_FOLDER_NAME],
        )?;
        tracing::info!(name = DEFAULT_FOLDER_NAME, "seeded default folder");
    }

    if count(tx, "SELECT COUNT(*) FROM lists WHERE folder_id IS NULL")? == 0 {
        tx.execute(
            r#"
            INSERT INTO lists(space_id, folder_id, name, position)
            VALUES (?1, NULL, ?2, (
              SELECT COALESCE(MAX(position), 0) + 1 FROM lists
              WHERE space_id = ?1 AND folder_id IS NULL
            ))
            "#,
            params![space_id, DEFAULT_SPACE_LIST_NAME],
        )?;
        tracing::info!(name = DEFAULT_SPACE_LIST_NAME, "seeded default space list");
    }

    if count(tx, "SELECT COUNT(*) FROM lists WHERE folder_id IS NOT NULL")? == 0 {
        let folder = tx
            .query_row(
                "SELECT id, space_id FROM folders ORDER BY id ASC LIMIT 1",
                [],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?;
        if let Some((folder_id, folder_space_id)) = folder {
            tx.execute(
                r#"
                INSERT INTO lists(space_id, folder_id, name, position)
                VALUES (?1, ?2, ?3, (
                  SELECT COALESCE(MAX(position), 0) + 1 FROM lists WHERE folder_id = ?2
                ))
                "#,
                params![folder_space_id, folder_id, DEFAULT_FOLDER_LIST_NAME],
            )?;
            tracing::info!(name = DEFAULT_FOLDER_LIST_NAME, "seeded default folder list");
        }
    }

    Ok(())
}

/// Repairs lists an older layout could leave without a valid parent: a
/// space that disagrees with the folder, a missing folder, a missing space.
pub(super) fn reattach_lists(tx: &Transaction<'_>) -> Result<(), StoreError> {
    let synced = tx.execute(
        r#"
        UPDATE lists
        SET space_id = (SELECT folders.space_id FROM folders WHERE folders.id = lists.folder_id)
        WHERE folder_id IS NOT NULL
          AND space_id IS NOT (SELECT folders.space_id FROM folders WHERE folders.id = lists.folder_id)
          AND EXISTS (SELECT 1 FROM folders WHERE folders.id = lists.folder_id)
        "#,
        [],
    )?;
    if synced > 0 {
        tracing::warn!(lists = synced, "realigned list space with its folder");
    }

    let detached = tx.execute(
        r#"
        UPDATE lists
        SET folder_id = NULL,
            space_id = CASE
              WHEN EXISTS (SELECT 1 FROM spaces WHERE spaces.id = lists.space_id) THEN space_id
              ELSE (SELECT MIN(id) FROM spaces)
            END
        WHERE folder_id IS NOT NULL
          AND NOT EXISTS (SELECT 1 FROM folders WHERE folders.id = lists.folder_id)
        "#,
        [],
    )?;
    if detached > 0 {
        tracing::warn!(lists = detached, "detached lists from missing folders");
    }

    let loose = tx.execute(
        r#"
        UPDATE lists
        SET space_id = (SELECT MIN(id) FROM spaces)
        WHERE folder_id IS NULL
          AND NOT EXISTS (SELECT 1 FROM spaces WHERE spaces.id = lists.space_id)
        "#,
        [],
    )?;
    if loose > 0 {
        tracing::warn!(lists = loose, "attached parentless lists to the first space");
    }
    Ok(())
}

/// Moves tasks without a list to the first folder list, else the first
/// space list.
pub(super) fn reattach_tasks(tx: &Transaction<'_>) -> Result<(), StoreError> {
    let fallback = match first_id(
        tx,
        "SELECT id FROM lists WHERE folder_id IS NOT NULL ORDER BY id ASC LIMIT 1",
    )? {
        Some(list_id) => Some(list_id),
        None => first_id(
            tx,
            "SELECT id FROM lists WHERE folder_id IS NULL ORDER BY id ASC LIMIT 1",
        )?,
    };

    if let Some(list_id) = fallback {
        let moved = tx.execute(
            "UPDATE tasks SET list_id = ?1 WHERE list_id IS NULL",
            params![list_id],
        )?;
        if moved > 0 {
            tracing::warn!(tasks = moved, list_id, "reattached tasks without a list");
        }
    }

    Ok(())
}

fn count(tx: &Transaction<'_>, sql: &str) -> Result<i64, StoreError> {
    Ok(tx.query_row(sql, [], |row| row.get::<_, i64>(0))?)
}

fn first_id(tx: &Transaction<'_>, sql: &str) -> Result<Option<i64>, StoreError> {
    Ok(tx
        .query_row(sql, [], |row| row.get::<_, Option<i64>>(0))
        .optional()?
        .flatten())
}
