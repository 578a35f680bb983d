#![forbid(unsafe_code)]

use super::*;

impl SqliteStore {
    pub fn spaces(&self) -> Result<Vec<Space>, StoreError> {
        let sql = format!("SELECT {SPACE_COLUMNS} FROM spaces ORDER BY spaces.id ASC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], space_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn space(&self, space_id: SpaceId) -> Result<Option<Space>, StoreError> {
        let sql = format!("SELECT {SPACE_COLUMNS} FROM spaces WHERE spaces.id = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![space_id.get()], space_from_row)
            .optional()?)
    }

    pub fn add_space(&mut self, name: &str) -> Result<Space, StoreError> {
        check_name(name)?;
        self.conn
            .execute("INSERT INTO spaces(name) VALUES (?1)", params![name])?;
        let id = SpaceId::new(self.conn.last_insert_rowid());
        tracing::debug!(space_id = %id, "space added");
        Ok(Space {
            id,
            name: name.to_string(),
        })
    }

    pub fn rename_space(&mut self, space_id: SpaceId, name: &str) -> Result<(), StoreError> {
        check_name(name)?;
        let updated = self.conn.execute(
            "UPDATE spaces SET name = ?2 WHERE id = ?1",
            params![space_id.get(), name],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownSpace(space_id));
        }
        Ok(())
    }

    /// Removes the space with every folder, list and task beneath it.
    ///
    /// Children are deleted explicitly before the space so that stores whose
    /// parent columns were added without a declared cascade still end up with
    /// no orphans.
    pub fn delete_space(&mut self, space_id: SpaceId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        ensure_space_tx(&tx, space_id)?;

        let tasks = tx.execute(
            r#"
            DELETE FROM tasks WHERE list_id IN (
              SELECT id FROM lists
              WHERE space_id = ?1 OR folder_id IN (SELECT id FROM folders WHERE space_id = ?1)
            )
            "#,
            params![space_id.get()],
        )?;
        let lists = tx.execute(
            r#"
            DELETE FROM lists
            WHERE space_id = ?1 OR folder_id IN (SELECT id FROM folders WHERE space_id = ?1)
            "#,
            params![space_id.get()],
        )?;
        let folders = tx.execute(
            "DELETE FROM folders WHERE space_id = ?1",
            params![space_id.get()],
        )?;
        tx.execute("DELETE FROM spaces WHERE id = ?1", params![space_id.get()])?;
        tx.commit()?;

        tracing::debug!(space_id = %space_id, folders, lists, tasks, "space deleted");
        Ok(())
    }
}
