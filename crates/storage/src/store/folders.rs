#![forbid(unsafe_code)]

use super::*;
use st_core::model::Direction;

impl SqliteStore {
    /// Folders of a space in sibling order.
    pub fn folders(&self, space_id: SpaceId) -> Result<Vec<Folder>, StoreError> {
        if self.space(space_id)?.is_none() {
            return Err(StoreError::UnknownSpace(space_id));
        }
        let sql = format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE folders.space_id = ?1 \
             ORDER BY folders.position ASC, folders.id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![space_id.get()], folder_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn folder(&self, folder_id: FolderId) -> Result<Option<Folder>, StoreError> {
        let sql = format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE folders.id = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![folder_id.get()], folder_from_row)
            .optional()?)
    }

    /// Appends a folder at the end of the space's folders.
    pub fn add_folder(&mut self, space_id: SpaceId, name: &str) -> Result<Folder, StoreError> {
        check_name(name)?;
        let tx = self.conn.transaction()?;
        ensure_space_tx(&tx, space_id)?;
        let position = next_position_tx(&tx, SiblingGroup::FoldersOf(space_id))?;
        tx.execute(
            "INSERT INTO folders(space_id, name, position) VALUES (?1, ?2, ?3)",
            params![space_id.get(), name, position],
        )?;
        let id = FolderId::new(tx.last_insert_rowid());
        tx.commit()?;

        tracing::debug!(folder_id = %id, space_id = %space_id, "folder added");
        Ok(Folder {
            id,
            space_id,
            name: name.to_string(),
            position,
        })
    }

    pub fn rename_folder(&mut self, folder_id: FolderId, name: &str) -> Result<(), StoreError> {
        check_name(name)?;
        let updated = self.conn.execute(
            "UPDATE folders SET name = ?2 WHERE id = ?1",
            params![folder_id.get(), name],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownFolder(folder_id));
        }
        Ok(())
    }

    /// Removes the folder, its lists and their tasks. The space is untouched.
    pub fn delete_folder(&mut self, folder_id: FolderId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        folder_space_tx(&tx, folder_id)?;

        let tasks = tx.execute(
            "DELETE FROM tasks WHERE list_id IN (SELECT id FROM lists WHERE folder_id = ?1)",
            params![folder_id.get()],
        )?;
        let lists = tx.execute(
            "DELETE FROM lists WHERE folder_id = ?1",
            params![folder_id.get()],
        )?;
        tx.execute("DELETE FROM folders WHERE id = ?1", params![folder_id.get()])?;
        tx.commit()?;

        tracing::debug!(folder_id = %folder_id, lists, tasks, "folder deleted");
        Ok(())
    }

    /// Moves a folder, with its lists, to the end of another space.
    pub fn move_folder(
        &mut self,
        folder_id: FolderId,
        space_id: SpaceId,
    ) -> Result<Effect, StoreError> {
        let tx = self.conn.transaction()?;
        let current_space = folder_space_tx(&tx, folder_id)?;
        if current_space == space_id {
            return Ok(Effect::Unchanged);
        }
        ensure_space_tx(&tx, space_id)?;

        let position = next_position_tx(&tx, SiblingGroup::FoldersOf(space_id))?;
        tx.execute(
            "UPDATE folders SET space_id = ?2, position = ?3 WHERE id = ?1",
            params![folder_id.get(), space_id.get(), position],
        )?;
        let lists = tx.execute(
            "UPDATE lists SET space_id = ?2 WHERE folder_id = ?1",
            params![folder_id.get(), space_id.get()],
        )?;
        tx.commit()?;

        tracing::debug!(
            folder_id = %folder_id,
            from = %current_space,
            to = %space_id,
            lists,
            "folder moved"
        );
        Ok(Effect::Applied)
    }

    /// Swaps the folder with its neighbour inside the same space.
    pub fn reorder_folder(
        &mut self,
        folder_id: FolderId,
        direction: Direction,
    ) -> Result<Effect, StoreError> {
        let tx = self.conn.transaction()?;
        let (space_id, position) = tx
            .query_row(
                "SELECT space_id, position FROM folders WHERE id = ?1",
                params![folder_id.get()],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )
            .optional()?
            .ok_or(StoreError::UnknownFolder(folder_id))?;

        let effect = reorder_tx(
            &tx,
            SiblingGroup::FoldersOf(SpaceId::new(space_id)),
            folder_id.get(),
            position,
            direction,
        )?;
        tx.commit()?;
        Ok(effect)
    }
}
