#![forbid(unsafe_code)]

use super::*;
use st_core::model::Direction;

impl SqliteStore {
    /// One sibling group: the space-direct lists of a space, or the lists of
    /// a folder, in sibling order.
    pub fn lists(&self, target: ListTarget) -> Result<Vec<List>, StoreError> {
        let (filter, id) = match target {
            ListTarget::Space(space_id) => {
                if self.space(space_id)?.is_none() {
                    return Err(StoreError::UnknownSpace(space_id));
                }
                ("lists.space_id = ?1 AND lists.folder_id IS NULL", space_id.get())
            }
            ListTarget::Folder(folder_id) => {
                if self.folder(folder_id)?.is_none() {
                    return Err(StoreError::UnknownFolder(folder_id));
                }
                ("lists.folder_id = ?1", folder_id.get())
            }
        };
        let sql = format!(
            "SELECT {LIST_COLUMNS} FROM lists WHERE {filter} ORDER BY lists.position ASC, lists.id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![id], list_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Every list owned by the space, space-direct lists first, then folder
    /// lists grouped by folder in folder order.
    pub fn lists_in_space(&self, space_id: SpaceId) -> Result<Vec<List>, StoreError> {
        if self.space(space_id)?.is_none() {
            return Err(StoreError::UnknownSpace(space_id));
        }
        let sql = format!(
            r#"
            SELECT {LIST_COLUMNS}
            FROM lists
            LEFT JOIN folders ON folders.id = lists.folder_id
            WHERE lists.space_id = ?1
            ORDER BY lists.folder_id IS NOT NULL, folders.position, folders.id, lists.position, lists.id
            "#
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![space_id.get()], list_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn list(&self, list_id: ListId) -> Result<Option<List>, StoreError> {
        let sql = format!("SELECT {LIST_COLUMNS} FROM lists WHERE lists.id = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![list_id.get()], list_from_row)
            .optional()?)
    }

    /// Appends a list at the end of the target container.
    pub fn add_list(&mut self, target: ListTarget, name: &str) -> Result<List, StoreError> {
        check_name(name)?;
        let tx = self.conn.transaction()?;
        let parent = resolve_target_tx(&tx, target)?;
        let position = next_position_tx(&tx, SiblingGroup::ListsOf(parent))?;
        tx.execute(
            "INSERT INTO lists(space_id, folder_id, name, position) VALUES (?1, ?2, ?3, ?4)",
            params![
                parent.space_id().get(),
                parent.folder_id().map(FolderId::get),
                name,
                position
            ],
        )?;
        let id = ListId::new(tx.last_insert_rowid());
        tx.commit()?;

        tracing::debug!(list_id = %id, parent = ?parent, "list added");
        Ok(List {
            id,
            parent,
            name: name.to_string(),
            position,
        })
    }

    pub fn add_list_to_space(&mut self, space_id: SpaceId, name: &str) -> Result<List, StoreError> {
        self.add_list(ListTarget::Space(space_id), name)
    }

    pub fn add_list_to_folder(
        &mut self,
        folder_id: FolderId,
        name: &str,
    ) -> Result<List, StoreError> {
        self.add_list(ListTarget::Folder(folder_id), name)
    }

    pub fn rename_list(&mut self, list_id: ListId, name: &str) -> Result<(), StoreError> {
        check_name(name)?;
        let updated = self.conn.execute(
            "UPDATE lists SET name = ?2 WHERE id = ?1",
            params![list_id.get(), name],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownList(list_id));
        }
        Ok(())
    }

    /// Removes the list and its tasks.
    pub fn delete_list(&mut self, list_id: ListId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        list_tx(&tx, list_id)?;
        let tasks = tx.execute(
            "DELETE FROM tasks WHERE list_id = ?1",
            params![list_id.get()],
        )?;
        tx.execute("DELETE FROM lists WHERE id = ?1", params![list_id.get()])?;
        tx.commit()?;

        tracing::debug!(list_id = %list_id, tasks, "list deleted");
        Ok(())
    }

    /// Moves a list to the end of another container. The stored space always
    /// follows the destination, including when the destination is a folder in
    /// a different space.
    pub fn move_list(&mut self, list_id: ListId, target: ListTarget) -> Result<Effect, StoreError> {
        let tx = self.conn.transaction()?;
        let list = list_tx(&tx, list_id)?;
        let parent = resolve_target_tx(&tx, target)?;
        if list.parent == parent {
            return Ok(Effect::Unchanged);
        }

        let position = next_position_tx(&tx, SiblingGroup::ListsOf(parent))?;
        tx.execute(
            "UPDATE lists SET space_id = ?2, folder_id = ?3, position = ?4 WHERE id = ?1",
            params![
                list_id.get(),
                parent.space_id().get(),
                parent.folder_id().map(FolderId::get),
                position
            ],
        )?;
        tx.commit()?;

        tracing::debug!(list_id = %list_id, from = ?list.parent, to = ?parent, "list moved");
        Ok(Effect::Applied)
    }

    pub fn move_list_to_space(
        &mut self,
        list_id: ListId,
        space_id: SpaceId,
    ) -> Result<Effect, StoreError> {
        self.move_list(list_id, ListTarget::Space(space_id))
    }

    pub fn move_list_to_folder(
        &mut self,
        list_id: ListId,
        folder_id: FolderId,
    ) -> Result<Effect, StoreError> {
        self.move_list(list_id, ListTarget::Folder(folder_id))
    }

    /// Swaps the list with its neighbour among lists sharing the same space
    /// and folder (both absent counts as the same container).
    pub fn reorder_list(
        &mut self,
        list_id: ListId,
        direction: Direction,
    ) -> Result<Effect, StoreError> {
        let tx = self.conn.transaction()?;
        let list = list_tx(&tx, list_id)?;
        let effect = reorder_tx(
            &tx,
            SiblingGroup::ListsOf(list.parent),
            list_id.get(),
            list.position,
            direction,
        )?;
        tx.commit()?;
        Ok(effect)
    }
}
