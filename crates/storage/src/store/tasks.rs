#![forbid(unsafe_code)]

use super::*;

impl SqliteStore {
    /// Tasks of a list in creation order. Fails for a list that does not
    /// exist, including one removed by a cascade.
    pub fn tasks(&self, list_id: ListId) -> Result<Vec<Task>, StoreError> {
        if self.list(list_id)?.is_none() {
            return Err(StoreError::UnknownList(list_id));
        }
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE tasks.list_id = ?1 ORDER BY tasks.id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![list_id.get()], task_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn task(&self, task_id: TaskId) -> Result<Option<Task>, StoreError> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE tasks.id = ?1");
        Ok(self
            .conn
            .query_row(&sql, params![task_id.get()], task_from_row)
            .optional()?)
    }

    pub fn add_task(&mut self, list_id: ListId, title: &str) -> Result<Task, StoreError> {
        check_title(title)?;
        let tx = self.conn.transaction()?;
        list_tx(&tx, list_id)?;
        tx.execute(
            "INSERT INTO tasks(list_id, title, done, accumulated_seconds, running_since) \
             VALUES (?1, ?2, 0, 0, NULL)",
            params![list_id.get(), title],
        )?;
        let id = TaskId::new(tx.last_insert_rowid());
        tx.commit()?;

        tracing::debug!(task_id = %id, list_id = %list_id, "task added");
        Ok(Task {
            id,
            list_id,
            title: title.to_string(),
            done: false,
            accumulated_seconds: 0,
            running_since_ms: None,
        })
    }

    /// Flips the done flag and returns the new value.
    pub fn toggle_done(&mut self, task_id: TaskId) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let updated = tx.execute(
            "UPDATE tasks SET done = CASE WHEN done = 0 THEN 1 ELSE 0 END WHERE id = ?1",
            params![task_id.get()],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownTask(task_id));
        }
        let done = tx.query_row(
            "SELECT done FROM tasks WHERE id = ?1",
            params![task_id.get()],
            |row| row.get::<_, i64>(0),
        )? != 0;
        tx.commit()?;
        Ok(done)
    }

    pub fn rename_task(&mut self, task_id: TaskId, title: &str) -> Result<(), StoreError> {
        check_title(title)?;
        let updated = self.conn.execute(
            "UPDATE tasks SET title = ?2 WHERE id = ?1",
            params![task_id.get(), title],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownTask(task_id));
        }
        Ok(())
    }

    pub fn delete_task(&mut self, task_id: TaskId) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![task_id.get()])?;
        if deleted == 0 {
            return Err(StoreError::UnknownTask(task_id));
        }
        tracing::debug!(task_id = %task_id, "task deleted");
        Ok(())
    }
}
