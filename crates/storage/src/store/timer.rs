#![forbid(unsafe_code)]

//! Per-task stopwatch.
//!
//! A running timer is nothing more than a persisted `running_since`
//! timestamp, so it survives restarts; elapsed time is settled only when the
//! timer stops.

use super::*;
use st_core::elapsed::whole_seconds_between;

impl SqliteStore {
    /// Starts the timer unless it is already running. A second start keeps
    /// the original timestamp.
    pub fn start_timer(&mut self, task_id: TaskId) -> Result<Effect, StoreError> {
        let now_ms = self.now_ms();
        let updated = self.conn.execute(
            "UPDATE tasks SET running_since = ?2 WHERE id = ?1 AND running_since IS NULL",
            params![task_id.get(), now_ms],
        )?;
        if updated > 0 {
            tracing::debug!(task_id = %task_id, now_ms, "timer started");
            return Ok(Effect::Applied);
        }
        if task_exists(&self.conn, task_id)? {
            Ok(Effect::Unchanged)
        } else {
            Err(StoreError::UnknownTask(task_id))
        }
    }

    /// Stops a running timer and credits the whole seconds since it started.
    pub fn stop_timer(&mut self, task_id: TaskId) -> Result<Effect, StoreError> {
        let now_ms = self.now_ms();
        let tx = self.conn.transaction()?;
        let running_since = tx
            .query_row(
                "SELECT running_since FROM tasks WHERE id = ?1",
                params![task_id.get()],
                |row| row.get::<_, Option<i64>>(0),
            )
            .optional()?
            .ok_or(StoreError::UnknownTask(task_id))?;

        let Some(since_ms) = running_since else {
            return Ok(Effect::Unchanged);
        };

        let credited = whole_seconds_between(since_ms, now_ms);
        tx.execute(
            r#"
            UPDATE tasks
            SET accumulated_seconds = accumulated_seconds + ?2, running_since = NULL
            WHERE id = ?1
            "#,
            params![task_id.get(), credited],
        )?;
        tx.commit()?;

        tracing::debug!(task_id = %task_id, credited, "timer stopped");
        Ok(Effect::Applied)
    }

    /// Zeroes the accumulator and stops the timer. A running interval is
    /// discarded, not credited.
    pub fn reset_timer(&mut self, task_id: TaskId) -> Result<(), StoreError> {
        let updated = self.conn.execute(
            "UPDATE tasks SET accumulated_seconds = 0, running_since = NULL WHERE id = ?1",
            params![task_id.get()],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownTask(task_id));
        }
        tracing::debug!(task_id = %task_id, "timer reset");
        Ok(())
    }

    /// Elapsed seconds of a task as of now, including a running interval.
    pub fn elapsed_seconds(&self, task_id: TaskId) -> Result<i64, StoreError> {
        let task = self
            .task(task_id)?
            .ok_or(StoreError::UnknownTask(task_id))?;
        Ok(task.elapsed_seconds_at(self.now_ms()))
    }
}
