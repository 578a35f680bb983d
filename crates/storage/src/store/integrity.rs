#![forbid(unsafe_code)]

use super::*;

/// Counts of rows that break the hierarchy's referential rules. Every field
/// is zero on a healthy store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub folders_without_space: i64,
    pub lists_without_parent: i64,
    pub lists_with_mismatched_space: i64,
    pub tasks_without_list: i64,
    pub tasks_with_negative_time: i64,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

impl SqliteStore {
    pub fn integrity_report(&self) -> Result<IntegrityReport, StoreError> {
        let count = |sql: &str| -> Result<i64, StoreError> {
            Ok(self.conn.query_row(sql, [], |row| row.get::<_, i64>(0))?)
        };

        Ok(IntegrityReport {
            folders_without_space: count(
                "SELECT COUNT(*) FROM folders \
                 WHERE NOT EXISTS (SELECT 1 FROM spaces WHERE spaces.id = folders.space_id)",
            )?,
            lists_without_parent: count(
                "SELECT COUNT(*) FROM lists \
                 WHERE NOT EXISTS (SELECT 1 FROM spaces WHERE spaces.id = lists.space_id) \
                    OR (lists.folder_id IS NOT NULL \
                        AND NOT EXISTS (SELECT 1 FROM folders WHERE folders.id = lists.folder_id))",
            )?,
            lists_with_mismatched_space: count(
                "SELECT COUNT(*) FROM lists JOIN folders ON folders.id = lists.folder_id \
                 WHERE lists.space_id IS NOT folders.space_id",
            )?,
            tasks_without_list: count(
                "SELECT COUNT(*) FROM tasks \
                 WHERE NOT EXISTS (SELECT 1 FROM lists WHERE lists.id = tasks.list_id)",
            )?,
            tasks_with_negative_time: count(
                "SELECT COUNT(*) FROM tasks WHERE accumulated_seconds < 0",
            )?,
        })
    }
}
