#![forbid(unsafe_code)]

mod error;
mod folders;
mod integrity;
mod lists;
mod spaces;
mod support;
mod tasks;
mod timer;
mod tree;

pub use error::StoreError;
pub use integrity::IntegrityReport;

use rusqlite::{Connection, OptionalExtension, Transaction, params};
use st_core::clock::{Clock, SystemClock};
use st_core::ids::{FolderId, ListId, SpaceId, TaskId};
use st_core::model::{ContainerRef, Folder, List, ListTarget, Space, Task};
use st_core::names::validate_name;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use support::*;

pub const DB_FILE_NAME: &str = "spacetime.db";

/// Outcome of a mutation that is allowed to be a no-op.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Applied,
    Unchanged,
}

impl Effect {
    pub fn is_applied(self) -> bool {
        matches!(self, Effect::Applied)
    }
}

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
    clock: Arc<dyn Clock>,
    schema_version: i64,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with_clock(storage_dir, Arc::new(SystemClock))
    }

    pub fn open_with_clock(
        storage_dir: impl AsRef<Path>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join(DB_FILE_NAME);
        let mut conn = Connection::open(&db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;

        let schema_version = prepare_schema(&mut conn, clock.now_ms())?;
        tracing::debug!(path = %db_path.display(), schema_version, "store opened");

        Ok(Self {
            conn,
            storage_dir,
            clock,
            schema_version,
        })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.storage_dir.join(DB_FILE_NAME)
    }

    /// Highest migration version applied to this store.
    pub fn schema_version(&self) -> i64 {
        self.schema_version
    }

    /// Current time in Unix milliseconds, read from the store's clock.
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }
}

fn check_name(value: &str) -> Result<(), StoreError> {
    validate_name(value).map_err(|_| StoreError::InvalidInput("name must not be blank"))
}

fn check_title(value: &str) -> Result<(), StoreError> {
    validate_name(value).map_err(|_| StoreError::InvalidInput("title must not be blank"))
}

fn ensure_space_tx(tx: &Transaction<'_>, space_id: SpaceId) -> Result<(), StoreError> {
    let exists = tx
        .query_row(
            "SELECT 1 FROM spaces WHERE id = ?1",
            params![space_id.get()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some();

    if exists {
        Ok(())
    } else {
        Err(StoreError::UnknownSpace(space_id))
    }
}

fn folder_space_tx(tx: &Transaction<'_>, folder_id: FolderId) -> Result<SpaceId, StoreError> {
    tx.query_row(
        "SELECT space_id FROM folders WHERE id = ?1",
        params![folder_id.get()],
        |row| row.get::<_, i64>(0),
    )
    .optional()?
    .map(SpaceId::new)
    .ok_or(StoreError::UnknownFolder(folder_id))
}

/// Turns a caller-facing destination into a fully resolved parent, failing
/// when the named container does not exist.
fn resolve_target_tx(
    tx: &Transaction<'_>,
    target: ListTarget,
) -> Result<ContainerRef, StoreError> {
    match target {
        ListTarget::Space(space_id) => {
            ensure_space_tx(tx, space_id)?;
            Ok(ContainerRef::SpaceDirect { space_id })
        }
        ListTarget::Folder(folder_id) => {
            let space_id = folder_space_tx(tx, folder_id)?;
            Ok(ContainerRef::UnderFolder {
                folder_id,
                space_id,
            })
        }
    }
}

fn list_tx(tx: &Transaction<'_>, list_id: ListId) -> Result<List, StoreError> {
    let sql = format!("SELECT {LIST_COLUMNS} FROM lists WHERE lists.id = ?1");
    tx.query_row(&sql, params![list_id.get()], list_from_row)
        .optional()?
        .ok_or(StoreError::UnknownList(list_id))
}

fn task_exists(conn: &Connection, task_id: TaskId) -> Result<bool, StoreError> {
    Ok(conn
        .query_row(
            "SELECT 1 FROM tasks WHERE id = ?1",
            params![task_id.get()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some())
}
