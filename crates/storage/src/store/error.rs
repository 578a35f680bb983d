#![forbid(unsafe_code)]

use st_core::ids::{FolderId, ListId, SpaceId, TaskId};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("unknown space (id={0})")]
    UnknownSpace(SpaceId),
    #[error("unknown folder (id={0})")]
    UnknownFolder(FolderId),
    #[error("unknown list (id={0})")]
    UnknownList(ListId),
    #[error("unknown task (id={0})")]
    UnknownTask(TaskId),
    #[error("foreign key enforcement could not be enabled")]
    ForeignKeysDisabled,
    #[error("schema migration {version} ({name}) failed: {source}")]
    Migration {
        version: i64,
        name: &'static str,
        source: Box<StoreError>,
    },
}

impl StoreError {
    /// Stable machine-readable code, independent of the display text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO",
            Self::Sql(_) => "SQLITE",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::UnknownSpace(_)
            | Self::UnknownFolder(_)
            | Self::UnknownList(_)
            | Self::UnknownTask(_) => "UNKNOWN_ID",
            Self::ForeignKeysDisabled => "FOREIGN_KEYS_DISABLED",
            Self::Migration { .. } => "MIGRATION_FAILED",
        }
    }

    /// True when the call referenced a row that does not exist.
    pub fn is_integrity_violation(&self) -> bool {
        self.code() == "UNKNOWN_ID"
    }
}
