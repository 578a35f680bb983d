#![forbid(unsafe_code)]

use crate::elapsed::whole_seconds_between;
use crate::ids::{FolderId, ListId, SpaceId, TaskId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Space {
    pub id: SpaceId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub id: FolderId,
    pub space_id: SpaceId,
    pub name: String,
    pub position: i64,
}

/// Where a list lives.
///
/// Storage keeps two columns (`space_id`, nullable `folder_id`); this enum is
/// the only shape the rest of the code sees, so a folder-scoped list always
/// carries the space the folder belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerRef {
    SpaceDirect {
        space_id: SpaceId,
    },
    UnderFolder {
        folder_id: FolderId,
        space_id: SpaceId,
    },
}

impl ContainerRef {
    pub fn from_columns(space_id: SpaceId, folder_id: Option<FolderId>) -> Self {
        match folder_id {
            Some(folder_id) => Self::UnderFolder {
                folder_id,
                space_id,
            },
            None => Self::SpaceDirect { space_id },
        }
    }

    pub fn space_id(self) -> SpaceId {
        match self {
            Self::SpaceDirect { space_id } | Self::UnderFolder { space_id, .. } => space_id,
        }
    }

    pub fn folder_id(self) -> Option<FolderId> {
        match self {
            Self::SpaceDirect { .. } => None,
            Self::UnderFolder { folder_id, .. } => Some(folder_id),
        }
    }

    /// The container a caller would name to reach this list's sibling group.
    pub fn target(self) -> ListTarget {
        match self {
            Self::SpaceDirect { space_id } => ListTarget::Space(space_id),
            Self::UnderFolder { folder_id, .. } => ListTarget::Folder(folder_id),
        }
    }
}

/// Destination for creating or moving a list. The owning space of a folder
/// target is resolved by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListTarget {
    Space(SpaceId),
    Folder(FolderId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    pub id: ListId,
    pub parent: ContainerRef,
    pub name: String,
    pub position: i64,
}

impl List {
    pub fn space_id(&self) -> SpaceId {
        self.parent.space_id()
    }

    pub fn folder_id(&self) -> Option<FolderId> {
        self.parent.folder_id()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { since_ms: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub list_id: ListId,
    pub title: String,
    pub done: bool,
    pub accumulated_seconds: i64,
    pub running_since_ms: Option<i64>,
}

impl Task {
    pub fn timer_state(&self) -> TimerState {
        match self.running_since_ms {
            Some(since_ms) => TimerState::Running { since_ms },
            None => TimerState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since_ms.is_some()
    }

    /// Accumulated time plus the in-flight interval of a running timer, as
    /// it would read at `now_ms`. Nothing is persisted.
    pub fn elapsed_seconds_at(&self, now_ms: i64) -> i64 {
        let running = self
            .running_since_ms
            .map(|since_ms| whole_seconds_between(since_ms, now_ms))
            .unwrap_or(0);
        self.accumulated_seconds.saturating_add(running)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderTree {
    pub folder: Folder,
    pub lists: Vec<List>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpaceTree {
    pub space: Space,
    pub folders: Vec<FolderTree>,
    /// Lists held directly by the space, outside any folder.
    pub lists: Vec<List>,
}
