#![forbid(unsafe_code)]

use rusqlite::Row;
use st_core::ids::{FolderId, ListId, SpaceId, TaskId};
use st_core::model::{ContainerRef, Folder, List, Space, Task};

pub(in crate::store) const SPACE_COLUMNS: &str = "spaces.id, spaces.name";
pub(in crate::store) const FOLDER_COLUMNS: &str =
    "folders.id, folders.space_id, folders.name, folders.position";
pub(in crate::store) const LIST_COLUMNS: &str =
    "lists.id, lists.space_id, lists.folder_id, lists.name, lists.position";
pub(in crate::store) const TASK_COLUMNS: &str = "tasks.id, tasks.list_id, tasks.title, tasks.done, tasks.accumulated_seconds, tasks.running_since";

pub(in crate::store) fn space_from_row(row: &Row<'_>) -> rusqlite::Result<Space> {
    Ok(Space {
        id: SpaceId::new(row.get(0)?),
        name: row.get(1)?,
    })
}

pub(in crate::store) fn folder_from_row(row: &Row<'_>) -> rusqlite::Result<Folder> {
    Ok(Folder {
        id: FolderId::new(row.get(0)?),
        space_id: SpaceId::new(row.get(1)?),
        name: row.get(2)?,
        position: row.get(3)?,
    })
}

pub(in crate::store) fn list_from_row(row: &Row<'_>) -> rusqlite::Result<List> {
    let space_id = SpaceId::new(row.get(1)?);
    let folder_id = row.get::<_, Option<i64>>(2)?.map(FolderId::new);
    Ok(List {
        id: ListId::new(row.get(0)?),
        parent: ContainerRef::from_columns(space_id, folder_id),
        name: row.get(3)?,
        position: row.get(4)?,
    })
}

pub(in crate::store) fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: TaskId::new(row.get(0)?),
        list_id: ListId::new(row.get(1)?),
        title: row.get(2)?,
        done: row.get::<_, i64>(3)? != 0,
        accumulated_seconds: row.get(4)?,
        running_since_ms: row.get(5)?,
    })
}
