#![forbid(unsafe_code)]

use serde_json::{Value, json};
use st_core::elapsed::format_elapsed;
use st_core::model::{ContainerRef, Folder, List, Space, SpaceTree, Task};
use st_storage::{Effect, IntegrityReport};

pub(crate) fn space(space: &Space) -> Value {
    json!({ "id": space.id.get(), "name": space.name })
}

pub(crate) fn folder(folder: &Folder) -> Value {
    json!({
        "id": folder.id.get(),
        "space_id": folder.space_id.get(),
        "name": folder.name,
        "position": folder.position,
    })
}

pub(crate) fn list(list: &List) -> Value {
    let parent = match list.parent {
        ContainerRef::SpaceDirect { space_id } => json!({ "space_id": space_id.get() }),
        ContainerRef::UnderFolder {
            folder_id,
            space_id,
        } => json!({ "space_id": space_id.get(), "folder_id": folder_id.get() }),
    };
    json!({
        "id": list.id.get(),
        "parent": parent,
        "name": list.name,
        "position": list.position,
    })
}

pub(crate) fn task(task: &Task, now_ms: i64) -> Value {
    let elapsed = task.elapsed_seconds_at(now_ms);
    json!({
        "id": task.id.get(),
        "list_id": task.list_id.get(),
        "title": task.title,
        "done": task.done,
        "accumulated_seconds": task.accumulated_seconds,
        "running_since_ms": task.running_since_ms,
        "elapsed_seconds": elapsed,
        "elapsed": format_elapsed(elapsed),
    })
}

pub(crate) fn tree(spaces: &[SpaceTree]) -> Value {
    Value::Array(
        spaces
            .iter()
            .map(|node| {
                let folders = node
                    .folders
                    .iter()
                    .map(|folder_node| {
                        let mut value = folder(&folder_node.folder);
                        value["lists"] = folder_node.lists.iter().map(list).collect();
                        value
                    })
                    .collect::<Vec<_>>();
                let mut value = space(&node.space);
                value["folders"] = Value::Array(folders);
                value["lists"] = node.lists.iter().map(list).collect();
                value
            })
            .collect(),
    )
}

pub(crate) fn effect(effect: Effect) -> Value {
    json!({ "changed": effect.is_applied() })
}

pub(crate) fn integrity(report: &IntegrityReport) -> Value {
    json!({
        "clean": report.is_clean(),
        "folders_without_space": report.folders_without_space,
        "lists_without_parent": report.lists_without_parent,
        "lists_with_mismatched_space": report.lists_with_mismatched_space,
        "tasks_without_list": report.tasks_without_list,
        "tasks_with_negative_time": report.tasks_with_negative_time,
    })
}
