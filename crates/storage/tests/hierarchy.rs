#![forbid(unsafe_code)]

use st_core::ids::{FolderId, ListId, SpaceId, TaskId};
use st_core::model::{ContainerRef, ListTarget};
use st_storage::{Effect, SqliteStore, StoreError};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_storage_dir(label: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic enough for tests")
        .as_nanos();
    path.push(format!(
        "st-storage-hierarchy-{label}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::create_dir_all(&path).expect("temp storage dir must be creatable");
    path
}

fn assert_clean(store: &SqliteStore) {
    let report = store.integrity_report().expect("integrity report");
    assert!(report.is_clean(), "integrity violated: {report:?}");
}

#[test]
fn deleting_a_folder_cascades_to_lists_and_tasks_only() {
    let mut store = SqliteStore::open(temp_storage_dir("delete_folder")).expect("open store");

    let work = store.add_space("Work").expect("space");
    let eng = store.add_folder(work.id, "Eng").expect("folder");
    let sprint = store.add_list_to_folder(eng.id, "Sprint").expect("list");
    let task = store.add_task(sprint.id, "Fix bug").expect("task");

    store.delete_folder(eng.id).expect("delete folder");

    assert!(store.space(work.id).expect("space read").is_some());
    assert!(store.lists_in_space(work.id).expect("lists").is_empty());
    assert!(store.folder(eng.id).expect("folder read").is_none());
    assert!(store.task(task.id).expect("task read").is_none());
    let err = store.tasks(sprint.id).expect_err("old list is gone");
    assert!(matches!(err, StoreError::UnknownList(id) if id == sprint.id));
    assert_clean(&store);
}

#[test]
fn deleting_a_space_removes_everything_beneath_it() {
    let mut store = SqliteStore::open(temp_storage_dir("delete_space")).expect("open store");

    let work = store.add_space("Work").expect("space");
    let home = store.add_space("Home").expect("space");
    let eng = store.add_folder(work.id, "Eng").expect("folder");
    let ops = store.add_folder(work.id, "Ops").expect("folder");
    let sprint = store.add_list_to_folder(eng.id, "Sprint").expect("list");
    let oncall = store.add_list_to_folder(ops.id, "Oncall").expect("list");
    let direct = store.add_list_to_space(work.id, "Loose").expect("list");
    let chores = store.add_list_to_space(home.id, "Chores").expect("list");

    let mut doomed = Vec::new();
    for list in [sprint.id, oncall.id, direct.id] {
        doomed.push(store.add_task(list, "work item").expect("task").id);
    }
    let survivor = store.add_task(chores.id, "Laundry").expect("task");

    store.delete_space(work.id).expect("delete space");

    assert!(store.space(work.id).expect("read").is_none());
    for folder in [eng.id, ops.id] {
        assert!(store.folder(folder).expect("read").is_none());
    }
    for list in [sprint.id, oncall.id, direct.id] {
        assert!(store.list(list).expect("read").is_none());
    }
    for task in doomed {
        assert!(store.task(task).expect("read").is_none());
    }
    assert!(matches!(
        store.folders(work.id),
        Err(StoreError::UnknownSpace(id)) if id == work.id
    ));

    assert_eq!(store.tasks(chores.id).expect("tasks"), vec![survivor]);
    assert_clean(&store);
}

#[test]
fn deleting_a_list_removes_its_tasks() {
    let mut store = SqliteStore::open(temp_storage_dir("delete_list")).expect("open store");
    let space = store.add_space("Solo").expect("space");
    let list = store.add_list_to_space(space.id, "Groceries").expect("list");
    let milk = store.add_task(list.id, "Milk").expect("task");

    store.delete_list(list.id).expect("delete list");

    assert!(store.task(milk.id).expect("read").is_none());
    assert!(store.space(space.id).expect("read").is_some());
    assert_clean(&store);
}

#[test]
fn unknown_parents_are_rejected_without_side_effects() {
    let mut store = SqliteStore::open(temp_storage_dir("unknown_parents")).expect("open store");
    let before = store.tree().expect("tree");

    let err = store.add_folder(SpaceId::new(404), "Ghost").expect_err("no space");
    assert!(matches!(err, StoreError::UnknownSpace(_)));
    assert!(err.is_integrity_violation());

    let err = store
        .add_list_to_folder(FolderId::new(404), "Ghost")
        .expect_err("no folder");
    assert!(matches!(err, StoreError::UnknownFolder(_)));

    let err = store.add_task(ListId::new(404), "Ghost").expect_err("no list");
    assert!(matches!(err, StoreError::UnknownList(_)));

    let err = store.delete_space(SpaceId::new(404)).expect_err("no space");
    assert_eq!(err.code(), "UNKNOWN_ID");

    let err = store.rename_task(TaskId::new(404), "x").expect_err("no task");
    assert!(matches!(err, StoreError::UnknownTask(_)));

    assert_eq!(store.tree().expect("tree"), before);
}

#[test]
fn blank_names_are_rejected_at_the_store() {
    let mut store = SqliteStore::open(temp_storage_dir("blank_names")).expect("open store");
    let space = store.add_space("Work").expect("space");

    for name in ["", "   ", "\t\n"] {
        assert!(matches!(
            store.add_space(name),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.add_folder(space.id, name),
            Err(StoreError::InvalidInput(_))
        ));
        assert!(matches!(
            store.rename_space(space.id, name),
            Err(StoreError::InvalidInput(_))
        ));
    }

    // Names are stored untrimmed.
    let padded = store.add_space("  Padded ").expect("space");
    assert_eq!(
        store.space(padded.id).expect("read").expect("exists").name,
        "  Padded "
    );
}

#[test]
fn renames_touch_only_the_name() {
    let mut store = SqliteStore::open(temp_storage_dir("renames")).expect("open store");
    let space = store.add_space("Work").expect("space");
    let folder = store.add_folder(space.id, "Eng").expect("folder");
    let list = store.add_list_to_folder(folder.id, "Sprint").expect("list");
    let task = store.add_task(list.id, "Fix bug").expect("task");

    store.rename_space(space.id, "Job").expect("rename");
    store.rename_folder(folder.id, "Engineering").expect("rename");
    store.rename_list(list.id, "Sprint 2").expect("rename");
    store.rename_task(task.id, "Fix the bug").expect("rename");

    let folder_after = store.folder(folder.id).expect("read").expect("exists");
    assert_eq!(folder_after.name, "Engineering");
    assert_eq!(folder_after.position, folder.position);
    assert_eq!(folder_after.space_id, space.id);

    let list_after = store.list(list.id).expect("read").expect("exists");
    assert_eq!(list_after.name, "Sprint 2");
    assert_eq!(list_after.parent, list.parent);

    let task_after = store.task(task.id).expect("read").expect("exists");
    assert_eq!(task_after.title, "Fix the bug");
    assert_eq!(store.space(space.id).expect("read").expect("exists").name, "Job");
}

#[test]
fn moving_a_list_into_a_folder_of_another_space_adopts_that_space() {
    let mut store = SqliteStore::open(temp_storage_dir("move_list_folder")).expect("open store");
    let work = store.add_space("Work").expect("space");
    let home = store.add_space("Home").expect("space");
    let projects = store.add_folder(home.id, "Projects").expect("folder");
    let existing = store.add_list_to_folder(projects.id, "Garden").expect("list");
    let list = store.add_list_to_space(work.id, "Someday").expect("list");

    let effect = store
        .move_list_to_folder(list.id, projects.id)
        .expect("move");
    assert_eq!(effect, Effect::Applied);

    let moved = store.list(list.id).expect("read").expect("exists");
    assert_eq!(moved.folder_id(), Some(projects.id));
    assert_eq!(moved.space_id(), home.id);
    assert!(moved.position > existing.position);
    assert!(store.lists(ListTarget::Space(work.id)).expect("lists").is_empty());

    let again = store
        .move_list_to_folder(list.id, projects.id)
        .expect("move again");
    assert_eq!(again, Effect::Unchanged);
    assert_clean(&store);
}

#[test]
fn moving_a_list_to_a_space_clears_its_folder() {
    let mut store = SqliteStore::open(temp_storage_dir("move_list_space")).expect("open store");
    let work = store.add_space("Work").expect("space");
    let eng = store.add_folder(work.id, "Eng").expect("folder");
    let list = store.add_list_to_folder(eng.id, "Sprint").expect("list");
    let first = store.add_list_to_space(work.id, "Inbox").expect("list");

    assert_eq!(
        store.move_list_to_space(list.id, work.id).expect("move"),
        Effect::Applied
    );

    let moved = store.list(list.id).expect("read").expect("exists");
    assert_eq!(moved.parent, ContainerRef::SpaceDirect { space_id: work.id });
    let siblings = store.lists(ListTarget::Space(work.id)).expect("lists");
    assert_eq!(
        siblings.iter().map(|list| list.id).collect::<Vec<_>>(),
        vec![first.id, list.id]
    );
    assert!(store.lists(ListTarget::Folder(eng.id)).expect("lists").is_empty());

    assert!(matches!(
        store.move_list_to_space(list.id, SpaceId::new(404)),
        Err(StoreError::UnknownSpace(_))
    ));
    assert_clean(&store);
}

#[test]
fn moving_a_folder_keeps_its_lists_in_sync() {
    let mut store = SqliteStore::open(temp_storage_dir("move_folder")).expect("open store");
    let work = store.add_space("Work").expect("space");
    let home = store.add_space("Home").expect("space");
    let existing = store.add_folder(home.id, "Chores").expect("folder");
    let eng = store.add_folder(work.id, "Eng").expect("folder");
    let sprint = store.add_list_to_folder(eng.id, "Sprint").expect("list");
    let backlog = store.add_list_to_folder(eng.id, "Backlog").expect("list");
    let task = store.add_task(sprint.id, "Fix bug").expect("task");

    assert_eq!(
        store.move_folder(eng.id, work.id).expect("same space"),
        Effect::Unchanged
    );
    assert_eq!(
        store.move_folder(eng.id, home.id).expect("move"),
        Effect::Applied
    );

    let moved = store.folder(eng.id).expect("read").expect("exists");
    assert_eq!(moved.space_id, home.id);
    assert!(moved.position > existing.position);

    for list in [sprint.id, backlog.id] {
        let list = store.list(list).expect("read").expect("exists");
        assert_eq!(
            list.parent,
            ContainerRef::UnderFolder {
                folder_id: eng.id,
                space_id: home.id
            }
        );
    }
    assert_eq!(store.task(task.id).expect("read").expect("exists").list_id, sprint.id);
    assert!(store.lists_in_space(work.id).expect("lists").is_empty());
    assert_eq!(store.lists_in_space(home.id).expect("lists").len(), 2);

    assert!(matches!(
        store.move_folder(eng.id, SpaceId::new(404)),
        Err(StoreError::UnknownSpace(_))
    ));
    assert_clean(&store);
}

#[test]
fn tree_reflects_sibling_order_and_placement() {
    let mut store = SqliteStore::open(temp_storage_dir("tree")).expect("open store");
    let work = store.add_space("Work").expect("space");
    let eng = store.add_folder(work.id, "Eng").expect("folder");
    let ops = store.add_folder(work.id, "Ops").expect("folder");
    let sprint = store.add_list_to_folder(eng.id, "Sprint").expect("list");
    let loose = store.add_list_to_space(work.id, "Loose").expect("list");

    let tree = store.tree().expect("tree");
    let node = tree
        .iter()
        .find(|node| node.space.id == work.id)
        .expect("work present");

    assert_eq!(
        node.folders
            .iter()
            .map(|folder| folder.folder.id)
            .collect::<Vec<_>>(),
        vec![eng.id, ops.id]
    );
    assert_eq!(node.folders[0].lists, vec![sprint.clone()]);
    assert!(node.folders[1].lists.is_empty());
    assert_eq!(node.lists, vec![loose.clone()]);

    let in_space = store.lists_in_space(work.id).expect("lists");
    assert_eq!(in_space, vec![loose, sprint]);
}

#[test]
fn toggling_done_flips_and_reports_state() {
    let mut store = SqliteStore::open(temp_storage_dir("toggle_done")).expect("open store");
    let space = store.add_space("Solo").expect("space");
    let list = store.add_list_to_space(space.id, "Today").expect("list");
    let first = store.add_task(list.id, "First").expect("task");
    let second = store.add_task(list.id, "Second").expect("task");

    assert!(store.toggle_done(first.id).expect("toggle"));
    assert!(!store.toggle_done(first.id).expect("toggle"));
    assert!(store.toggle_done(second.id).expect("toggle"));

    let tasks = store.tasks(list.id).expect("tasks");
    assert_eq!(
        tasks.iter().map(|task| (task.id, task.done)).collect::<Vec<_>>(),
        vec![(first.id, false), (second.id, true)]
    );

    store.delete_task(second.id).expect("delete");
    assert!(matches!(
        store.delete_task(second.id),
        Err(StoreError::UnknownTask(_))
    ));
    assert!(matches!(
        store.toggle_done(TaskId::new(404)),
        Err(StoreError::UnknownTask(_))
    ));
}
