#![forbid(unsafe_code)]

use crate::args::{Command, FolderCommand, ListCommand, SpaceCommand, TaskCommand};
use crate::render;
use serde_json::{Value, json};
use st_core::model::Direction;
use st_storage::{SqliteStore, StoreError};

pub(crate) fn run(store: &mut SqliteStore, command: Command) -> Result<Value, StoreError> {
    match command {
        Command::Tree => Ok(render::tree(&store.tree()?)),
        Command::Check => Ok(render::integrity(&store.integrity_report()?)),
        Command::Space(command) => space(store, command),
        Command::Folder(command) => folder(store, command),
        Command::List(command) => list(store, command),
        Command::Task(command) => task(store, command),
    }
}

fn ok() -> Value {
    json!({ "ok": true })
}

fn space(store: &mut SqliteStore, command: SpaceCommand) -> Result<Value, StoreError> {
    match command {
        SpaceCommand::Add { name } => Ok(render::space(&store.add_space(&name)?)),
        SpaceCommand::Rename { id, name } => {
            store.rename_space(id, &name)?;
            Ok(ok())
        }
        SpaceCommand::Delete { id } => {
            store.delete_space(id)?;
            Ok(ok())
        }
    }
}

fn folder(store: &mut SqliteStore, command: FolderCommand) -> Result<Value, StoreError> {
    match command {
        FolderCommand::Add { space, name } => Ok(render::folder(&store.add_folder(space, &name)?)),
        FolderCommand::Rename { id, name } => {
            store.rename_folder(id, &name)?;
            Ok(ok())
        }
        FolderCommand::Delete { id } => {
            store.delete_folder(id)?;
            Ok(ok())
        }
        FolderCommand::Move { id, space } => Ok(render::effect(store.move_folder(id, space)?)),
        FolderCommand::Up { id } => Ok(render::effect(store.reorder_folder(id, Direction::Up)?)),
        FolderCommand::Down { id } => {
            Ok(render::effect(store.reorder_folder(id, Direction::Down)?))
        }
    }
}

fn list(store: &mut SqliteStore, command: ListCommand) -> Result<Value, StoreError> {
    match command {
        ListCommand::Add { target, name } => {
            Ok(render::list(&store.add_list(target.target(), &name)?))
        }
        ListCommand::Rename { id, name } => {
            store.rename_list(id, &name)?;
            Ok(ok())
        }
        ListCommand::Delete { id } => {
            store.delete_list(id)?;
            Ok(ok())
        }
        ListCommand::Move { id, target } => {
            Ok(render::effect(store.move_list(id, target.target())?))
        }
        ListCommand::Up { id } => Ok(render::effect(store.reorder_list(id, Direction::Up)?)),
        ListCommand::Down { id } => Ok(render::effect(store.reorder_list(id, Direction::Down)?)),
    }
}

fn task(store: &mut SqliteStore, command: TaskCommand) -> Result<Value, StoreError> {
    let now_ms = store.now_ms();
    match command {
        TaskCommand::Ls { list } => Ok(Value::Array(
            store
                .tasks(list)?
                .iter()
                .map(|task| render::task(task, now_ms))
                .collect(),
        )),
        TaskCommand::Add { list, title } => Ok(render::task(&store.add_task(list, &title)?, now_ms)),
        TaskCommand::Rename { id, title } => {
            store.rename_task(id, &title)?;
            Ok(ok())
        }
        TaskCommand::Done { id } => Ok(json!({ "done": store.toggle_done(id)? })),
        TaskCommand::Delete { id } => {
            store.delete_task(id)?;
            Ok(ok())
        }
        TaskCommand::Start { id } => Ok(render::effect(store.start_timer(id)?)),
        TaskCommand::Stop { id } => Ok(render::effect(store.stop_timer(id)?)),
        TaskCommand::Reset { id } => {
            store.reset_timer(id)?;
            Ok(ok())
        }
    }
}
