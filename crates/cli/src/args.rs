#![forbid(unsafe_code)]

use clap::{Args, Parser, Subcommand};
use st_core::ids::{FolderId, ListId, SpaceId, TaskId};
use st_core::model::ListTarget;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "spacetime", about = "Spaces, folders, lists and task timers on a local store")]
pub(crate) struct Cli {
    /// Directory holding the store file.
    #[arg(long, env = "SPACETIME_STORAGE_DIR", default_value = ".spacetime", global = true)]
    pub(crate) storage_dir: PathBuf,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print every space with its folders and lists.
    Tree,
    /// Report rows that violate the hierarchy rules.
    Check,
    #[command(subcommand)]
    Space(SpaceCommand),
    #[command(subcommand)]
    Folder(FolderCommand),
    #[command(subcommand)]
    List(ListCommand),
    #[command(subcommand)]
    Task(TaskCommand),
}

#[derive(Debug, Subcommand)]
pub(crate) enum SpaceCommand {
    Add { name: String },
    Rename { id: SpaceId, name: String },
    Delete { id: SpaceId },
}

#[derive(Debug, Subcommand)]
pub(crate) enum FolderCommand {
    Add { space: SpaceId, name: String },
    Rename { id: FolderId, name: String },
    Delete { id: FolderId },
    /// Move a folder, with its lists, into another space.
    Move { id: FolderId, space: SpaceId },
    Up { id: FolderId },
    Down { id: FolderId },
}

#[derive(Debug, Subcommand)]
pub(crate) enum ListCommand {
    Add {
        #[command(flatten)]
        target: TargetArgs,
        name: String,
    },
    Rename { id: ListId, name: String },
    Delete { id: ListId },
    Move {
        id: ListId,
        #[command(flatten)]
        target: TargetArgs,
    },
    Up { id: ListId },
    Down { id: ListId },
}

#[derive(Debug, Subcommand)]
pub(crate) enum TaskCommand {
    /// List the tasks of a list.
    Ls { list: ListId },
    Add { list: ListId, title: String },
    Rename { id: TaskId, title: String },
    /// Toggle the done flag.
    Done { id: TaskId },
    Delete { id: TaskId },
    Start { id: TaskId },
    Stop { id: TaskId },
    Reset { id: TaskId },
}

/// Exactly one container for list placement.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub(crate) struct TargetArgs {
    /// Place the list directly in this space.
    #[arg(long)]
    pub(crate) space: Option<SpaceId>,
    /// Place the list in this folder.
    #[arg(long)]
    pub(crate) folder: Option<FolderId>,
}

impl TargetArgs {
    pub(crate) fn target(&self) -> ListTarget {
        match (self.space, self.folder) {
            (_, Some(folder_id)) => ListTarget::Folder(folder_id),
            (Some(space_id), None) => ListTarget::Space(space_id),
            // clap's group enforces one of the two.
            (None, None) => unreachable!("container group is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_add_requires_one_container() {
        let parsed = Cli::try_parse_from(["spacetime", "list", "add", "--folder", "3", "Sprint"])
            .expect("folder target parses");
        match parsed.command {
            Command::List(ListCommand::Add { target, name }) => {
                assert_eq!(target.target(), ListTarget::Folder(FolderId::new(3)));
                assert_eq!(name, "Sprint");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["spacetime", "list", "add", "Sprint"]).is_err());
        assert!(
            Cli::try_parse_from([
                "spacetime", "list", "add", "--space", "1", "--folder", "2", "Sprint"
            ])
            .is_err()
        );
    }

    #[test]
    fn storage_dir_flag_is_global() {
        let parsed = Cli::try_parse_from(["spacetime", "task", "start", "5", "--storage-dir", "/tmp/st"])
            .expect("global flag parses after subcommand");
        assert_eq!(parsed.storage_dir, PathBuf::from("/tmp/st"));
        assert!(matches!(
            parsed.command,
            Command::Task(TaskCommand::Start { id }) if id == TaskId::new(5)
        ));
    }

    #[test]
    fn ids_must_be_integers() {
        assert!(Cli::try_parse_from(["spacetime", "space", "delete", "abc"]).is_err());
    }
}
