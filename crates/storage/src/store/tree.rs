#![forbid(unsafe_code)]

use super::*;
use st_core::model::{FolderTree, SpaceTree};
use std::collections::HashMap;

impl SqliteStore {
    /// The whole hierarchy without tasks, every level in sibling order.
    pub fn tree(&self) -> Result<Vec<SpaceTree>, StoreError> {
        let folders = {
            let sql = format!(
                "SELECT {FOLDER_COLUMNS} FROM folders ORDER BY folders.position ASC, folders.id ASC"
            );
            let mut stmt = self.conn.prepare(&sql)?;
            let rows = stmt.query_map([], folder_from_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        };
        let lists = {
            let sql = format!(
                "SELECT {LIST_COLUMNS} FROM lists ORDER BY lists.position ASC, lists.id ASC"
            );
            let mut stmt = self.conn.prepare(&sql)?;
            let rows = stmt.query_map([], list_from_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        };

        let mut folder_lists: HashMap<FolderId, Vec<List>> = HashMap::new();
        let mut space_lists: HashMap<SpaceId, Vec<List>> = HashMap::new();
        for list in lists {
            match list.parent {
                ContainerRef::UnderFolder { folder_id, .. } => {
                    folder_lists.entry(folder_id).or_default().push(list);
                }
                ContainerRef::SpaceDirect { space_id } => {
                    space_lists.entry(space_id).or_default().push(list);
                }
            }
        }

        let mut space_folders: HashMap<SpaceId, Vec<FolderTree>> = HashMap::new();
        for folder in folders {
            let lists = folder_lists.remove(&folder.id).unwrap_or_default();
            space_folders
                .entry(folder.space_id)
                .or_default()
                .push(FolderTree { folder, lists });
        }

        Ok(self
            .spaces()?
            .into_iter()
            .map(|space| SpaceTree {
                folders: space_folders.remove(&space.id).unwrap_or_default(),
                lists: space_lists.remove(&space.id).unwrap_or_default(),
                space,
            })
            .collect())
    }
}
