#![forbid(unsafe_code)]

pub(in crate::store) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_folders_space_position ON folders(space_id, position, id);
        CREATE INDEX IF NOT EXISTS idx_lists_parent_position ON lists(space_id, folder_id, position, id);
        CREATE INDEX IF NOT EXISTS idx_lists_folder ON lists(folder_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_list ON tasks(list_id, id);
"#;
