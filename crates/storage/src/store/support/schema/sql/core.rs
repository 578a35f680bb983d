#![forbid(unsafe_code)]

// Current layout. Stores created before a column existed receive it through
// the later additive migrations instead.
pub(in crate::store) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS spaces (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS folders (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          space_id INTEGER NOT NULL REFERENCES spaces(id) ON DELETE CASCADE,
          name TEXT NOT NULL,
          position INTEGER NOT NULL DEFAULT 0
        );

        -- A list hangs off a folder when folder_id is set, otherwise directly
        -- off space_id. space_id always mirrors the folder's space.
        CREATE TABLE IF NOT EXISTS lists (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          space_id INTEGER NOT NULL REFERENCES spaces(id) ON DELETE CASCADE,
          folder_id INTEGER REFERENCES folders(id) ON DELETE CASCADE,
          name TEXT NOT NULL,
          position INTEGER NOT NULL DEFAULT 0
        );

        -- running_since is Unix milliseconds; NULL means the timer is idle.
        CREATE TABLE IF NOT EXISTS tasks (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          list_id INTEGER NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
          title TEXT NOT NULL,
          done INTEGER NOT NULL DEFAULT 0 CHECK(done IN (0, 1)),
          accumulated_seconds INTEGER NOT NULL DEFAULT 0 CHECK(accumulated_seconds >= 0),
          running_since INTEGER
        );
"#;
