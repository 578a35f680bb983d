#![forbid(unsafe_code)]

mod core;
mod indexes;
mod pragmas;

pub(super) use self::core::SQL as CORE_TABLES_SQL;
pub(super) use self::indexes::SQL as SIBLING_INDEXES_SQL;
pub(super) use self::pragmas::SQL as PRAGMAS_SQL;

/// Names that must always resolve to the tables this store owns.
pub(super) const RESERVED_TABLES: &[&str] =
    &["spaces", "folders", "lists", "tasks", "schema_migrations"];

pub(super) const MIGRATIONS_TABLE_SQL: &str = r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
          version INTEGER PRIMARY KEY,
          name TEXT NOT NULL,
          applied_at_ms INTEGER NOT NULL
        );
"#;
