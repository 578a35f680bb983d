#![forbid(unsafe_code)]

pub(in crate::store) const SQL: &str = r#"
        PRAGMA foreign_keys = ON;
"#;
