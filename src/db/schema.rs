pub const SCHEMA: &str = r#"
-- Sole entity: a flat contact record. Email and phone carry table-wide
-- unique constraints; ids are assigned by SQLite and never reused.
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL UNIQUE
);
"#;
