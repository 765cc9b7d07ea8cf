use serde::Serialize;

/// A person recording expenses. Created on first use by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,   // ⇔ users.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub name: String, // ⇔ users.name (TEXT UNIQUE NOT NULL)
}
