use crate::errors::AppResult;
use rusqlite::Connection;

/// Categories seeded once at database creation. `INSERT OR IGNORE` keeps
/// re-running `init` harmless.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Other",
];

/// Initialize the database schema.
/// Creates the three tables and seeds the default categories.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS users (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL
        );

        CREATE TABLE IF NOT EXISTS categories (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL
        );

        CREATE TABLE IF NOT EXISTS expenses (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,              -- YYYY-MM-DD
            category_id INTEGER NOT NULL,
            title       TEXT NOT NULL,
            amount      REAL NOT NULL CHECK (amount > 0),
            created_at  TEXT NOT NULL,              -- ISO 8601 timestamp
            user_id     INTEGER NOT NULL,
            FOREIGN KEY (category_id) REFERENCES categories (id),
            FOREIGN KEY (user_id) REFERENCES users (id)
        );
        ",
    )?;

    let mut stmt = conn.prepare_cached("INSERT OR IGNORE INTO categories (name) VALUES (?1)")?;
    for name in DEFAULT_CATEGORIES {
        stmt.execute([name])?;
    }

    Ok(())
}
