//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One handle per command invocation, held for the command's lifetime and
//! released when it goes out of scope. No pooling: there is exactly one
//! logical client.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }
}
