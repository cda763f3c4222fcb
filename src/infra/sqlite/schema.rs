use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS view_setting (
            view_key     TEXT PRIMARY KEY,
            search_scope TEXT NOT NULL,
            sort_field   TEXT,
            sort_desc    INTEGER NOT NULL DEFAULT 0,
            page_size    INTEGER NOT NULL,
            updated_at   TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS column_visibility (
            view_key    TEXT NOT NULL,
            column_id   TEXT NOT NULL,
            visible     INTEGER NOT NULL,
            PRIMARY KEY (view_key, column_id),
            FOREIGN KEY (view_key) REFERENCES view_setting(view_key)
        );
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
