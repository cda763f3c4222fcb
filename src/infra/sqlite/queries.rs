use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::open_connection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredViewSetting {
    pub search_scope: String,
    pub sort_field: Option<String>,
    pub sort_desc: bool,
    pub page_size: i64,
}

pub fn upsert_view_setting(db_path: &Path, view_key: &str, setting: &StoredViewSetting) -> Result<()> {
    let conn = open_connection(db_path)?;
    let sort_desc = if setting.sort_desc { 1 } else { 0 };
    conn.execute(
        "INSERT INTO view_setting(view_key, search_scope, sort_field, sort_desc, page_size)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(view_key) DO UPDATE SET
            search_scope = excluded.search_scope,
            sort_field = excluded.sort_field,
            sort_desc = excluded.sort_desc,
            page_size = excluded.page_size,
            updated_at = CURRENT_TIMESTAMP",
        params![
            view_key,
            setting.search_scope,
            setting.sort_field,
            sort_desc,
            setting.page_size
        ],
    )
    .context("failed to upsert view setting")?;
    Ok(())
}

pub fn load_view_setting(db_path: &Path, view_key: &str) -> Result<Option<StoredViewSetting>> {
    let conn = open_connection(db_path)?;
    conn.query_row(
        "SELECT search_scope, sort_field, sort_desc, page_size
         FROM view_setting
         WHERE view_key = ?1",
        [view_key],
        |row| {
            let sort_desc: i64 = row.get(2)?;
            Ok(StoredViewSetting {
                search_scope: row.get(0)?,
                sort_field: row.get(1)?,
                sort_desc: sort_desc != 0,
                page_size: row.get(3)?,
            })
        },
    )
    .optional()
    .context("failed to query view setting")
}

pub fn upsert_column_visibility(
    db_path: &Path,
    view_key: &str,
    visibility: &BTreeMap<String, bool>,
) -> Result<()> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start column visibility transaction")?;

    tx.execute(
        "DELETE FROM column_visibility WHERE view_key = ?1",
        [view_key],
    )
    .context("failed to clear existing column visibility")?;

    let mut insert_stmt = tx
        .prepare(
            "INSERT INTO column_visibility(view_key, column_id, visible)
             VALUES (?1, ?2, ?3)",
        )
        .context("failed to prepare column visibility insert")?;

    for (column_id, visible) in visibility {
        let value = if *visible { 1 } else { 0 };
        insert_stmt
            .execute(params![view_key, column_id, value])
            .context("failed to insert column visibility")?;
    }

    drop(insert_stmt);
    tx.commit()
        .context("failed to commit column visibility updates")?;
    Ok(())
}

pub fn load_column_visibility(db_path: &Path, view_key: &str) -> Result<BTreeMap<String, bool>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT column_id, visible
             FROM column_visibility
             WHERE view_key = ?1
             ORDER BY column_id ASC",
        )
        .context("failed to prepare column visibility query")?;

    let visibility_iter = stmt
        .query_map([view_key], |row| {
            let column_id: String = row.get(0)?;
            let visible: i64 = row.get(1)?;
            Ok((column_id, visible != 0))
        })
        .context("failed to query column visibility")?;

    let mut visibility = BTreeMap::new();
    for item in visibility_iter {
        let (column_id, visible) = item.context("failed to read column visibility row")?;
        visibility.insert(column_id, visible);
    }

    Ok(visibility)
}
