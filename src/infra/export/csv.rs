use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::entities::criteria::Column;
use crate::domain::entities::customer::CustomerRecord;
use crate::usecase::services::list_engine::{project_row, visible_headers};

pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("data_pelanggan_{}.csv", date.format("%Y-%m-%d"))
}

pub fn write_customers_csv<W: Write>(
    writer: W,
    rows: &[CustomerRecord],
    visible: &BTreeSet<Column>,
) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(visible_headers(visible))
        .context("failed to write csv header")?;

    for record in rows {
        csv_writer
            .write_record(project_row(record, visible))
            .context("failed to write csv record")?;
    }

    csv_writer.flush().context("failed to flush csv")?;
    Ok(rows.len())
}

pub fn export_customers_csv(
    csv_path: &Path,
    rows: &[CustomerRecord],
    visible: &BTreeSet<Column>,
) -> Result<usize> {
    if visible.is_empty() {
        anyhow::bail!("at least one visible column is required")
    }
    let file = std::fs::File::create(csv_path)
        .with_context(|| format!("failed to create csv: {}", csv_path.display()))?;
    write_customers_csv(file, rows, visible)
        .with_context(|| format!("failed to export csv: {}", csv_path.display()))
}
