use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Table;

/// Write the table as CSV without its index column.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;
    write_to(table, file).with_context(|| format!("writing CSV {}", path.display()))
}

/// Serialize the table to any writer.  See [`write_csv`].
pub fn write_to<W: Write>(table: &Table, wtr: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(wtr);
    writer
        .write_record(table.columns.iter().map(|c| c.name.as_str()))
        .context("writing CSV header")?;

    for (row_no, record) in table.records.iter().enumerate() {
        writer
            .write_record(record.values.iter().map(|v| v.to_string()))
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}
