//! The linear cleaning run:
//! load → impute → fill → normalize types → drop outliers → write.

use std::path::Path;

use anyhow::{Context, Result};

use crate::clean::{impute, types};
use crate::config::{
    INTEGER_COLUMNS, MEAN_IMPUTED_COLUMNS, MISSING_PLACEHOLDER, OUTLIER_COLUMN, ZIP_COLUMN,
};
use crate::data::filter::{self, OutlierBounds};
use crate::data::model::{Shape, Table};
use crate::data::{loader, writer};

/// Apply every in-memory stage to a loaded table.
///
/// Returns the fences the outlier filter used.
pub fn clean_table(table: &mut Table) -> Result<OutlierBounds> {
    for column in MEAN_IMPUTED_COLUMNS {
        let mean = impute::impute_mean(table, column)
            .with_context(|| format!("imputing '{column}'"))?;
        log::info!("imputed '{column}' with mean {mean}");
    }

    let filled = impute::fill_missing(table, MISSING_PLACEHOLDER);
    log::info!("filled {filled} remaining missing cells with '{MISSING_PLACEHOLDER}'");

    types::to_text(table, ZIP_COLUMN).context("casting zip codes to text")?;
    for column in INTEGER_COLUMNS {
        types::to_integer(table, column)
            .with_context(|| format!("casting '{column}' to int64"))?;
    }

    let bounds = filter::outlier_bounds(table, OUTLIER_COLUMN)
        .with_context(|| format!("computing outlier bounds of '{OUTLIER_COLUMN}'"))?;
    log::debug!("median of '{OUTLIER_COLUMN}': {}", bounds.median);
    log::debug!(
        "outlier bounds: {}",
        serde_json::to_string(&bounds).unwrap_or_default()
    );

    let dropped = filter::retain_within(table, OUTLIER_COLUMN, &bounds)?;
    log::info!(
        "dropped {dropped} rows outside ({}, {}) on '{OUTLIER_COLUMN}'",
        bounds.lower,
        bounds.upper
    );
    Ok(bounds)
}

/// Load `input`, clean it and write the result to `output`.
pub fn run(input: &Path, output: &Path) -> Result<Shape> {
    let mut table = loader::load_csv(input)?;
    log::info!(
        "loaded {} rows, {} data columns from {}",
        table.len(),
        table.columns.len(),
        input.display()
    );

    clean_table(&mut table)?;

    writer::write_csv(&table, output)?;
    let shape = table.shape();
    log::info!("wrote {shape} to {}", output.display());
    Ok(shape)
}
