use crate::clean::stats::masked_mean;
use crate::data::model::{ColumnKind, Table, Value};
use crate::error::{CleanError, Result};

/// Replace every missing cell of `column` with the mean of its present values.
///
/// The whole column is converted to floats, the same as a mean imputer's
/// output. Returns the mean that was filled in.
pub fn impute_mean(table: &mut Table, column: &str) -> Result<f64> {
    let idx = table.column_index(column)?;

    let mut cells = Vec::with_capacity(table.len());
    for record in &table.records {
        let Some(value) = record.values.get(idx) else {
            continue;
        };
        if value.is_missing() {
            cells.push(None);
            continue;
        }
        match value.as_f64() {
            Some(v) if !v.is_nan() => cells.push(Some(v)),
            Some(_) => cells.push(None),
            None => {
                return Err(CleanError::NonNumeric {
                    column: column.to_string(),
                    row: record.id.clone(),
                    value: value.to_string(),
                });
            }
        }
    }

    let fill = masked_mean(&cells).ok_or_else(|| CleanError::EmptyColumn(column.to_string()))?;

    for value in table.column_values_mut(idx) {
        *value = match value.as_f64() {
            Some(v) if !v.is_nan() => Value::Float(v),
            _ => Value::Float(fill),
        };
    }
    if let Some(col) = table.columns.get_mut(idx) {
        col.kind = ColumnKind::Float;
    }
    Ok(fill)
}

/// Replace every remaining missing cell in the table with `placeholder`.
///
/// Applies to all columns, numeric ones included; a numeric column that
/// receives the placeholder becomes a mixed `Text` column.
/// Returns the number of cells filled.
pub fn fill_missing(table: &mut Table, placeholder: &str) -> usize {
    let mut filled = 0;
    for (idx, column) in table.columns.iter_mut().enumerate() {
        let mut column_filled = 0;
        for record in &mut table.records {
            if let Some(value) = record.values.get_mut(idx) {
                if value.is_missing() {
                    *value = Value::Text(placeholder.to_string());
                    column_filled += 1;
                }
            }
        }
        if column_filled > 0 {
            if column.kind != ColumnKind::Text {
                log::debug!("column '{}' is now mixed after filling gaps", column.name);
            }
            column.kind = ColumnKind::Text;
        }
        filled += column_filled;
    }
    filled
}
