use crate::data::model::{ColumnKind, Table, Value};
use crate::error::{CleanError, Result};

/// Convert every value of `column` to its textual form.
///
/// The text is exactly what the writer would emit for the original value,
/// so a float zip of `501.0` becomes `"501.0"`.
pub fn to_text(table: &mut Table, column: &str) -> Result<()> {
    let idx = table.column_index(column)?;
    for value in table.column_values_mut(idx) {
        if !matches!(value, Value::Text(_) | Value::Missing) {
            *value = Value::Text(value.to_string());
        }
    }
    if let Some(col) = table.columns.get_mut(idx) {
        col.kind = ColumnKind::Text;
    }
    Ok(())
}

/// Convert every value of `column` to a 64-bit integer.
///
/// Floats are truncated toward zero, booleans become 0/1 and text must
/// hold a plain base-10 integer. Anything else aborts the conversion.
pub fn to_integer(table: &mut Table, column: &str) -> Result<()> {
    let idx = table.column_index(column)?;
    for record in &mut table.records {
        let Some(value) = record.values.get_mut(idx) else {
            continue;
        };
        let converted = integer_of(value).ok_or_else(|| CleanError::Conversion {
            column: column.to_string(),
            row: record.id.clone(),
            value: value.to_string(),
            target: "int64",
        })?;
        *value = Value::Integer(converted);
    }
    if let Some(col) = table.columns.get_mut(idx) {
        col.kind = ColumnKind::Integer;
    }
    Ok(())
}

fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Float(v) => {
            let t = v.trunc();
            // i64::MAX is not exactly representable; 2^63 is the first float past it
            (t.is_finite() && t >= i64::MIN as f64 && t < 9_223_372_036_854_775_808.0)
                .then_some(t as i64)
        }
        Value::Text(s) => s.trim().parse().ok(),
        Value::Missing => None,
    }
}
