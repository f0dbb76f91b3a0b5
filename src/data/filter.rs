use serde::Serialize;

use super::model::{Table, Value};
use crate::clean::stats::{median_sorted, quantile_sorted, sorted};
use crate::config::IQR_MULTIPLIER;
use crate::error::{CleanError, Result};

// ---------------------------------------------------------------------------
// Outlier bounds: Tukey fences around the interquartile range
// ---------------------------------------------------------------------------

/// Quartiles and fences of one numeric column, taken before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierBounds {
    pub q1: f64,
    /// Reported only; rows are never filtered on it.
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl OutlierBounds {
    /// Fences from already sorted values.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let q1 = quantile_sorted(sorted, 0.25)?;
        let median = median_sorted(sorted)?;
        let q3 = quantile_sorted(sorted, 0.75)?;
        let iqr = q3 - q1;
        Some(OutlierBounds {
            q1,
            median,
            q3,
            iqr,
            lower: q1 - IQR_MULTIPLIER * iqr,
            upper: q3 + IQR_MULTIPLIER * iqr,
        })
    }

    /// Both ends are exclusive: a value sitting exactly on a fence is an outlier.
    pub fn contains(&self, v: f64) -> bool {
        v > self.lower && v < self.upper
    }
}

/// Collect a column as `f64`s, failing on any text or missing cell.
fn numeric_column(table: &Table, column: &str) -> Result<(usize, Vec<f64>)> {
    let idx = table.column_index(column)?;
    let values = table
        .records
        .iter()
        .map(|r| {
            let value = r.values.get(idx);
            value
                .and_then(Value::as_f64)
                .ok_or_else(|| CleanError::NonNumeric {
                    column: column.to_string(),
                    row: r.id.clone(),
                    value: value.map(Value::to_string).unwrap_or_default(),
                })
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok((idx, values))
}

/// Compute quartiles, IQR and fences of `column`.
pub fn outlier_bounds(table: &Table, column: &str) -> Result<OutlierBounds> {
    let (_, values) = numeric_column(table, column)?;
    OutlierBounds::from_sorted(&sorted(&values))
        .ok_or_else(|| CleanError::EmptyColumn(column.to_string()))
}

/// Keep only rows whose `column` value lies strictly inside `bounds`.
///
/// Returns the number of rows dropped.
pub fn retain_within(table: &mut Table, column: &str, bounds: &OutlierBounds) -> Result<usize> {
    let (idx, _) = numeric_column(table, column)?;
    let before = table.len();
    table.records.retain(|r| {
        r.values
            .get(idx)
            .and_then(Value::as_f64)
            .is_some_and(|v| bounds.contains(v))
    });
    Ok(before - table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    fn charges(values: &[&str]) -> Table {
        let mut text = String::from("id,MonthlyCharge\n");
        for (i, v) in values.iter().enumerate() {
            text.push_str(&format!("{i},{v}\n"));
        }
        read_csv(text.as_bytes()).unwrap()
    }

    #[test]
    fn drops_the_high_outlier() {
        let mut table = charges(&["10", "12", "11", "13", "12", "100"]);
        let bounds = outlier_bounds(&table, "MonthlyCharge").unwrap();
        assert!((bounds.q1 - 11.25).abs() < 1e-9);
        assert!((bounds.q3 - 12.75).abs() < 1e-9);
        assert!((bounds.iqr - 1.5).abs() < 1e-9);
        assert!((bounds.lower - 9.0).abs() < 1e-9);
        assert!((bounds.upper - 15.0).abs() < 1e-9);
        assert!((bounds.median - 12.0).abs() < 1e-9);

        let dropped = retain_within(&mut table, "MonthlyCharge", &bounds).unwrap();
        assert_eq!(dropped, 1);
        let ids: Vec<&str> = table.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn values_on_the_fence_are_dropped() {
        let mut table = charges(&["1", "1", "3", "3", "6", "-2"]);
        let bounds = OutlierBounds {
            q1: 1.0,
            median: 2.0,
            q3: 3.0,
            iqr: 2.0,
            lower: -2.0,
            upper: 6.0,
        };
        let dropped = retain_within(&mut table, "MonthlyCharge", &bounds).unwrap();
        assert_eq!(dropped, 2);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn text_in_the_column_fails() {
        let table = charges(&["10", "Unknown"]);
        assert!(matches!(
            outlier_bounds(&table, "MonthlyCharge"),
            Err(CleanError::NonNumeric { .. })
        ));
    }

    #[test]
    fn empty_table_has_no_bounds() {
        let table = charges(&[]);
        assert!(matches!(
            outlier_bounds(&table, "MonthlyCharge"),
            Err(CleanError::EmptyColumn(_))
        ));
    }

    #[test]
    fn missing_column_fails() {
        let table = charges(&["1"]);
        assert!(matches!(
            outlier_bounds(&table, "Charge"),
            Err(CleanError::ColumnNotFound(_))
        ));
    }
}
