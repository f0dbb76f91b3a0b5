use std::fmt;

use crate::error::CleanError;

// ---------------------------------------------------------------------------
// Value – a single cell in a data column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the Pandas dtypes a CSV can infer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// The missing-value marker (`NaN` in Pandas terms).
    Missing,
}

impl fmt::Display for Value {
    /// Renders the cell the way Pandas writes it to CSV: whole floats keep
    /// a trailing `.0`, booleans are capitalised and missing cells are empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) if v.is_nan() => Ok(()),
            Value::Float(v) if v.is_infinite() => {
                write!(f, "{}", if *v > 0.0 { "inf" } else { "-inf" })
            }
            Value::Float(v) => write_float(f, *v),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Missing => Ok(()),
        }
    }
}

/// Shortest round-trip digits, switching to exponent form below `1e-4` and
/// from `1e16` up (`1e-05`, `1.5e+16`); whole numbers keep a `.0`.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let sci = format!("{v:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if v != 0.0 && !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.abs())
    } else if v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

impl Value {
    /// Interpret the value as an `f64` for statistics.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

// ---------------------------------------------------------------------------
// Column / Record – header entry and one row of the table
// ---------------------------------------------------------------------------

/// Inferred dtype of a column.  `Text` columns may hold mixed values once
/// placeholders have been filled into a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// A single row of the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Row identifier copied verbatim from the first field.
    pub id: String,
    /// One value per data column, in header order.
    pub values: Vec<Value>,
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table.  The index column is kept apart from the data
/// columns and is never written back out.
#[derive(Debug, Clone)]
pub struct Table {
    /// Header of the first (index) column, possibly empty.
    pub index_name: String,
    pub columns: Vec<Column>,
    pub records: Vec<Record>,
}

/// `(rows, columns)` of the data part of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

impl Table {
    pub fn new(index_name: String, columns: Vec<Column>, records: Vec<Record>) -> Self {
        Table {
            index_name,
            columns,
            records,
        }
    }

    /// Position of a data column, or [`CleanError::ColumnNotFound`].
    pub fn column_index(&self, name: &str) -> Result<usize, CleanError> {
        self.columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| CleanError::ColumnNotFound(name.to_string()))
    }

    /// Iterate over the values of one column, top to bottom.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> + '_ {
        self.records.iter().filter_map(move |r| r.values.get(idx))
    }

    /// Iterate mutably over the values of one column.
    pub fn column_values_mut(&mut self, idx: usize) -> impl Iterator<Item = &mut Value> + '_ {
        self.records.iter_mut().filter_map(move |r| r.values.get_mut(idx))
    }

    pub fn shape(&self) -> Shape {
        Shape {
            rows: self.records.len(),
            columns: self.columns.len(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of missing cells across all data columns.
    pub fn missing_count(&self) -> usize {
        self.records
            .iter()
            .flat_map(|r| r.values.iter())
            .filter(|v| v.is_missing())
            .count()
    }
}
