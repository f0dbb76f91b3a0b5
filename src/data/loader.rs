use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Column, ColumnKind, Record, Table, Value};

/// Tokens read as a missing cell (the Pandas `read_csv` defaults).
const NA_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a comma-delimited table from a file.
///
/// The first column is the row identifier; every other column is data and
/// gets its kind inferred from its content.
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_csv(file).with_context(|| format!("reading CSV {}", path.display()))
}

/// Parse a table from any reader.  See [`load_csv`].
pub fn read_csv<R: Read>(rdr: R) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let headers = dedup_headers(&headers);
    let Some((index_name, data_headers)) = headers.split_first() else {
        bail!("CSV has no header row");
    };
    let names = data_headers.to_vec();

    let mut ids = Vec::new();
    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        ids.push(record.get(0).unwrap_or("").to_string());
        for (col_idx, column) in raw_columns.iter_mut().enumerate() {
            let field = record.get(col_idx + 1).unwrap_or("");
            column.push((!is_na(field)).then(|| field.to_string()));
        }
    }

    let mut columns = Vec::with_capacity(names.len());
    let mut typed_columns = Vec::with_capacity(names.len());
    for (name, raw) in names.into_iter().zip(raw_columns) {
        let (kind, values) = infer_column(raw);
        log::debug!("column '{name}' inferred as {kind:?}");
        columns.push(Column { name, kind });
        typed_columns.push(values.into_iter());
    }

    let records = ids
        .into_iter()
        .map(|id| Record {
            id,
            values: typed_columns
                .iter_mut()
                .map(|col| col.next().unwrap_or(Value::Missing))
                .collect(),
        })
        .collect();

    Ok(Table::new(index_name.clone(), columns, records))
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

fn is_na(field: &str) -> bool {
    NA_TOKENS.contains(&field)
}

/// Spellings read as booleans; any other casing stays text.
const TRUE_TOKENS: [&str; 3] = ["True", "TRUE", "true"];
const FALSE_TOKENS: [&str; 3] = ["False", "FALSE", "false"];

fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if TRUE_TOKENS.contains(&s) {
        Some(true)
    } else if FALSE_TOKENS.contains(&s) {
        Some(false)
    } else {
        None
    }
}

/// Integer field, surrounding spaces ignored.
fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Float field, surrounding spaces ignored.  NaN spellings that are not
/// NA tokens (`NAN`, `nAn`) are text, not numbers.
fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Pick a single kind for the whole column, then convert every cell to it.
///
/// Integer columns with gaps are widened to float, since an integer column
/// cannot carry the missing marker.
fn infer_column(raw: Vec<Option<String>>) -> (ColumnKind, Vec<Value>) {
    let present = || raw.iter().flatten();
    let has_missing = raw.iter().any(Option::is_none);

    let kind = if present().next().is_none() {
        ColumnKind::Float
    } else if present().all(|s| parse_int(s).is_some()) {
        if has_missing {
            ColumnKind::Float
        } else {
            ColumnKind::Integer
        }
    } else if present().all(|s| parse_float(s).is_some()) {
        ColumnKind::Float
    } else if present().all(|s| parse_bool(s).is_some()) {
        ColumnKind::Boolean
    } else {
        ColumnKind::Text
    };

    let values = raw
        .into_iter()
        .map(|cell| match cell {
            None => Value::Missing,
            Some(s) => convert(s, kind),
        })
        .collect();
    (kind, values)
}

fn convert(s: String, kind: ColumnKind) -> Value {
    let parsed = match kind {
        ColumnKind::Integer => parse_int(&s).map(Value::Integer),
        ColumnKind::Float => parse_float(&s).map(Value::Float),
        ColumnKind::Boolean => parse_bool(&s).map(Value::Bool),
        ColumnKind::Text => None,
    };
    parsed.unwrap_or(Value::Text(s))
}

/// Rename repeated headers the way Pandas does: each clash appends the
/// running count to the name it clashed on, so `A, A.1, A` becomes
/// `A, A.1, A.1.1`.
fn dedup_headers(headers: &[String]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<String> = Vec::with_capacity(headers.len());
    for h in headers {
        let mut name = h.clone();
        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{name}.{count}");
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        out.push(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Table {
        read_csv(text.as_bytes()).unwrap()
    }

    #[test]
    fn first_column_is_the_index() {
        let table = load(",CaseOrder,Zip\n1,1,501\n2,2,35004\n");
        assert_eq!(table.index_name, "");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.records[0].id, "1");
        assert_eq!(table.records[1].values, vec![Value::Integer(2), Value::Integer(35004)]);
    }

    #[test]
    fn integer_column_with_gaps_becomes_float() {
        let table = load("id,Children,Age\na,1,30\nb,,41\nc,3,NA\n");
        assert_eq!(table.columns[0].kind, ColumnKind::Float);
        assert_eq!(table.records[0].values[0], Value::Float(1.0));
        assert_eq!(table.records[1].values[0], Value::Missing);
        assert_eq!(table.records[2].values[1], Value::Missing);
    }

    #[test]
    fn kinds_are_inferred_per_column() {
        let table = load("id,n,x,b,s,empty\n1,4,1.5,True,Yes,\n2,5,2,false,No,\n");
        let kinds: Vec<ColumnKind> = table.columns.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::Integer,
                ColumnKind::Float,
                ColumnKind::Boolean,
                ColumnKind::Text,
                ColumnKind::Float,
            ]
        );
        assert_eq!(table.records[1].values[1], Value::Float(2.0));
        assert_eq!(table.records[1].values[2], Value::Bool(false));
        assert_eq!(table.records[0].values[4], Value::Missing);
    }

    #[test]
    fn mixed_column_keeps_raw_text() {
        let table = load("id,Zip\n1,00501\n2,abc\n");
        assert_eq!(table.columns[0].kind, ColumnKind::Text);
        assert_eq!(table.records[0].values[0], Value::Text("00501".into()));
    }

    #[test]
    fn duplicate_headers_are_suffixed() {
        let names = dedup_headers(&["A".into(), "A".into(), "B".into(), "A".into()]);
        assert_eq!(names, vec!["A", "A.1", "B", "A.2"]);
    }

    #[test]
    fn suffix_clashes_extend_the_clashing_name() {
        let names = dedup_headers(&["A".into(), "A.1".into(), "A".into()]);
        assert_eq!(names, vec!["A", "A.1", "A.1.1"]);
    }

    #[test]
    fn index_header_takes_part_in_dedup() {
        let table = load("A,A,B\nr1,1,2\n");
        assert_eq!(table.index_name, "A");
        assert_eq!(table.columns[0].name, "A.1");
    }

    #[test]
    fn nan_spellings_outside_na_tokens_stay_text() {
        let table = load("id,Outage\n1,NAN\n2,1.5\n3,nAn\n");
        assert_eq!(table.columns[0].kind, ColumnKind::Text);
        assert_eq!(table.records[0].values[0], Value::Text("NAN".into()));
        assert_eq!(table.records[2].values[0], Value::Text("nAn".into()));
        assert_eq!(table.missing_count(), 0);
    }

    #[test]
    fn spaces_around_numbers_are_ignored() {
        let table = load("id,Income,Age\n1, 5,3 \n2,6.5, 4\n");
        assert_eq!(table.columns[0].kind, ColumnKind::Float);
        assert_eq!(table.columns[1].kind, ColumnKind::Integer);
        assert_eq!(table.records[0].values[0], Value::Float(5.0));
        assert_eq!(table.records[0].values[1], Value::Integer(3));
    }

    #[test]
    fn text_column_keeps_surrounding_spaces() {
        let table = load("id,City\n1, 5\n2,Austin \n");
        assert_eq!(table.columns[0].kind, ColumnKind::Text);
        assert_eq!(table.records[0].values[0], Value::Text(" 5".into()));
        assert_eq!(table.records[1].values[0], Value::Text("Austin ".into()));
    }

    #[test]
    fn only_pandas_boolean_casings_are_booleans() {
        let table = load("id,a,b\n1,TRUE,tRuE\n2,false,False\n");
        assert_eq!(table.columns[0].kind, ColumnKind::Boolean);
        assert_eq!(table.records[0].values[0], Value::Bool(true));
        assert_eq!(table.columns[1].kind, ColumnKind::Text);
        assert_eq!(table.records[0].values[1], Value::Text("tRuE".into()));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(read_csv("id,a,b\n1,2\n".as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(err.to_string().contains("opening CSV"));
    }
}
