/// Data layer: core types, loading, filtering and writing.
///
/// Architecture:
/// ```text
///   churn_raw_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table (index column split off)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Column>, Vec<Record>
///   └──────────┘
///        │   (clean stages mutate in place)
///        ▼
///   ┌──────────┐
///   │  filter   │  IQR fences → drop outlier rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  Table → CSV without the index
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
