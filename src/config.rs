//! Fixed names and constants of the cleaning run.  Nothing here is read
//! from the command line or the environment.

/// Raw input, read from the current directory.
pub const INPUT_FILE: &str = "churn_raw_data.csv";

/// Cleaned output, written to the current directory.
pub const OUTPUT_FILE: &str = "churn_cleaned_data_executable.csv";

/// Numeric columns whose gaps are filled with the column mean.
pub const MEAN_IMPUTED_COLUMNS: [&str; 5] =
    ["Children", "Age", "Income", "Tenure", "Bandwidth_GB_Year"];

/// Placeholder for every remaining missing cell.
pub const MISSING_PLACEHOLDER: &str = "Unknown";

pub const ZIP_COLUMN: &str = "Zip";

/// Columns coerced to `int64`.
pub const INTEGER_COLUMNS: [&str; 2] = ["Children", "Age"];

/// Column whose outliers are dropped.
pub const OUTLIER_COLUMN: &str = "MonthlyCharge";

/// Tukey fence multiplier applied to the IQR.
pub const IQR_MULTIPLIER: f64 = 1.5;

pub const RANDOM_SEED: u64 = 493;
