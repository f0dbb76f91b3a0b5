//! Writes a synthetic `churn_raw_data.csv` with gaps and a few extreme
//! monthly charges, for trying out the cleaner without the real dataset.

use anyhow::{Context, Result};

use churn_clean::config::{INPUT_FILE, RANDOM_SEED};
use churn_clean::rng::SimpleRng;

const ROWS: usize = 1000;

fn maybe_missing(rng: &mut SimpleRng, p: f64, value: String) -> String {
    if rng.chance(p) { String::new() } else { value }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(RANDOM_SEED);

    let areas = ["Urban", "Suburban", "Rural"];
    let contracts = ["Month-to-month", "One year", "Two Year"];

    let mut writer = csv::Writer::from_path(INPUT_FILE)
        .with_context(|| format!("creating {INPUT_FILE}"))?;
    writer.write_record([
        "",
        "CaseOrder",
        "Customer_id",
        "Zip",
        "Children",
        "Age",
        "Income",
        "Area",
        "Techie",
        "Contract",
        "Tenure",
        "MonthlyCharge",
        "Bandwidth_GB_Year",
        "Churn",
    ])?;

    for i in 1..=ROWS {
        let children = rng.range(0, 8).to_string();
        let age = rng.range(18, 90).to_string();
        let income = format!("{:.2}", rng.gauss(40_000.0, 15_000.0).max(500.0));
        let tenure = format!("{:.6}", rng.next_f64() * 72.0);
        let bandwidth = format!("{:.4}", rng.gauss(3_400.0, 2_000.0).max(150.0));

        // roughly 1 in 100 customers is billed far outside the usual range
        let charge = if rng.chance(0.01) {
            rng.gauss(600.0, 50.0)
        } else {
            rng.gauss(170.0, 40.0).max(75.0)
        };

        let area = areas[rng.range(0, areas.len() as i64) as usize % areas.len()];
        let contract = contracts[rng.range(0, contracts.len() as i64) as usize % contracts.len()];
        let techie = if rng.chance(0.17) { "Yes" } else { "No" };
        let churn = if rng.chance(0.26) { "Yes" } else { "No" };

        let record = [
            i.to_string(),
            i.to_string(),
            format!("K{:06}", rng.range(0, 1_000_000)),
            rng.range(501, 99_951).to_string(),
            maybe_missing(&mut rng, 0.25, children),
            maybe_missing(&mut rng, 0.25, age),
            maybe_missing(&mut rng, 0.25, income),
            area.to_string(),
            maybe_missing(&mut rng, 0.25, techie.to_string()),
            contract.to_string(),
            maybe_missing(&mut rng, 0.09, tenure),
            format!("{charge:.6}"),
            maybe_missing(&mut rng, 0.10, bandwidth),
            churn.to_string(),
        ];
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} customers to {INPUT_FILE}");
    Ok(())
}
