use std::path::Path;

use anyhow::Result;

use churn_clean::config::{INPUT_FILE, OUTPUT_FILE, RANDOM_SEED};
use churn_clean::pipeline;
use churn_clean::rng::SimpleRng;

fn main() -> Result<()> {
    env_logger::init();

    // Seeded for reproducibility; no stage draws from it.
    let rng = SimpleRng::new(RANDOM_SEED);
    log::debug!("random seed {}", rng.seed());

    let shape = pipeline::run(Path::new(INPUT_FILE), Path::new(OUTPUT_FILE))?;
    println!("Dataframe shape: {shape}");
    Ok(())
}
