//! `grani classify` — train the variational classifier, predict test labels.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use grani_io::{join_labels, parse_dataset};
use grani_vqa::classifier::{ClassifierConfig, train};

pub fn execute(iterations: usize, batch_size: usize, seed: u64) -> Result<()> {
    let input = super::common::read_stdin()?;
    let dataset = parse_dataset(&input).context("Failed to parse classifier input")?;
    info!(
        train_rows = dataset.train.nrows(),
        test_rows = dataset.test.nrows(),
        "dataset parsed"
    );

    let config = ClassifierConfig {
        iterations,
        batch_size,
        ..ClassifierConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let model = train(dataset.train.view(), &dataset.labels, &config, &mut rng)
        .context("Classifier training failed")?;

    let predictions = model
        .predict_all(dataset.test.view())
        .context("Prediction failed")?;
    println!("{}", join_labels(&predictions));
    Ok(())
}
