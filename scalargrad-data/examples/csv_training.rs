//! # Training on road-accident records
//!
//! Reads a headerless CSV in the road-accident layout (id, age, gender, speed of impact,
//! helmet used, seatbelt used, survived), trains a `[5, 8, 8, 1]` network with the
//! default configuration and prints each prediction next to its label.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example csv_training -- path/to/road_accident_data.csv`

use scalargrad_core::{Result, ScalarGradError, TrainConfig, Trainer};
use scalargrad_data::{CsvDataset, CsvOptions, DataLoader, Dataset, RandomSampler};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1).ok_or_else(|| {
        ScalarGradError::InvalidConfig("usage: csv_training <road_accident_data.csv>".to_string())
    })?;
    let dataset = CsvDataset::from_path(&path, CsvOptions::road_accident())?;
    let num_features = dataset.num_features();
    let total = dataset.len();

    let config = TrainConfig::default().with_seed(7);
    let iterations = config.iterations;
    let mut trainer = Trainer::new(num_features, config)?;

    // Each iteration trains on one shuffled pass over the records.
    let sampler = RandomSampler::new(false, None);
    let mut loader = DataLoader::new(dataset, total.max(1), sampler, false)?;
    for _ in 0..iterations {
        loader.reset();
        for batch in loader.by_ref() {
            trainer.run_iteration(&batch?)?;
        }
    }

    let mut correct = 0;
    for sample in loader.dataset().samples().iter() {
        let prediction = trainer.predict(&sample.features)?;
        if prediction.signum() == sample.target.signum() {
            correct += 1;
        }
        println!("{:+.4} (label {:+.0})", prediction, sample.target);
    }
    println!("{}/{} predictions on the right side of zero", correct, total);
    Ok(())
}
