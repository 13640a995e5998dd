//! # Training a small MLP on four samples
//!
//! Builds a 3-input network with layers `[4, 4, 1]`, trains it with the signed gradient
//! step for a few dozen iterations and prints the trained network's prediction for
//! every sample.
//!
//! ## Running
//! `RUST_LOG=info cargo run --example toy_mlp`

use scalargrad_core::{Result, Sample, TrainConfig, Trainer};

fn main() -> Result<()> {
    env_logger::init();

    let samples = vec![
        Sample::new(vec![2.0, 3.0, -1.0], 1.0),
        Sample::new(vec![3.0, -1.0, 0.5], -1.0),
        Sample::new(vec![0.5, 1.0, 1.0], -1.0),
        Sample::new(vec![1.0, 1.0, -1.0], 1.0),
    ];

    let config = TrainConfig::new()
        .with_layer_sizes(vec![4, 4, 1])
        .with_learning_rate(-0.05)
        .with_iterations(50)
        .with_seed(2024);
    let mut trainer = Trainer::new(3, config)?;

    let reports = trainer.fit(&samples)?;
    if let Some(last) = reports.last() {
        println!("Final loss after {} iterations: {:.4}", reports.len(), last.loss);
    }

    for sample in samples.iter() {
        let prediction = trainer.predict(&sample.features)?;
        println!(
            "{:?} -> {:+.4} (target {:+.1})",
            sample.features, prediction, sample.target
        );
    }
    Ok(())
}
