// scalargrad-core/src/train/mod.rs

//! Training-loop driver: configuration, the per-iteration protocol and its reports.

pub mod config;
pub mod trainer;

pub use config::TrainConfig;
pub use trainer::{IterationReport, Sample, Trainer};
