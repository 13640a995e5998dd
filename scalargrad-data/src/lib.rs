//! Data access for scalargrad training runs: datasets, index samplers and a batching
//! `DataLoader`.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{CsvDataset, CsvOptions, Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
