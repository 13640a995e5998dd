pub mod csv_dataset;
pub mod traits;
pub mod vec_dataset;

pub use csv_dataset::{CsvDataset, CsvOptions};
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
