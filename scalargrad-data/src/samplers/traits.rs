// scalargrad-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug {
    /// Returns the indices to visit for one pass over a dataset of `dataset_len` items.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices [`Sampler::iter`] yields for `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
