use crate::autograd::Graph;
use crate::error::Result;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers hold the ids of the parameter leaves they manage and update those leaves
/// in the graph that owns them, using the gradients left there by a backward pass.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if every parameter was updated, or a `ScalarGradError` if a managed id
    /// no longer names a leaf of `graph`.
    fn step(&mut self, graph: &mut Graph) -> Result<()>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Backward passes accumulate, so this must run before every pass that reuses the
    /// same parameters.
    fn zero_grad(&self, graph: &mut Graph);

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()>;
}
