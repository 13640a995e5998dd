use crate::autograd::{Graph, NodeId};
use crate::error::Result;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns leaf nodes (its parameters) in a [`Graph`] and extends that graph with
/// its forward computation. It never owns the graph itself.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, appending the computation to `graph`.
    ///
    /// # Arguments
    /// * `graph`: The graph holding this module's parameters.
    /// * `inputs`: Nodes feeding the module, one per input feature.
    ///
    /// # Returns
    /// The output nodes of the module, or a `ScalarGradError` if `inputs` has the wrong length.
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>>;

    /// Returns every learnable leaf of the module, in a stable order.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns the parameters with hierarchical names (e.g. "layer1.neuron0.w2").
    fn named_parameters(&self) -> Vec<(String, NodeId)>;

    /// Number of inputs the module expects.
    fn in_features(&self) -> usize;
}
