// scalargrad-core/src/nn/losses/squared_error.rs

use crate::autograd::{Graph, NodeId};
use crate::error::{Result, ScalarGradError};

/// Sum of squared errors over a batch: `sum_i (pred_i - y_i) * (pred_i - y_i)`.
///
/// The accumulator starts from a `0.0` leaf labelled `netLoss` and each sample's term is
/// added in turn, so the loss is one long chain of `Add` nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredErrorLoss;

impl SquaredErrorLoss {
    pub fn new() -> Self {
        SquaredErrorLoss
    }

    /// Squared error of a single prediction.
    ///
    /// The difference is built twice, as two distinct nodes, and multiplied together.
    /// Both copies receive gradient, which sums to the usual `2 (pred - y)`.
    pub fn sample_loss(&self, graph: &mut Graph, prediction: NodeId, target: NodeId) -> NodeId {
        let left = graph.sub(prediction, target, "loss1");
        let right = graph.sub(prediction, target, "loss2");
        graph.mul(left, right, "loss")
    }

    /// Builds the batch loss and returns its root node.
    pub fn calculate(
        &self,
        graph: &mut Graph,
        predictions: &[NodeId],
        targets: &[NodeId],
    ) -> Result<NodeId> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "SquaredErrorLoss targets".to_string(),
            });
        }
        if predictions.is_empty() {
            return Err(ScalarGradError::EmptyBatch);
        }

        let mut net = graph.leaf(0.0, "netLoss");
        for (&pred, &target) in predictions.iter().zip(targets.iter()) {
            let term = self.sample_loss(graph, pred, target);
            net = graph.add(net, term, "netLoss");
        }
        Ok(net)
    }
}

#[cfg(test)]
#[path = "squared_error_test.rs"]
mod tests;
