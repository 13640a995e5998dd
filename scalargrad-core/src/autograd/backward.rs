// scalargrad-core/src/autograd/backward.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Op};

/// Local chain-rule contributions of one node to its parents.
///
/// Given the node's current `grad` (dL/dself), returns `(parent, dL/dparent contribution)`
/// pairs in parent order. Nothing is written; [`Graph::propagate`] does the accumulation.
/// A parent referenced twice by the same node (e.g. `p * p`) appears twice.
pub(crate) fn backward_rule(graph: &Graph, id: NodeId) -> Vec<(NodeId, f64)> {
    let node = &graph[id];
    let upstream = node.grad;
    match node.op {
        Op::Leaf => Vec::new(),
        Op::Add([a, b]) => vec![(a, upstream), (b, upstream)],
        Op::Subtract([a, b]) => vec![(a, upstream), (b, -upstream)],
        Op::Multiply([a, b]) => vec![
            (a, graph[b].value * upstream),
            (b, graph[a].value * upstream),
        ],
        Op::Tanh([a]) => vec![(a, upstream * (1.0 - node.value.powi(2)))],
    }
}

impl Graph {
    /// See [`backward_rule`]: the gradient contributions `id` would send to its parents.
    pub fn local_gradients(&self, id: NodeId) -> Vec<(NodeId, f64)> {
        backward_rule(self, id)
    }

    /// Applies the local backward rule of `id`, adding (never overwriting) each
    /// contribution into the matching parent's `grad`.
    ///
    /// Must only run once `id`'s own gradient has received every contribution from its
    /// children, which holds when nodes are visited in reverse topological order.
    pub fn propagate(&mut self, id: NodeId) {
        for (parent, contribution) in backward_rule(self, id) {
            self[parent].grad += contribution;
        }
    }

    /// Reverse-mode differentiation of `root` with respect to every ancestor.
    ///
    /// Sorts the graph reachable from `root`, reverses the order, seeds `root.grad = 1.0`
    /// and propagates node by node. Gradients are *accumulated* into the existing values:
    /// parameters reused across passes must be reset with [`Graph::zero_grad`] first,
    /// otherwise this pass's gradients are summed onto the previous pass's.
    ///
    /// Returns the root-first order that was walked.
    pub fn backward(&mut self, root: NodeId) -> Vec<NodeId> {
        let mut order = self.topological_sort(root);
        order.reverse();

        self.set_grad(root, 1.0);
        for &id in order.iter() {
            self.propagate(id);
        }
        order
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
