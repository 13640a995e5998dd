// scalargrad-core/src/autograd/graph.rs

use crate::autograd::node::{ComputationNode, NodeId, Op};
use crate::error::{Result, ScalarGradError};
use std::fmt;

/// Arena owning every node of a computation graph.
///
/// Nodes are addressed by [`NodeId`]. A node shared by several children occupies a
/// single slot, so gradient contributions from every consumer land in the same place.
/// Parents are always allocated before their children, which keeps the graph acyclic.
///
/// Indexing with an id that was not issued by this graph, or that was released by
/// [`Graph::rewind`], panics in the same way slice indexing does. Use [`Graph::get`]
/// for a checked lookup.
#[derive(Default, Clone)]
pub struct Graph {
    nodes: Vec<ComputationNode>,
}

/// Arena length recorded by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, node: ComputationNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Creates a leaf node (input, weight or bias).
    pub fn leaf(&mut self, value: f64, label: impl Into<String>) -> NodeId {
        self.push(ComputationNode::new(value, label))
    }

    /// `a + b`
    pub fn add(&mut self, a: NodeId, b: NodeId, label: impl Into<String>) -> NodeId {
        let value = self[a].value + self[b].value;
        self.push(ComputationNode::from_op(value, Op::Add([a, b]), label))
    }

    /// `a - b`
    pub fn sub(&mut self, a: NodeId, b: NodeId, label: impl Into<String>) -> NodeId {
        let value = self[a].value - self[b].value;
        self.push(ComputationNode::from_op(value, Op::Subtract([a, b]), label))
    }

    /// `a * b`
    pub fn mul(&mut self, a: NodeId, b: NodeId, label: impl Into<String>) -> NodeId {
        let value = self[a].value * self[b].value;
        self.push(ComputationNode::from_op(value, Op::Multiply([a, b]), label))
    }

    /// Hyperbolic tangent, evaluated as `(e^{2v} - 1) / (e^{2v} + 1)`.
    ///
    /// Inputs above roughly 354 overflow the exponential and yield `NaN`, which
    /// [`round4`](super::node::round4) keeps as `NaN` rather than collapsing to `0.0`.
    /// Large negative inputs give `-1.0`.
    pub fn tanh(&mut self, a: NodeId, label: impl Into<String>) -> NodeId {
        let e = (2.0 * self[a].value).exp();
        let value = (e - 1.0) / (e + 1.0);
        self.push(ComputationNode::from_op(value, Op::Tanh([a]), label))
    }

    /// Returns every node reachable from `root` through parent links, each exactly once,
    /// with every node placed after all of its parents. `root` is always last.
    ///
    /// This is a depth-first post-order walk visiting parents in their stored order.
    /// An explicit stack replaces recursion so long chains (e.g. a loss summed over many
    /// samples) cannot exhaust the call stack; the order matches the recursive version.
    pub fn topological_sort(&self, root: NodeId) -> Vec<NodeId> {
        let mut visited = vec![false; root.0 + 1];
        let mut sorted = Vec::new();
        // (node, index of the next parent to visit)
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        visited[root.0] = true;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, cursor) = *top;
            match self[node].parents().get(cursor) {
                Some(&parent) => {
                    top.1 += 1;
                    if !visited[parent.0] {
                        visited[parent.0] = true;
                        stack.push((parent, 0));
                    }
                }
                None => {
                    stack.pop();
                    sorted.push(node);
                }
            }
        }
        sorted
    }

    /// Resets the gradient of the given nodes to zero.
    pub fn zero_grad(&mut self, ids: &[NodeId]) {
        for &id in ids {
            self[id].grad = 0.0;
        }
    }

    /// Resets the gradient of every node in the arena to zero.
    pub fn zero_grad_all(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = 0.0;
        }
    }

    pub fn set_grad(&mut self, id: NodeId, grad: f64) {
        self[id].grad = grad;
    }

    /// Overwrites the value of a leaf node. The new value is stored as given (no rounding).
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<()> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(ScalarGradError::IndexOutOfBounds { index: id.0, len })?;
        if !node.is_leaf() {
            return Err(ScalarGradError::NotALeaf {
                index: id.0,
                operator: node.operator().to_string(),
            });
        }
        node.value = value;
        Ok(())
    }

    /// Adds `delta` to the value of a leaf node.
    pub fn update_value(&mut self, id: NodeId, delta: f64) -> Result<()> {
        let current = self.get(id).map(ComputationNode::value).ok_or(
            ScalarGradError::IndexOutOfBounds {
                index: id.0,
                len: self.nodes.len(),
            },
        )?;
        self.set_value(id, current + delta)
    }

    /// Marks the current end of the arena.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.nodes.len())
    }

    /// Releases every node allocated after `checkpoint`.
    ///
    /// Nodes older than the checkpoint never reference newer ones, so the remaining graph
    /// stays intact. Ids issued after the checkpoint become invalid.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.nodes.truncate(checkpoint.0);
    }

    pub fn get(&self, id: NodeId) -> Option<&ComputationNode> {
        self.nodes.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> &ComputationNode {
        &self[id]
    }

    pub fn value(&self, id: NodeId) -> f64 {
        self[id].value
    }

    pub fn grad(&self, id: NodeId) -> f64 {
        self[id].grad
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self[id].label
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over `(id, node)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ComputationNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

impl std::ops::Index<NodeId> for Graph {
    type Output = ComputationNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl std::ops::IndexMut<NodeId> for Graph {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        write!(
            f,
            "Graph(nodes={}, leaves={}, derived={})",
            self.nodes.len(),
            leaves,
            self.nodes.len() - leaves
        )
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
