use crate::autograd::{Graph, NodeId};
use crate::error::{Result, ScalarGradError};
use crate::nn::init::uniform_;
use crate::nn::module::Module;
use rand::Rng;

/// A single tanh unit: `tanh(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    name: String,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights and a bias, all drawn from `[0, 1)`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        name: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self> {
        let name = name.into();
        let weights: Vec<NodeId> = (0..in_features)
            .map(|i| graph.leaf(0.0, format!("{}.w{}", name, i + 1)))
            .collect();
        let bias = graph.leaf(0.0, format!("{}.b", name));

        uniform_(graph, &weights, 0.0, 1.0, rng)?;
        uniform_(graph, &[bias], 0.0, 1.0, rng)?;

        Ok(Neuron {
            weights,
            bias,
            name,
        })
    }

    /// Wraps existing leaves, e.g. to load known weights.
    pub fn from_parameters(weights: Vec<NodeId>, bias: NodeId, name: impl Into<String>) -> Self {
        Neuron {
            weights,
            bias,
            name: name.into(),
        }
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the activation of this neuron for `inputs` and returns the output node.
    pub fn activate(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<NodeId> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: format!("{} forward", self.name),
            });
        }

        let mut z = graph.leaf(0.0, "output");
        for (i, (&w, &x)) in self.weights.iter().zip(inputs.iter()).enumerate() {
            let wx = graph.mul(w, x, format!("x{}w{}", i + 1, i + 1));
            z = graph.add(z, wx, "z");
        }
        z = graph.add(z, self.bias, "z");
        Ok(graph.tanh(z, "tanh(z)"))
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("{}.w{}", self.name, i + 1), w))
            .collect();
        named.push((format!("{}.b", self.name), self.bias));
        named
    }

    fn in_features(&self) -> usize {
        self.weights.len()
    }
}
