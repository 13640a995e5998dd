use crate::autograd::{Graph, NodeId};
use crate::error::Result;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use rand::Rng;

/// A fully connected layer of independent neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        out_features: usize,
        name: &str,
        rng: &mut R,
    ) -> Result<Self> {
        let mut neurons = Vec::with_capacity(out_features);
        for i in 0..out_features {
            neurons.push(Neuron::new(
                graph,
                in_features,
                format!("{}.neuron{}", name, i),
                rng,
            )?);
        }
        Ok(Layer {
            neurons,
            in_features,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.neurons
            .iter()
            .flat_map(|n| n.named_parameters())
            .collect()
    }

    fn in_features(&self) -> usize {
        self.in_features
    }
}
