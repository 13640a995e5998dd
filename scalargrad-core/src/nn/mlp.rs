use crate::autograd::{Graph, NodeId};
use crate::error::{Result, ScalarGradError};
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use rand::Rng;

/// A stack of fully connected tanh layers.
///
/// `layer_sizes = [4, 4, 1]` with 3 inputs builds three layers of 4, 4 and 1 neurons,
/// the first taking 3 inputs and each following layer taking the previous layer's width.
#[derive(Debug, Clone)]
pub struct MultiLayerPerceptron {
    layers: Vec<Layer>,
}

impl MultiLayerPerceptron {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "a multi-layer perceptron needs at least one layer".to_string(),
            ));
        }
        if in_features == 0 || layer_sizes.contains(&0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer widths must be non-zero (inputs {}, layers {:?})",
                in_features, layer_sizes
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = in_features;
        for (i, &width) in layer_sizes.iter().enumerate() {
            layers.push(Layer::new(graph, fan_in, width, &format!("layer{}", i), rng)?);
            fan_in = width;
        }
        Ok(MultiLayerPerceptron { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn out_features(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }
}

impl Module for MultiLayerPerceptron {
    fn forward(&self, graph: &mut Graph, inputs: &[NodeId]) -> Result<Vec<NodeId>> {
        let mut x = inputs.to_vec();
        for layer in self.layers.iter() {
            x = layer.forward(graph, &x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .flat_map(|l| l.named_parameters())
            .collect()
    }

    fn in_features(&self) -> usize {
        self.layers.first().map_or(0, Layer::in_features)
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
