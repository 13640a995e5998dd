// scalargrad-core/src/train/trainer.rs

use crate::autograd::{Checkpoint, Graph, NodeId};
use crate::error::{Result, ScalarGradError};
use crate::nn::{Module, MultiLayerPerceptron, SquaredErrorLoss};
use crate::optim::{Optimizer, Sgd};
use crate::train::config::TrainConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One labelled record: the network inputs and the expected scalar output.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Sample { features, target }
    }
}

/// Outcome of one training iteration, read before the parameter update.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    /// Zero-based index of the iteration.
    pub iteration: usize,
    pub loss: f64,
    /// Network output for each sample of the batch, in batch order.
    pub predictions: Vec<f64>,
}

/// Drives a [`MultiLayerPerceptron`] through repeated forward/backward/update cycles.
///
/// The trainer owns the graph. Parameters are allocated first and a checkpoint is taken
/// right after them, so every iteration can rewind the arena and rebuild its inputs,
/// forward pass and loss from scratch without growing memory.
#[derive(Debug)]
pub struct Trainer {
    graph: Graph,
    model: MultiLayerPerceptron,
    optimizer: Sgd,
    loss_fn: SquaredErrorLoss,
    parameters_end: Checkpoint,
    config: TrainConfig,
    iteration: usize,
}

impl Trainer {
    pub fn new(input_dim: usize, config: TrainConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut graph = Graph::new();
        let model =
            MultiLayerPerceptron::new(&mut graph, input_dim, &config.layer_sizes, &mut rng)?;
        let parameters_end = graph.checkpoint();
        let optimizer = Sgd::new(model.parameters(), config.learning_rate)?;
        log::debug!(
            "Trainer: {} inputs, layers {:?}, {} parameters",
            input_dim,
            config.layer_sizes,
            optimizer.params().len()
        );

        Ok(Trainer {
            graph,
            model,
            optimizer,
            loss_fn: SquaredErrorLoss::new(),
            parameters_end,
            config,
            iteration: 0,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn model(&self) -> &MultiLayerPerceptron {
        &self.model
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Number of iterations run so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current value of every parameter, in parameter order.
    pub fn parameter_values(&self) -> Vec<f64> {
        self.optimizer
            .params()
            .iter()
            .map(|&p| self.graph.value(p))
            .collect()
    }

    fn check_width(&self, features: &[f64]) -> Result<()> {
        let expected = self.model.in_features();
        if features.len() != expected {
            return Err(ScalarGradError::DimensionMismatch {
                expected,
                actual: features.len(),
                operation: "Trainer input features".to_string(),
            });
        }
        Ok(())
    }

    fn input_leaves(&mut self, features: &[f64]) -> Vec<NodeId> {
        features
            .iter()
            .enumerate()
            .map(|(i, &v)| self.graph.leaf(v, format!("x{}", i + 1)))
            .collect()
    }

    /// Runs one forward/backward/update cycle over `batch`.
    pub fn run_iteration(&mut self, batch: &[Sample]) -> Result<IterationReport> {
        if batch.is_empty() {
            return Err(ScalarGradError::EmptyBatch);
        }
        for sample in batch.iter() {
            self.check_width(&sample.features)?;
        }

        self.graph.rewind(self.parameters_end);

        let mut outputs = Vec::with_capacity(batch.len());
        let mut targets = Vec::with_capacity(batch.len());
        for sample in batch.iter() {
            let inputs = self.input_leaves(&sample.features);
            let out = self.model.forward(&mut self.graph, &inputs)?;
            outputs.push(out[0]);
            targets.push(self.graph.leaf(sample.target, "y"));
        }
        let loss = self.loss_fn.calculate(&mut self.graph, &outputs, &targets)?;

        let mut order = self.graph.topological_sort(loss);
        order.reverse();
        self.optimizer.zero_grad(&mut self.graph);
        self.graph.set_grad(loss, 1.0);
        for &id in order.iter() {
            self.graph.propagate(id);
        }

        if self.config.log_gradients {
            for (name, param) in self.model.named_parameters() {
                log::debug!(
                    "{}: value {} grad {}",
                    name,
                    self.graph.value(param),
                    self.graph.grad(param)
                );
            }
        }

        let report = IterationReport {
            iteration: self.iteration,
            loss: self.graph.value(loss),
            predictions: outputs.iter().map(|&o| self.graph.value(o)).collect(),
        };

        self.optimizer.step(&mut self.graph)?;
        log::info!("Iteration {}: loss = {}", report.iteration, report.loss);
        self.iteration += 1;
        Ok(report)
    }

    /// Runs `config.iterations` iterations over the full sample set.
    pub fn fit(&mut self, samples: &[Sample]) -> Result<Vec<IterationReport>> {
        let mut reports = Vec::with_capacity(self.config.iterations);
        for _ in 0..self.config.iterations {
            reports.push(self.run_iteration(samples)?);
        }
        if let Some(last) = reports.last() {
            log::info!(
                "Training finished after {} iterations, final loss {}",
                reports.len(),
                last.loss
            );
        }
        Ok(reports)
    }

    /// Forward pass only. The graph is left exactly as it was found.
    pub fn predict(&mut self, features: &[f64]) -> Result<f64> {
        self.check_width(features)?;
        let before = self.graph.checkpoint();
        let inputs = self.input_leaves(features);
        let out = self.model.forward(&mut self.graph, &inputs);
        let prediction = out.map(|out| self.graph.value(out[0]));
        self.graph.rewind(before);
        prediction
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
