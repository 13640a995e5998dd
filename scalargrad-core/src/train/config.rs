use crate::error::{Result, ScalarGradError};

/// Hyperparameters of a [`Trainer`](crate::train::Trainer) run.
///
/// The defaults reproduce the road-accident CSV run: a `[5, 8, 8, 1]` network, learning
/// rate `-0.005` (signed, negative descends) and 11 iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
    pub iterations: usize,
    /// Seed for parameter initialisation. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Log every parameter gradient at `debug` level after each backward pass.
    pub log_gradients: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            layer_sizes: vec![5, 8, 8, 1],
            learning_rate: -0.005,
            iterations: 11,
            seed: None,
            log_gradients: false,
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer_sizes(mut self, layer_sizes: Vec<usize>) -> Self {
        self.layer_sizes = layer_sizes;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_gradients(mut self, log_gradients: bool) -> Self {
        self.log_gradients = log_gradients;
        self
    }

    /// Checks the configuration before any graph is built.
    pub fn validate(&self) -> Result<()> {
        match self.layer_sizes.last() {
            None => {
                return Err(ScalarGradError::InvalidConfig(
                    "layer_sizes must not be empty".to_string(),
                ))
            }
            Some(&width) if width != 1 => {
                return Err(ScalarGradError::InvalidConfig(format!(
                    "the output layer must have exactly one neuron, got {}",
                    width
                )))
            }
            Some(_) => {}
        }
        if self.layer_sizes.contains(&0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer widths must be non-zero, got {:?}",
                self.layer_sizes
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate == 0.0 {
            return Err(ScalarGradError::InvalidConfig(format!(
                "learning rate must be finite and non-zero, got {}",
                self.learning_rate
            )));
        }
        if self.iterations == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
