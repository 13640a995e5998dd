use crate::autograd::{Graph, NodeId};
use crate::error::{Result, ScalarGradError};
use crate::optim::optimizer_trait::Optimizer;

/// Plain gradient step: `value += learning_rate * grad` for every managed leaf.
///
/// The rate is signed. A negative rate descends the loss, a positive one ascends it.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<NodeId>,
    learning_rate: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over the given parameter leaves.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if `learning_rate` is NaN or infinite.
    pub fn new(params: impl IntoIterator<Item = NodeId>, learning_rate: f64) -> Result<Self> {
        check_learning_rate(learning_rate)?;
        let params: Vec<NodeId> = params.into_iter().collect();
        if params.is_empty() {
            log::warn!("Sgd created without parameters; step() will be a no-op");
        }
        Ok(Sgd {
            params,
            learning_rate,
        })
    }

    pub fn params(&self) -> &[NodeId] {
        &self.params
    }
}

fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() {
        return Err(ScalarGradError::InvalidConfig(format!(
            "learning rate must be finite, got {}",
            learning_rate
        )));
    }
    Ok(())
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) -> Result<()> {
        for &param in self.params.iter() {
            let grad = graph
                .get(param)
                .map(|node| node.grad())
                .ok_or(ScalarGradError::IndexOutOfBounds {
                    index: param.index(),
                    len: graph.len(),
                })?;
            graph.update_value(param, self.learning_rate * grad)?;
        }
        log::debug!(
            "Sgd step over {} parameters (lr = {})",
            self.params.len(),
            self.learning_rate
        );
        Ok(())
    }

    fn zero_grad(&self, graph: &mut Graph) {
        graph.zero_grad(&self.params);
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        check_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
