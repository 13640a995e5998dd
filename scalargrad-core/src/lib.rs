//! Scalar reverse-mode automatic differentiation.
//!
//! Every value is a node in a [`Graph`] arena. Operators append nodes, a backward pass
//! walks them in reverse topological order and accumulates `d(root)/d(node)` into each
//! node's `grad`. The `nn`, `optim` and `train` modules are consumers of that engine.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod optim;
pub mod train;
pub mod utils;

pub use autograd::{Checkpoint, ComputationNode, Graph, NodeId, Op, Operator};
pub use error::{Result, ScalarGradError};
pub use train::{Sample, TrainConfig, Trainer};
// Re-export traits required by public functions
pub use num_traits;
