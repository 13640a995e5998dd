//! Reverse-mode automatic differentiation over scalar nodes.
//!
//! A [`Graph`] owns every [`ComputationNode`]; operators allocate new nodes that remember
//! their operands, [`Graph::topological_sort`] orders the nodes reachable from a root, and
//! the backward pass walks that order in reverse, accumulating gradients into parents.

pub mod backward;
pub mod debug;
pub mod grad_check;
pub mod graph;
pub mod node;

pub use debug::NodeReport;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{Checkpoint, Graph};
pub use node::{round4, round_to, ComputationNode, NodeId, Op, Operator};
