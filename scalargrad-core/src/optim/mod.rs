// scalargrad-core/src/optim/mod.rs

//! Optimizers for training networks built on the graph.
//!
//! This module provides the `Optimizer` trait and the `Sgd` gradient step.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
