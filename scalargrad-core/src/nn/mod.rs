// src/nn/mod.rs
// Neural network building blocks expressed purely as graph operations.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use layer::Layer;
pub use losses::SquaredErrorLoss;
pub use mlp::MultiLayerPerceptron;
pub use module::Module;
pub use neuron::Neuron;
