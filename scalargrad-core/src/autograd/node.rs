// scalargrad-core/src/autograd/node.rs

use num_traits::Float;
use std::fmt;

/// Number of decimal digits every node value is rounded to at construction.
pub const VALUE_PRECISION: i32 = 4;

/// Stable handle to a node living in a [`Graph`](super::graph::Graph) arena.
///
/// Ids are issued in creation order, so an id always compares greater than the ids of
/// the node's parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag describing how a node was produced. `None` marks a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    None,
    Add,
    Subtract,
    Multiply,
    Tanh,
}

impl Operator {
    /// Number of parents a node carrying this tag has.
    pub fn arity(self) -> usize {
        match self {
            Operator::None => 0,
            Operator::Add | Operator::Subtract | Operator::Multiply => 2,
            Operator::Tanh => 1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Tanh => "tanh",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Provenance of a node: the operator together with its operands, in call order.
///
/// The parent count is part of each variant, so an `Add` with a single parent cannot
/// be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Leaf,
    Add([NodeId; 2]),
    Subtract([NodeId; 2]),
    Multiply([NodeId; 2]),
    Tanh([NodeId; 1]),
}

impl Op {
    pub fn operator(&self) -> Operator {
        match self {
            Op::Leaf => Operator::None,
            Op::Add(_) => Operator::Add,
            Op::Subtract(_) => Operator::Subtract,
            Op::Multiply(_) => Operator::Multiply,
            Op::Tanh(_) => Operator::Tanh,
        }
    }

    pub fn parents(&self) -> &[NodeId] {
        match self {
            Op::Leaf => &[],
            Op::Add(p) | Op::Subtract(p) | Op::Multiply(p) => p,
            Op::Tanh(p) => p,
        }
    }
}

/// One scalar value of the computation graph together with its accumulated gradient.
///
/// `value`, `op` and `label` are fixed once the node exists. `grad` is the only field
/// the backward pass and the zeroing step write to; leaf values are additionally
/// updated in place by optimizers through [`Graph::set_value`](super::graph::Graph::set_value).
#[derive(Debug, Clone, PartialEq)]
pub struct ComputationNode {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: String,
}

impl ComputationNode {
    /// Creates a leaf node holding `round4(value)` with a zero gradient.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        ComputationNode {
            value: round4(value),
            grad: 0.0,
            op: Op::Leaf,
            label: label.into(),
        }
    }

    pub(crate) fn from_op(value: f64, op: Op, label: impl Into<String>) -> Self {
        ComputationNode {
            op,
            ..ComputationNode::new(value, label)
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn operator(&self) -> Operator {
        self.op.operator()
    }

    pub fn parents(&self) -> &[NodeId] {
        self.op.parents()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op, Op::Leaf)
    }
}

/// Rounds `x` to `digits` decimal places, ties going toward positive infinity.
pub fn round_to<F: Float>(x: F, digits: i32) -> F {
    let ten = F::from(10.0).unwrap_or_else(F::one);
    let scale = ten.powi(digits);
    let half = F::from(0.5).unwrap_or_else(F::zero);
    (x * scale + half).floor() / scale
}

/// Fixed-precision rounding applied to every node value: `round(x * 10000) / 10000`.
///
/// NaN stays NaN. This differs from an integer-returning round, which maps NaN to 0 and
/// would turn an overflowed `tanh` into a silent `0.0`.
pub fn round4(x: f64) -> f64 {
    round_to(x, VALUE_PRECISION)
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
