// scalargrad-core/src/autograd/node_test.rs

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_round4_truncates_to_four_digits() {
    assert_relative_eq!(round4(0.123_456), 0.1235, epsilon = 1e-12);
    assert_relative_eq!(round4(2.0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(round4(-3.141_59), -3.1416, epsilon = 1e-12);
}

#[test]
fn test_round4_ties_go_up() {
    assert_eq!(round_to(2.5_f64, 0), 3.0);
    assert_eq!(round_to(-2.5_f64, 0), -2.0);
    assert_eq!(round_to(-0.25_f64, 1), -0.2);
}

#[test]
fn test_round4_keeps_non_finite_values() {
    assert!(round4(f64::NAN).is_nan());
    assert_eq!(round4(f64::INFINITY), f64::INFINITY);
    assert_eq!(round4(f64::NEG_INFINITY), f64::NEG_INFINITY);
}

#[test]
fn test_round4_is_idempotent() {
    let samples = [
        0.0, 1.0, -1.0, 0.333_333_3, -0.666_666_6, 6.881_373_587, 123.456_789, -98_765.432_1,
        1e-9, -1e-9, 0.707_106_78,
    ];
    for &x in samples.iter() {
        let once = round4(x);
        assert_eq!(round4(once), once, "round4 not idempotent for {}", x);
    }
}

#[test]
fn test_round_to_generic_f32() {
    assert_relative_eq!(round_to(1.234_56_f32, 2), 1.23_f32, epsilon = 1e-6);
}

#[test]
fn test_new_node_is_rounded_leaf() {
    let node = ComputationNode::new(0.123_456, "x");
    assert_relative_eq!(node.value(), 0.1235, epsilon = 1e-12);
    assert_eq!(node.grad(), 0.0);
    assert!(node.is_leaf());
    assert_eq!(node.operator(), Operator::None);
    assert!(node.parents().is_empty());
    assert_eq!(node.label(), "x");
}

#[test]
fn test_op_arity_matches_parent_count() {
    let a = NodeId(0);
    let b = NodeId(1);
    let ops = [
        Op::Leaf,
        Op::Add([a, b]),
        Op::Subtract([a, b]),
        Op::Multiply([a, b]),
        Op::Tanh([a]),
    ];
    for op in ops.iter() {
        assert_eq!(op.parents().len(), op.operator().arity(), "arity mismatch for {:?}", op);
    }
    assert_eq!(Op::Subtract([b, a]).parents(), &[b, a]);
}

#[test]
fn test_operator_symbols() {
    assert_eq!(Operator::None.to_string(), "");
    assert_eq!(Operator::Add.to_string(), "+");
    assert_eq!(Operator::Subtract.to_string(), "-");
    assert_eq!(Operator::Multiply.to_string(), "*");
    assert_eq!(Operator::Tanh.to_string(), "tanh");
}
