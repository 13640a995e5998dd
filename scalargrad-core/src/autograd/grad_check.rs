use crate::autograd::graph::Graph;
use crate::autograd::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Gradient for input {input_index} is NaN or infinite: {value:?}")]
    NonFinite { input_index: usize, value: f64 },

    #[error("Gradient check needs at least one input")]
    EmptyInputs,

    #[error("Finite-difference step must be finite and positive, got {0:?}")]
    InvalidEpsilon(f64),
}

fn evaluate<F>(build: &F, values: &[f64]) -> (Graph, Vec<NodeId>, NodeId)
where
    F: Fn(&mut Graph, &[NodeId]) -> NodeId,
{
    let mut graph = Graph::new();
    let leaves: Vec<NodeId> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| graph.leaf(v, format!("input{}", i)))
        .collect();
    let root = build(&mut graph, &leaves);
    (graph, leaves, root)
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `build` receives a fresh graph plus one leaf per entry of `inputs` and returns the root
/// to differentiate. Analytical gradients come from a single backward pass; each numerical
/// gradient rebuilds the graph with one input shifted by `±epsilon`.
///
/// Node values are rounded to four decimals, so `epsilon` should stay well above `1e-4`
/// and `tolerance` should account for the rounding noise of the expression.
pub fn check_grad<F>(
    build: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> NodeId,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInputs);
    }
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    let (mut graph, leaves, root) = evaluate(&build, inputs);
    graph.backward(root);

    for (i, &leaf) in leaves.iter().enumerate() {
        let analytical = graph.grad(leaf);
        if !analytical.is_finite() {
            return Err(GradCheckError::NonFinite {
                input_index: i,
                value: analytical,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[i] = inputs[i] + epsilon;
        let (g_plus, _, r_plus) = evaluate(&build, &shifted);
        shifted[i] = inputs[i] - epsilon;
        let (g_minus, _, r_minus) = evaluate(&build, &shifted);

        let numerical = (g_plus.value(r_plus) - g_minus.value(r_minus)) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NonFinite {
                input_index: i,
                value: numerical,
            });
        }

        let difference = (analytical - numerical).abs();
        if difference > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_add_sub_mul() {
        let samples: [[f64; 2]; 4] = [[1.5, -2.0], [0.0, 3.0], [-0.5, -0.25], [2.0, 0.0]];
        for pair in samples.iter() {
            check_grad(|g, x| g.add(x[0], x[1], "add"), pair, 1e-2, 1e-3).unwrap();
            check_grad(|g, x| g.sub(x[0], x[1], "sub"), pair, 1e-2, 1e-3).unwrap();
            check_grad(|g, x| g.mul(x[0], x[1], "mul"), pair, 1e-2, 1e-3).unwrap();
        }
    }

    #[test]
    fn test_check_grad_tanh() {
        for &x in [0.0, 0.5, -0.8, 1.7, -2.5].iter() {
            check_grad(|g, v| g.tanh(v[0], "tanh"), &[x], 1e-2, 1e-2).unwrap();
        }
    }

    #[test]
    fn test_check_grad_composite_with_reuse() {
        // tanh(a * b - a) + a * a
        let build = |g: &mut Graph, x: &[NodeId]| {
            let ab = g.mul(x[0], x[1], "ab");
            let inner = g.sub(ab, x[0], "inner");
            let t = g.tanh(inner, "t");
            let sq = g.mul(x[0], x[0], "sq");
            g.add(t, sq, "root")
        };
        check_grad(build, &[0.3, 0.9], 1e-2, 1e-2).unwrap();
        check_grad(build, &[-0.6, 0.2], 1e-2, 1e-2).unwrap();
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // A step this large no longer approximates the slope of tanh at zero.
        let result = check_grad(|g, v| g.tanh(v[0], "tanh"), &[0.0], 5.0, 1e-3);
        match result {
            Err(GradCheckError::GradientMismatch { input_index, analytical, .. }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical, 1.0);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_rejects_bad_arguments() {
        assert_eq!(
            check_grad(|g, v| g.tanh(v[0], "t"), &[], 1e-2, 1e-3),
            Err(GradCheckError::EmptyInputs)
        );
        assert_eq!(
            check_grad(|g, v| g.tanh(v[0], "t"), &[1.0], 0.0, 1e-3),
            Err(GradCheckError::InvalidEpsilon(0.0))
        );
    }
}
