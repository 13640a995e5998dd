use super::*;
use approx::assert_relative_eq;

#[test]
fn test_squared_error_value() -> Result<()> {
    let mut graph = Graph::new();
    let preds = [graph.leaf(0.5, "p1"), graph.leaf(-0.2, "p2")];
    let targets = [graph.leaf(1.0, "y1"), graph.leaf(-1.0, "y2")];

    let loss = SquaredErrorLoss::new().calculate(&mut graph, &preds, &targets)?;
    // 0.25 + 0.64
    assert_relative_eq!(graph.value(loss), 0.89, epsilon = 1e-12);
    assert_eq!(graph.label(loss), "netLoss");
    Ok(())
}

#[test]
fn test_squared_error_gradient_is_twice_residual() -> Result<()> {
    let mut graph = Graph::new();
    let preds = [graph.leaf(0.5, "p1"), graph.leaf(-0.2, "p2")];
    let targets = [graph.leaf(1.0, "y1"), graph.leaf(-1.0, "y2")];

    let loss = SquaredErrorLoss::new().calculate(&mut graph, &preds, &targets)?;
    graph.backward(loss);

    assert_relative_eq!(graph.grad(preds[0]), 2.0 * (0.5 - 1.0), epsilon = 1e-12);
    assert_relative_eq!(graph.grad(preds[1]), 2.0 * (-0.2 + 1.0), epsilon = 1e-12);
    assert_relative_eq!(graph.grad(targets[0]), -2.0 * (0.5 - 1.0), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_squared_error_length_mismatch() {
    let mut graph = Graph::new();
    let preds = [graph.leaf(0.5, "p1")];
    let targets = [graph.leaf(1.0, "y1"), graph.leaf(0.0, "y2")];
    let result = SquaredErrorLoss::new().calculate(&mut graph, &preds, &targets);
    assert!(matches!(
        result,
        Err(ScalarGradError::DimensionMismatch {
            expected: 1,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_squared_error_empty_batch() {
    let mut graph = Graph::new();
    let result = SquaredErrorLoss::new().calculate(&mut graph, &[], &[]);
    assert_eq!(result, Err(ScalarGradError::EmptyBatch));
}
