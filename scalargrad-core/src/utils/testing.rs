use crate::autograd::{Graph, NodeId};

/// Checks that the given nodes hold the expected values within `tolerance`.
/// Panics with the offending node's label if one differs.
pub fn check_values_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(ids.len(), expected.len(), "Node count mismatch");
    for (&id, &e) in ids.iter().zip(expected.iter()) {
        let actual = graph.value(id);
        let diff = (actual - e).abs();
        if diff > tolerance {
            panic!(
                "Value mismatch at node {} ('{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                id,
                graph.label(id),
                actual,
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Same as [`check_values_near`] for the `grad` field.
pub fn check_grads_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(ids.len(), expected.len(), "Node count mismatch");
    for (&id, &e) in ids.iter().zip(expected.iter()) {
        let actual = graph.grad(id);
        let diff = (actual - e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at node {} ('{}'): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                id,
                graph.label(id),
                actual,
                e,
                diff,
                tolerance
            );
        }
    }
}
