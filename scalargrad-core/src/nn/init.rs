use crate::autograd::{round4, Graph, NodeId};
use crate::error::{Result, ScalarGradError};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Fills the given leaves with values drawn uniformly from `[low, high)`.
///
/// Operates in-place. Drawn values are rounded like any freshly constructed node.
///
/// # Errors
/// `InvalidConfig` if the range is empty, `NotALeaf` if an id is a derived node.
pub fn uniform_<R: Rng + ?Sized>(
    graph: &mut Graph,
    ids: &[NodeId],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<()> {
    if !(low < high) {
        return Err(ScalarGradError::InvalidConfig(format!(
            "uniform_ needs low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    for &id in ids {
        graph.set_value(id, round4(dist.sample(rng)))?;
    }
    Ok(())
}

/// Fills the given leaves with values drawn from `N(mean, std^2)`.
///
/// # Errors
/// `InvalidConfig` if `std` is negative, NaN or infinite, or `mean` is not finite.
/// `NotALeaf` if an id is a derived node.
pub fn normal_<R: Rng + ?Sized>(
    graph: &mut Graph,
    ids: &[NodeId],
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<()> {
    // Normal::new accepts a negative std and samples with the sign flipped.
    if !std.is_finite() || std < 0.0 || !mean.is_finite() {
        return Err(ScalarGradError::InvalidConfig(format!(
            "normal_ needs a finite mean and a finite std >= 0, got N({}, {})",
            mean, std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        ScalarGradError::InvalidConfig(format!("normal_ with std {}: {}", std, e))
    })?;
    for &id in ids {
        graph.set_value(id, round4(dist.sample(rng)))?;
    }
    Ok(())
}

/// Fills the given leaves with `value`.
pub fn constant_(graph: &mut Graph, ids: &[NodeId], value: f64) -> Result<()> {
    for &id in ids {
        graph.set_value(id, round4(value))?;
    }
    Ok(())
}

/// Fills the given leaves with zero.
pub fn zeros_(graph: &mut Graph, ids: &[NodeId]) -> Result<()> {
    constant_(graph, ids, 0.0)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
