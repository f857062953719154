use serde::{Deserialize, Serialize};
use wsflex_core::errors::{ErrorInfo, WsError};

/// Parameters of the flexible Watts–Strogatz model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WsFlexParams {
    /// Number of nodes.
    pub n: usize,
    /// Target mean degree, may be fractional (`0 < k <= n`).
    pub k: f64,
    /// Probability of rewiring each ring edge.
    pub p: f64,
    /// Deterministic seed; OS entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl WsFlexParams {
    /// Creates a seeded parameter set.
    pub fn new(n: usize, k: f64, p: f64, seed: u64) -> Self {
        Self {
            n,
            k,
            p,
            seed: Some(seed),
        }
    }

    /// Checks the parameters without generating anything.
    pub fn validate(&self) -> Result<(), WsError> {
        validate_parameters(self.n, self.k, self.p)
    }

    /// Number of ring neighbours on each side, `floor(k / 2)`.
    pub fn half_degree(&self) -> usize {
        half_degree(self.k)
    }

    /// Number of residual edges requested on top of the ring, `floor(n*k/2) mod n`.
    pub fn residual_target(&self) -> usize {
        residual_target(self.n, self.k)
    }
}

pub(crate) fn validate_parameters(n: usize, k: f64, p: f64) -> Result<(), WsError> {
    if n == 0 {
        return Err(WsError::InvalidParameter(
            ErrorInfo::new("empty-graph", "generator requires at least one node")
                .with_context("n", n),
        ));
    }
    if !k.is_finite() {
        return Err(WsError::InvalidDegree(
            ErrorInfo::new("non-finite-degree", "mean degree must be a finite number")
                .with_context("k", k),
        ));
    }
    if k > n as f64 {
        return Err(WsError::InvalidDegree(
            ErrorInfo::new("k-exceeds-n", "k>n, choose smaller k or larger n")
                .with_context("n", n)
                .with_context("k", k),
        ));
    }
    if k <= 0.0 {
        return Err(WsError::InvalidDegree(
            ErrorInfo::new("non-positive-degree", "mean degree must be positive")
                .with_context("k", k),
        ));
    }
    validate_probability(p)
}

pub(crate) fn validate_probability(p: f64) -> Result<(), WsError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(WsError::InvalidParameter(
            ErrorInfo::new("invalid-probability", "rewire probability must lie in [0, 1]")
                .with_context("p", p),
        ));
    }
    Ok(())
}

pub(crate) fn half_degree(k: f64) -> usize {
    (k / 2.0).floor() as usize
}

pub(crate) fn residual_target(n: usize, k: f64) -> usize {
    if n == 0 {
        return 0;
    }
    ((n as f64 * k) / 2.0).floor() as usize % n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_split_matches_floor_formulas() {
        assert_eq!(half_degree(4.0), 2);
        assert_eq!(half_degree(8.5), 4);
        assert_eq!(half_degree(1.9), 0);
        assert_eq!(residual_target(64, 8.5), 16);
        assert_eq!(residual_target(10, 4.0), 0);
        assert_eq!(residual_target(4, 3.0), 2);
        assert_eq!(residual_target(0, 3.0), 0);
    }
}
