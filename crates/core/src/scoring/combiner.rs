use serde::{Deserialize, Serialize};

use super::{DEFAULT_WEIGHTS, MIN_WEIGHT_SUM};
use crate::errors::DomainError;

/// The four metrics in scoring order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricVector {
    pub duf: f64,
    pub discount_proportion: f64,
    pub pfds: f64,
    pub dscaf: f64,
}

impl MetricVector {
    /// `[DUF, Discount Proportion, PFDS, DSCAF]`
    pub fn as_array(&self) -> [f64; 4] {
        [self.duf, self.discount_proportion, self.pfds, self.dscaf]
    }
}

/// One weight per metric, in the same order as [`MetricVector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricWeights {
    pub duf: f64,
    pub discount_proportion: f64,
    pub pfds: f64,
    pub dscaf: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl MetricWeights {
    pub fn as_array(&self) -> [f64; 4] {
        [self.duf, self.discount_proportion, self.pfds, self.dscaf]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Rescales the weights so they sum to one.
    pub fn normalized(&self) -> Result<Self, DomainError> {
        let sum = self.sum();
        if !sum.is_finite() || sum.abs() < MIN_WEIGHT_SUM {
            return Err(DomainError::DegenerateWeights { sum });
        }

        Ok(self.divided_by(sum))
    }

    fn divided_by(&self, sum: f64) -> Self {
        Self {
            duf: self.duf / sum,
            discount_proportion: self.discount_proportion / sum,
            pfds: self.pfds / sum,
            dscaf: self.dscaf / sum,
        }
    }
}

/// Combines a metric vector into a single signed score.
#[derive(Debug, Clone)]
pub struct ScoreCombiner {
    normalized: MetricWeights,
}

impl ScoreCombiner {
    pub fn new(weights: MetricWeights) -> Result<Self, DomainError> {
        Ok(Self { normalized: weights.normalized()? })
    }

    pub fn normalized_weights(&self) -> &MetricWeights {
        &self.normalized
    }

    pub fn score(&self, metrics: &MetricVector) -> f64 {
        self.normalized
            .as_array()
            .iter()
            .zip(metrics.as_array())
            .map(|(weight, metric)| weight * metric)
            .sum()
    }
}

impl Default for ScoreCombiner {
    fn default() -> Self {
        Self { normalized: DEFAULT_WEIGHTS.divided_by(DEFAULT_WEIGHTS.sum()) }
    }
}
