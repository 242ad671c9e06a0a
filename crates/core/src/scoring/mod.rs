//! Weighted discount hunter score and its threshold.

mod classifier;
mod combiner;

pub use classifier::HunterClassifier;
pub use combiner::{MetricVector, MetricWeights, ScoreCombiner};

/// Base weights before normalization. DSCAF pulls the score down: abandoning
/// a cart after seeing the discount means the discount was not exploited.
pub const DEFAULT_WEIGHTS: MetricWeights =
    MetricWeights { duf: 0.7, discount_proportion: 0.4, pfds: 0.5, dscaf: -0.5 };

/// Scores strictly above this classify the customer as a discount hunter.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Weight sums closer to zero than this cannot be normalized.
pub const MIN_WEIGHT_SUM: f64 = 1e-9;
