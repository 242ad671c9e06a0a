//! End-to-end discount hunter assessment.
//!
//! Computes the four metrics over one record collection, combines them into
//! the weighted score, and thresholds the score.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::domain::ActivityRecord;
use crate::errors::DomainError;
use crate::metrics::{
    discount_proportion, discount_sensitive_cart_abandonment, discount_usage_frequency,
    purchase_frequency_during_sales,
};
use crate::scoring::{HunterClassifier, MetricVector, ScoreCombiner};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HunterAssessment {
    pub is_discount_hunter: bool,
    pub score: f64,
    pub duf: f64,
    pub discount_proportion: f64,
    pub pfds: f64,
    pub dscaf: f64,
}

impl HunterAssessment {
    pub fn metrics(&self) -> MetricVector {
        MetricVector {
            duf: self.duf,
            discount_proportion: self.discount_proportion,
            pfds: self.pfds,
            dscaf: self.dscaf,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DiscountHunterPipeline {
    combiner: ScoreCombiner,
    classifier: HunterClassifier,
}

impl DiscountHunterPipeline {
    pub fn new(combiner: ScoreCombiner, classifier: HunterClassifier) -> Self {
        Self { combiner, classifier }
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self, DomainError> {
        Ok(Self::new(ScoreCombiner::new(config.weights)?, HunterClassifier::new(config.threshold)))
    }

    pub fn combiner(&self) -> &ScoreCombiner {
        &self.combiner
    }

    pub fn classifier(&self) -> &HunterClassifier {
        &self.classifier
    }

    pub fn metrics(&self, records: &[ActivityRecord]) -> MetricVector {
        // Discount proportion deliberately reads the same rows as DUF.
        MetricVector {
            duf: discount_usage_frequency(records),
            discount_proportion: discount_proportion(records),
            pfds: purchase_frequency_during_sales(records),
            dscaf: discount_sensitive_cart_abandonment(records),
        }
    }

    pub fn assess(&self, records: &[ActivityRecord]) -> HunterAssessment {
        warn_on_mixed_customers(records);

        let metrics = self.metrics(records);
        tracing::debug!(
            event_name = "hunter.metrics.computed",
            records = records.len(),
            duf = metrics.duf,
            discount_proportion = metrics.discount_proportion,
            pfds = metrics.pfds,
            dscaf = metrics.dscaf,
            "discount hunter metrics computed"
        );

        let score = self.combiner.score(&metrics);
        let is_discount_hunter = self.classifier.is_discount_hunter(score);
        tracing::info!(
            event_name = "hunter.assessment.completed",
            records = records.len(),
            score,
            threshold = self.classifier.threshold(),
            is_discount_hunter,
            "discount hunter assessment completed"
        );

        HunterAssessment {
            is_discount_hunter,
            score,
            duf: metrics.duf,
            discount_proportion: metrics.discount_proportion,
            pfds: metrics.pfds,
            dscaf: metrics.dscaf,
        }
    }
}

/// Assesses `records` with the default weights and threshold.
pub fn run(records: &[ActivityRecord]) -> HunterAssessment {
    DiscountHunterPipeline::default().assess(records)
}

fn warn_on_mixed_customers(records: &[ActivityRecord]) {
    let customers: BTreeSet<&str> = records
        .iter()
        .filter_map(|record| record.customer_id.as_ref())
        .map(|customer| customer.0.as_str())
        .collect();

    if customers.len() > 1 {
        tracing::warn!(
            event_name = "hunter.input.mixed_customers",
            customer_count = customers.len(),
            "records span more than one customer; metrics are pooled across them"
        );
    }
}
