pub mod config;
pub mod domain;
pub mod errors;
pub mod metrics;
pub mod pipeline;
pub mod scoring;

pub use config::{AppConfig, LoadOptions, ScoringConfig};
pub use domain::{
    parse_activity_batch, ActivityRecord, CartRecord, CartStatus, CustomerId, DiscountApplied,
    OrderRecord, SalePeriod,
};
pub use errors::{ApplicationError, DomainError};
pub use metrics::{
    discount_proportion, discount_sensitive_cart_abandonment, discount_usage_frequency,
    purchase_frequency_during_sales, CartActivity, DiscountedRecord, SaleTimedRecord,
};
pub use pipeline::{run, DiscountHunterPipeline, HunterAssessment};
pub use scoring::{
    HunterClassifier, MetricVector, MetricWeights, ScoreCombiner, DEFAULT_THRESHOLD,
    DEFAULT_WEIGHTS,
};
