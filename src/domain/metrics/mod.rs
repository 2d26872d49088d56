//! Metrics module - Pure composite metric aggregation.

mod aggregator;

pub use aggregator::{aggregate, AggregateError, CompositeMetrics, MetricWeights, WEIGHTS};
