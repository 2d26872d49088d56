//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `quiz` - Questionnaire answers and flavour archetype classification
//! - `partner` - Past-relationship records
//! - `insight` - Insight payloads, narrative templates, and cache fingerprints
//! - `metrics` - Pure composite metric aggregation
//! - `achievements` - Achievement catalog and unlock evaluation

pub mod achievements;
pub mod foundation;
pub mod insight;
pub mod metrics;
pub mod partner;
pub mod quiz;
