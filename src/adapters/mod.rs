//! Adapters - concrete implementations of the ports.
//!
//! In-memory adapters back tests and single-process deployments; PostgreSQL
//! adapters back production. The template insight source is the default
//! generator and the fallback when an external one misbehaves.

pub mod achievements;
pub mod cache;
pub mod insight;
pub mod partner;
