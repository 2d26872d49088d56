//! Insight cache adapters.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryInsightCache;
pub use postgres::PostgresInsightCache;
